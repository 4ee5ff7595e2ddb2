/*
 * Typed bindings for a handful of comctl32.dll entry points: image lists, mouse
 * tracking registration, common control initialization and the modal task
 * dialog. Every operation is a method on `Comctl32`, an immutable table of
 * resolved entry points. On Windows `Comctl32::load()` builds the process-wide
 * instance; any host can also assemble one from its own symbol lookup.
 *
 * Value types, marshalling and the entry-point registry are portable so the
 * logic that shapes native records compiles and is tested on every platform.
 * Only the loader touches the OS.
 */
pub mod binding;
pub mod entry_points;
pub mod error;
#[cfg(test)]
pub(crate) mod fake_comctl32;
pub mod image_list;
pub mod input;
#[cfg(target_os = "windows")]
pub mod loader;
pub mod task_dialog;
pub mod types;

pub use binding::Comctl32;
pub use entry_points::{EntryPoints, resolve_entry_points};
pub use error::{BindingError, Result as BindingResult};
#[cfg(target_os = "windows")]
pub use loader::COMCTL32_LIBRARY;
pub use task_dialog::{
    CommonButtons, IDCANCEL, IDCLOSE, IDNO, IDOK, IDRETRY, IDYES, MarshalledTaskDialog,
    TaskDialogButton, TaskDialogConfig, TaskDialogFlags, TaskDialogOutcome,
};
pub use types::{
    BitmapHandle, CommonControlClasses, HOVER_DEFAULT, IMAGE_LIST_ALL, IMAGE_LIST_APPEND,
    IMAGE_LIST_FAILED, IconHandle, ImageListFlags, ImageListHandle, InitCommonControlsParams,
    InstanceHandle, TrackMouseEventParams, TrackMouseFlags, WindowHandle,
};
