/*
 * Error type shared by every binding operation. Native calls that report plain
 * success flags or sentinel integers pass those through unchanged; only the
 * conditions the native API cannot express safely become a `BindingError`.
 */
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("Failed to load library '{library}': {message}")]
    LibraryLoad { library: String, message: String },

    #[error("Entry point '{0}' is not exported by the loaded comctl32 module")]
    MissingEntryPoint(&'static str),

    #[error("ImageList_Create failed for {width}x{height} with flags {flags:#x}")]
    ImageListCreationFailed { width: i32, height: i32, flags: u32 },

    #[error("Task dialog requires at least one custom button")]
    EmptyButtonSequence,

    #[error("Task dialog field '{field}' contains an interior NUL character")]
    InteriorNul { field: &'static str },

    #[error("TaskDialogIndirect failed with HRESULT {hresult:#010x}")]
    TaskDialogFailed { hresult: i32 },
}

pub type Result<T> = std::result::Result<T, BindingError>;
