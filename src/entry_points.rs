/*
 * Registry of comctl32 entry points. Symbol lookup is injected as a closure so
 * the same resolution path serves the Windows loader (`GetProcAddress`) and
 * tables assembled by hand. Each entry point is optional: a symbol the loaded
 * module does not export only disables the operation that needs it.
 */
use crate::error::{BindingError, Result as BindingResult};
use crate::task_dialog::NativeTaskDialogConfig;
use crate::types::{
    BitmapHandle, IconHandle, ImageListHandle, InitCommonControlsParams, TrackMouseEventParams,
};

use std::ffi::c_void;

pub const IMAGE_LIST_ADD: &str = "ImageList_Add";
pub const IMAGE_LIST_CREATE: &str = "ImageList_Create";
pub const IMAGE_LIST_DESTROY: &str = "ImageList_Destroy";
pub const IMAGE_LIST_GET_IMAGE_COUNT: &str = "ImageList_GetImageCount";
pub const IMAGE_LIST_REMOVE: &str = "ImageList_Remove";
pub const IMAGE_LIST_REPLACE_ICON: &str = "ImageList_ReplaceIcon";
pub const IMAGE_LIST_SET_IMAGE_COUNT: &str = "ImageList_SetImageCount";
pub const INIT_COMMON_CONTROLS_EX: &str = "InitCommonControlsEx";
pub const TRACK_MOUSE_EVENT: &str = "_TrackMouseEvent";
pub const TASK_DIALOG_INDIRECT: &str = "TaskDialogIndirect";

pub const ALL_SYMBOLS: [&str; 10] = [
    IMAGE_LIST_ADD,
    IMAGE_LIST_CREATE,
    IMAGE_LIST_DESTROY,
    IMAGE_LIST_GET_IMAGE_COUNT,
    IMAGE_LIST_REMOVE,
    IMAGE_LIST_REPLACE_ICON,
    IMAGE_LIST_SET_IMAGE_COUNT,
    INIT_COMMON_CONTROLS_EX,
    TRACK_MOUSE_EVENT,
    TASK_DIALOG_INDIRECT,
];

pub type ImageListAddFn =
    unsafe extern "system" fn(ImageListHandle, BitmapHandle, BitmapHandle) -> i32;
pub type ImageListCreateFn = unsafe extern "system" fn(i32, i32, u32, i32, i32) -> ImageListHandle;
pub type ImageListDestroyFn = unsafe extern "system" fn(ImageListHandle) -> i32;
pub type ImageListGetImageCountFn = unsafe extern "system" fn(ImageListHandle) -> i32;
pub type ImageListRemoveFn = unsafe extern "system" fn(ImageListHandle, i32) -> i32;
pub type ImageListReplaceIconFn = unsafe extern "system" fn(ImageListHandle, i32, IconHandle) -> i32;
pub type ImageListSetImageCountFn = unsafe extern "system" fn(ImageListHandle, u32) -> i32;
pub type InitCommonControlsExFn = unsafe extern "system" fn(*const InitCommonControlsParams) -> i32;
pub type TrackMouseEventFn = unsafe extern "system" fn(*mut TrackMouseEventParams) -> i32;
pub type TaskDialogIndirectFn = unsafe extern "system" fn(
    *const NativeTaskDialogConfig,
    *mut i32,
    *mut i32,
    *mut i32,
) -> i32;

/// Resolved entry points, immutable once built.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryPoints {
    pub image_list_add: Option<ImageListAddFn>,
    pub image_list_create: Option<ImageListCreateFn>,
    pub image_list_destroy: Option<ImageListDestroyFn>,
    pub image_list_get_image_count: Option<ImageListGetImageCountFn>,
    pub image_list_remove: Option<ImageListRemoveFn>,
    pub image_list_replace_icon: Option<ImageListReplaceIconFn>,
    pub image_list_set_image_count: Option<ImageListSetImageCountFn>,
    pub init_common_controls_ex: Option<InitCommonControlsExFn>,
    pub track_mouse_event: Option<TrackMouseEventFn>,
    pub task_dialog_indirect: Option<TaskDialogIndirectFn>,
}

impl EntryPoints {
    /// Symbols that did not resolve, in `ALL_SYMBOLS` order.
    pub fn missing_symbols(&self) -> Vec<&'static str> {
        let present = [
            self.image_list_add.is_some(),
            self.image_list_create.is_some(),
            self.image_list_destroy.is_some(),
            self.image_list_get_image_count.is_some(),
            self.image_list_remove.is_some(),
            self.image_list_replace_icon.is_some(),
            self.image_list_set_image_count.is_some(),
            self.init_common_controls_ex.is_some(),
            self.track_mouse_event.is_some(),
            self.task_dialog_indirect.is_some(),
        ];
        ALL_SYMBOLS
            .iter()
            .zip(present)
            .filter(|(_, present)| !present)
            .map(|(symbol, _)| *symbol)
            .collect()
    }
}

/// Unwraps an optional entry point or reports which symbol is absent.
pub(crate) fn require<F: Copy>(entry: Option<F>, symbol: &'static str) -> BindingResult<F> {
    entry.ok_or(BindingError::MissingEntryPoint(symbol))
}

/// Builds an `EntryPoints` table by asking `lookup` for each symbol in `ALL_SYMBOLS`.
///
/// # Safety
///
/// Every non-null address returned by `lookup` must point to a function with the
/// signature declared for that symbol in this module and must stay valid for as
/// long as the returned table is used.
pub unsafe fn resolve_entry_points(
    lookup: impl Fn(&'static str) -> Option<*const c_void>,
) -> EntryPoints {
    let resolve = |symbol: &'static str| {
        let address = lookup(symbol).filter(|ptr| !ptr.is_null());
        match address {
            Some(ptr) => log::debug!("comctl32: resolved {symbol} at {ptr:?}"),
            None => log::warn!("comctl32: entry point {symbol} is unavailable"),
        }
        address
    };

    macro_rules! resolve_as {
        ($symbol:expr, $fn_type:ty) => {
            resolve($symbol)
                .map(|ptr| unsafe { std::mem::transmute::<*const c_void, $fn_type>(ptr) })
        };
    }

    EntryPoints {
        image_list_add: resolve_as!(IMAGE_LIST_ADD, ImageListAddFn),
        image_list_create: resolve_as!(IMAGE_LIST_CREATE, ImageListCreateFn),
        image_list_destroy: resolve_as!(IMAGE_LIST_DESTROY, ImageListDestroyFn),
        image_list_get_image_count: resolve_as!(
            IMAGE_LIST_GET_IMAGE_COUNT,
            ImageListGetImageCountFn
        ),
        image_list_remove: resolve_as!(IMAGE_LIST_REMOVE, ImageListRemoveFn),
        image_list_replace_icon: resolve_as!(IMAGE_LIST_REPLACE_ICON, ImageListReplaceIconFn),
        image_list_set_image_count: resolve_as!(
            IMAGE_LIST_SET_IMAGE_COUNT,
            ImageListSetImageCountFn
        ),
        init_common_controls_ex: resolve_as!(INIT_COMMON_CONTROLS_EX, InitCommonControlsExFn),
        track_mouse_event: resolve_as!(TRACK_MOUSE_EVENT, TrackMouseEventFn),
        task_dialog_indirect: resolve_as!(TASK_DIALOG_INDIRECT, TaskDialogIndirectFn),
    }
}
