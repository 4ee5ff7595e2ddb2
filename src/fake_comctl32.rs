/*
 * In-process stand-in for comctl32 used by the unit tests. Every function has
 * the exact `extern "system"` signature of its native counterpart and keeps its
 * state in thread-locals, so each test thread sees a fresh library.
 */
use crate::binding::Comctl32;
use crate::entry_points::*;
use crate::task_dialog::{NativeTaskDialogButton, NativeTaskDialogConfig};
use crate::types::{
    BitmapHandle, IconHandle, ImageListHandle, InitCommonControlsParams, TrackMouseEventParams,
    TrackMouseFlags,
};

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::c_void;
use std::mem::size_of;

const S_OK: i32 = 0;
const E_INVALIDARG: i32 = 0x8007_0057_u32 as i32;

#[derive(Debug, Default)]
struct FakeImageLists {
    next_handle: isize,
    lists: HashMap<isize, Vec<isize>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TaskDialogSnapshot {
    pub size: u32,
    pub parent: isize,
    pub flags: u32,
    pub common_buttons: u32,
    pub width: u32,
    pub window_title: Option<String>,
    pub main_instruction: Option<String>,
    pub content: Option<String>,
    pub verification_text: Option<String>,
    pub expanded_information: Option<String>,
    pub expanded_control_text: Option<String>,
    pub collapsed_control_text: Option<String>,
    pub footer: Option<String>,
    pub buttons: Vec<(i32, String)>,
    pub default_button: i32,
    pub radio_buttons: Vec<(i32, String)>,
    pub default_radio_button: i32,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct TaskDialogResponse {
    pub hresult: i32,
    pub button_id: i32,
    pub radio_button_id: i32,
    pub verification_checked: i32,
}

impl Default for TaskDialogResponse {
    fn default() -> Self {
        Self {
            hresult: S_OK,
            button_id: 0,
            radio_button_id: 0,
            verification_checked: 0,
        }
    }
}

thread_local! {
    static IMAGE_LISTS: RefCell<FakeImageLists> = RefCell::new(FakeImageLists {
        next_handle: 0x1000,
        lists: HashMap::new(),
    });
    static INITIALIZED_CLASSES: RefCell<Vec<u32>> = const { RefCell::new(Vec::new()) };
    static TRACKED: RefCell<Vec<TrackMouseEventParams>> = const { RefCell::new(Vec::new()) };
    static TASK_DIALOG_RESPONSE: RefCell<TaskDialogResponse> =
        RefCell::new(TaskDialogResponse::default());
    static TASK_DIALOG_CALLS: RefCell<Vec<TaskDialogSnapshot>> = const { RefCell::new(Vec::new()) };
}

pub(crate) fn lookup(symbol: &'static str) -> Option<*const c_void> {
    let address = match symbol {
        IMAGE_LIST_ADD => image_list_add as ImageListAddFn as *const c_void,
        IMAGE_LIST_CREATE => image_list_create as ImageListCreateFn as *const c_void,
        IMAGE_LIST_DESTROY => image_list_destroy as ImageListDestroyFn as *const c_void,
        IMAGE_LIST_GET_IMAGE_COUNT => {
            image_list_get_image_count as ImageListGetImageCountFn as *const c_void
        }
        IMAGE_LIST_REMOVE => image_list_remove as ImageListRemoveFn as *const c_void,
        IMAGE_LIST_REPLACE_ICON => {
            image_list_replace_icon as ImageListReplaceIconFn as *const c_void
        }
        IMAGE_LIST_SET_IMAGE_COUNT => {
            image_list_set_image_count as ImageListSetImageCountFn as *const c_void
        }
        INIT_COMMON_CONTROLS_EX => {
            init_common_controls_ex as InitCommonControlsExFn as *const c_void
        }
        TRACK_MOUSE_EVENT => track_mouse_event as TrackMouseEventFn as *const c_void,
        TASK_DIALOG_INDIRECT => task_dialog_indirect as TaskDialogIndirectFn as *const c_void,
        _ => return None,
    };
    Some(address)
}

pub(crate) fn binding() -> Comctl32 {
    Comctl32::from_entry_points(unsafe { resolve_entry_points(lookup) })
}

pub(crate) fn images(handle: ImageListHandle) -> Option<Vec<isize>> {
    IMAGE_LISTS.with(|state| state.borrow().lists.get(&handle.0).cloned())
}

pub(crate) fn initialized_classes() -> Vec<u32> {
    INITIALIZED_CLASSES.with(|classes| classes.borrow().clone())
}

pub(crate) fn tracked_requests() -> Vec<TrackMouseEventParams> {
    TRACKED.with(|tracked| tracked.borrow().clone())
}

pub(crate) fn set_task_dialog_response(response: TaskDialogResponse) {
    TASK_DIALOG_RESPONSE.with(|slot| *slot.borrow_mut() = response);
}

pub(crate) fn task_dialog_calls() -> Vec<TaskDialogSnapshot> {
    TASK_DIALOG_CALLS.with(|calls| calls.borrow().clone())
}

unsafe extern "system" fn image_list_create(
    cx: i32,
    cy: i32,
    _flags: u32,
    initial: i32,
    _grow: i32,
) -> ImageListHandle {
    if cx <= 0 || cy <= 0 || initial < 0 {
        return ImageListHandle::NULL;
    }
    IMAGE_LISTS.with(|state| {
        let mut state = state.borrow_mut();
        state.next_handle += 1;
        let handle = state.next_handle;
        state.lists.insert(handle, Vec::new());
        ImageListHandle(handle)
    })
}

unsafe extern "system" fn image_list_destroy(himl: ImageListHandle) -> i32 {
    IMAGE_LISTS.with(|state| state.borrow_mut().lists.remove(&himl.0).is_some() as i32)
}

unsafe extern "system" fn image_list_get_image_count(himl: ImageListHandle) -> i32 {
    IMAGE_LISTS.with(|state| {
        state
            .borrow()
            .lists
            .get(&himl.0)
            .map_or(0, |images| images.len() as i32)
    })
}

unsafe extern "system" fn image_list_set_image_count(himl: ImageListHandle, count: u32) -> i32 {
    IMAGE_LISTS.with(|state| match state.borrow_mut().lists.get_mut(&himl.0) {
        Some(images) => {
            images.resize(count as usize, 0);
            1
        }
        None => 0,
    })
}

unsafe extern "system" fn image_list_add(
    himl: ImageListHandle,
    image: BitmapHandle,
    _mask: BitmapHandle,
) -> i32 {
    if image.is_null() {
        return -1;
    }
    IMAGE_LISTS.with(|state| match state.borrow_mut().lists.get_mut(&himl.0) {
        Some(images) => {
            images.push(image.0);
            images.len() as i32 - 1
        }
        None => -1,
    })
}

unsafe extern "system" fn image_list_replace_icon(
    himl: ImageListHandle,
    index: i32,
    icon: IconHandle,
) -> i32 {
    IMAGE_LISTS.with(|state| match state.borrow_mut().lists.get_mut(&himl.0) {
        Some(images) if index == -1 => {
            images.push(icon.0);
            images.len() as i32 - 1
        }
        Some(images) if index >= 0 && (index as usize) < images.len() => {
            images[index as usize] = icon.0;
            index
        }
        _ => -1,
    })
}

unsafe extern "system" fn image_list_remove(himl: ImageListHandle, index: i32) -> i32 {
    IMAGE_LISTS.with(|state| match state.borrow_mut().lists.get_mut(&himl.0) {
        Some(images) if index == -1 => {
            images.clear();
            1
        }
        Some(images) if index >= 0 && (index as usize) < images.len() => {
            images.remove(index as usize);
            1
        }
        _ => 0,
    })
}

unsafe extern "system" fn init_common_controls_ex(params: *const InitCommonControlsParams) -> i32 {
    let Some(params) = (unsafe { params.as_ref() }) else {
        return 0;
    };
    if params.size() as usize != size_of::<InitCommonControlsParams>() {
        return 0;
    }
    INITIALIZED_CLASSES.with(|classes| classes.borrow_mut().push(params.classes.bits()));
    1
}

unsafe extern "system" fn track_mouse_event(params: *mut TrackMouseEventParams) -> i32 {
    let Some(params) = (unsafe { params.as_mut() }) else {
        return 0;
    };
    if params.size() as usize != size_of::<TrackMouseEventParams>() || params.window.is_null() {
        return 0;
    }
    TRACKED.with(|tracked| {
        let mut tracked = tracked.borrow_mut();
        if params.flags.contains(TrackMouseFlags::QUERY) {
            if let Some(last) = tracked.last() {
                *params = *last;
            }
        } else {
            tracked.push(*params);
        }
    });
    1
}

unsafe fn read_wide(ptr: *const u16) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let mut len = 0;
    while unsafe { *ptr.add(len) } != 0 {
        len += 1;
    }
    let units = unsafe { std::slice::from_raw_parts(ptr, len) };
    Some(String::from_utf16_lossy(units))
}

/// Reads `count` buttons. The pointer is only touched when `count` is non-zero,
/// as the native dialog does.
unsafe fn read_buttons(ptr: *const NativeTaskDialogButton, count: u32) -> Vec<(i32, String)> {
    (0..count as usize)
        .map(|i| {
            let button = unsafe { std::ptr::read_unaligned(ptr.add(i)) };
            let id = button.button_id;
            let text = unsafe { read_wide(button.button_text) }.unwrap_or_default();
            (id, text)
        })
        .collect()
}

unsafe extern "system" fn task_dialog_indirect(
    config: *const NativeTaskDialogConfig,
    button: *mut i32,
    radio_button: *mut i32,
    verification: *mut i32,
) -> i32 {
    if config.is_null() {
        return E_INVALIDARG;
    }
    let config = unsafe { std::ptr::read_unaligned(config) };
    if config.size as usize != size_of::<NativeTaskDialogConfig>() {
        return E_INVALIDARG;
    }

    let snapshot = unsafe {
        TaskDialogSnapshot {
            size: config.size,
            parent: config.parent.0,
            flags: config.flags,
            common_buttons: config.common_buttons,
            width: config.width,
            window_title: read_wide(config.window_title),
            main_instruction: read_wide(config.main_instruction),
            content: read_wide(config.content),
            verification_text: read_wide(config.verification_text),
            expanded_information: read_wide(config.expanded_information),
            expanded_control_text: read_wide(config.expanded_control_text),
            collapsed_control_text: read_wide(config.collapsed_control_text),
            footer: read_wide(config.footer),
            buttons: read_buttons(config.buttons, config.button_count),
            default_button: config.default_button,
            radio_buttons: read_buttons(config.radio_buttons, config.radio_button_count),
            default_radio_button: config.default_radio_button,
        }
    };
    TASK_DIALOG_CALLS.with(|calls| calls.borrow_mut().push(snapshot));

    let response = TASK_DIALOG_RESPONSE.with(|slot| *slot.borrow());
    unsafe {
        if let Some(out) = button.as_mut() {
            *out = response.button_id;
        }
        if let Some(out) = radio_button.as_mut() {
            *out = response.radio_button_id;
        }
        if let Some(out) = verification.as_mut() {
            *out = response.verification_checked;
        }
    }
    response.hresult
}
