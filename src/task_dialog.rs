/*
 * Task dialog marshalling. A host-level `TaskDialogConfig` is converted into
 * `MarshalledTaskDialog`, which owns every NUL-terminated UTF-16 buffer and both
 * native button tables, plus the packed `TASKDIALOGCONFIG` image whose raw
 * pointers reference those buffers. The heap storage never moves once built,
 * so the native record stays valid for as long as the marshalled value lives.
 *
 * Empty optional strings stay null. The radio table is only populated when the
 * host supplies radio buttons; otherwise its count, pointer and default remain zero.
 */
use crate::binding::Comctl32;
use crate::entry_points::{TASK_DIALOG_INDIRECT, require};
use crate::error::{BindingError, Result as BindingResult};
use crate::types::{InstanceHandle, WindowHandle, flag_set};

use std::ptr;

const S_OK: i32 = 0;

flag_set!(
    /// `TDF_*` behavior flags.
    TaskDialogFlags {
        ENABLE_HYPERLINKS = 0x0000_0001,
        USE_HICON_MAIN = 0x0000_0002,
        USE_HICON_FOOTER = 0x0000_0004,
        ALLOW_DIALOG_CANCELLATION = 0x0000_0008,
        USE_COMMAND_LINKS = 0x0000_0010,
        USE_COMMAND_LINKS_NO_ICON = 0x0000_0020,
        EXPAND_FOOTER_AREA = 0x0000_0040,
        EXPANDED_BY_DEFAULT = 0x0000_0080,
        VERIFICATION_FLAG_CHECKED = 0x0000_0100,
        SHOW_PROGRESS_BAR = 0x0000_0200,
        SHOW_MARQUEE_PROGRESS_BAR = 0x0000_0400,
        CALLBACK_TIMER = 0x0000_0800,
        POSITION_RELATIVE_TO_WINDOW = 0x0000_1000,
        RTL_LAYOUT = 0x0000_2000,
        NO_DEFAULT_RADIO_BUTTON = 0x0000_4000,
        CAN_BE_MINIMIZED = 0x0000_8000,
        SIZE_TO_CONTENT = 0x0100_0000,
    }
);

flag_set!(
    /// `TDCBF_*` stock buttons shown next to the custom ones.
    CommonButtons {
        OK = 0x0001,
        YES = 0x0002,
        NO = 0x0004,
        CANCEL = 0x0008,
        RETRY = 0x0010,
        CLOSE = 0x0020,
    }
);

// Button ids reported for the stock buttons.
pub const IDOK: i32 = 1;
pub const IDCANCEL: i32 = 2;
pub const IDRETRY: i32 = 4;
pub const IDYES: i32 = 6;
pub const IDNO: i32 = 7;
pub const IDCLOSE: i32 = 8;

/// A custom push button or radio button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDialogButton {
    pub id: i32,
    pub text: String,
}

impl TaskDialogButton {
    pub fn new(id: i32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Host-side description of a task dialog. Empty strings mean "field absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDialogConfig {
    pub parent: WindowHandle,
    pub instance: InstanceHandle,
    pub flags: TaskDialogFlags,
    pub common_buttons: CommonButtons,
    pub window_title: String,
    pub main_instruction: String,
    pub content: String,
    pub verification_text: String,
    pub expanded_information: String,
    pub expanded_control_text: String,
    pub collapsed_control_text: String,
    pub footer: String,
    pub buttons: Vec<TaskDialogButton>,
    pub default_button: i32,
    pub radio_buttons: Vec<TaskDialogButton>,
    pub default_radio_button: i32,
    /// Dialog width in dialog units; zero lets the system choose.
    pub width: u32,
}

impl TaskDialogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parent(mut self, parent: WindowHandle) -> Self {
        self.parent = parent;
        self
    }

    pub fn instance(mut self, instance: InstanceHandle) -> Self {
        self.instance = instance;
        self
    }

    pub fn flags(mut self, flags: TaskDialogFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn common_buttons(mut self, common_buttons: CommonButtons) -> Self {
        self.common_buttons = common_buttons;
        self
    }

    pub fn window_title(mut self, text: impl Into<String>) -> Self {
        self.window_title = text.into();
        self
    }

    pub fn main_instruction(mut self, text: impl Into<String>) -> Self {
        self.main_instruction = text.into();
        self
    }

    pub fn content(mut self, text: impl Into<String>) -> Self {
        self.content = text.into();
        self
    }

    pub fn verification_text(mut self, text: impl Into<String>) -> Self {
        self.verification_text = text.into();
        self
    }

    pub fn expanded_information(mut self, text: impl Into<String>) -> Self {
        self.expanded_information = text.into();
        self
    }

    pub fn expanded_control_text(mut self, text: impl Into<String>) -> Self {
        self.expanded_control_text = text.into();
        self
    }

    pub fn collapsed_control_text(mut self, text: impl Into<String>) -> Self {
        self.collapsed_control_text = text.into();
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = text.into();
        self
    }

    pub fn button(mut self, id: i32, text: impl Into<String>) -> Self {
        self.buttons.push(TaskDialogButton::new(id, text));
        self
    }

    pub fn default_button(mut self, id: i32) -> Self {
        self.default_button = id;
        self
    }

    pub fn radio_button(mut self, id: i32, text: impl Into<String>) -> Self {
        self.radio_buttons.push(TaskDialogButton::new(id, text));
        self
    }

    pub fn default_radio_button(mut self, id: i32) -> Self {
        self.default_radio_button = id;
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }
}

/// What the user chose. Only produced when `TaskDialogIndirect` returned `S_OK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskDialogOutcome {
    pub button_id: i32,
    pub radio_button_id: i32,
    pub verification_checked: bool,
}

/// Mirrors `TASKDIALOG_BUTTON`.
#[repr(C, packed(1))]
#[derive(Debug, Clone, Copy)]
pub struct NativeTaskDialogButton {
    pub button_id: i32,
    pub button_text: *const u16,
}

/// Mirrors `TASKDIALOGCONFIG`. The icon and callback slots are never populated
/// by this binding and are kept as plain pointer-sized integers.
#[repr(C, packed(1))]
#[derive(Debug, Clone, Copy)]
pub struct NativeTaskDialogConfig {
    pub size: u32,
    pub parent: WindowHandle,
    pub instance: InstanceHandle,
    pub flags: u32,
    pub common_buttons: u32,
    pub window_title: *const u16,
    pub main_icon: isize,
    pub main_instruction: *const u16,
    pub content: *const u16,
    pub button_count: u32,
    pub buttons: *const NativeTaskDialogButton,
    pub default_button: i32,
    pub radio_button_count: u32,
    pub radio_buttons: *const NativeTaskDialogButton,
    pub default_radio_button: i32,
    pub verification_text: *const u16,
    pub expanded_information: *const u16,
    pub expanded_control_text: *const u16,
    pub collapsed_control_text: *const u16,
    pub footer_icon: isize,
    pub footer: *const u16,
    pub callback: isize,
    pub callback_data: isize,
    pub width: u32,
}

impl NativeTaskDialogConfig {
    fn zeroed() -> Self {
        Self {
            size: 0,
            parent: WindowHandle::NULL,
            instance: InstanceHandle::NULL,
            flags: 0,
            common_buttons: 0,
            window_title: ptr::null(),
            main_icon: 0,
            main_instruction: ptr::null(),
            content: ptr::null(),
            button_count: 0,
            buttons: ptr::null(),
            default_button: 0,
            radio_button_count: 0,
            radio_buttons: ptr::null(),
            default_radio_button: 0,
            verification_text: ptr::null(),
            expanded_information: ptr::null(),
            expanded_control_text: ptr::null(),
            collapsed_control_text: ptr::null(),
            footer_icon: 0,
            footer: ptr::null(),
            callback: 0,
            callback_data: 0,
            width: 0,
        }
    }
}

/// Encodes `text` as NUL-terminated UTF-16. Interior NULs would silently cut
/// the string short on the native side, so they are rejected.
pub(crate) fn to_wide(text: &str, field: &'static str) -> BindingResult<Vec<u16>> {
    if text.contains('\0') {
        return Err(BindingError::InteriorNul { field });
    }
    Ok(text.encode_utf16().chain(std::iter::once(0)).collect())
}

/// Encodes `text` into `strings` and returns the address of the stored buffer.
/// Button labels always go through here, so an empty label is `""`, never null.
fn keep_wide(
    strings: &mut Vec<Vec<u16>>,
    text: &str,
    field: &'static str,
) -> BindingResult<*const u16> {
    let wide = to_wide(text, field)?;
    let address = wide.as_ptr();
    strings.push(wide);
    Ok(address)
}

/// A task dialog ready to hand to `TaskDialogIndirect`.
#[derive(Debug)]
pub struct MarshalledTaskDialog {
    native: NativeTaskDialogConfig,
    _strings: Vec<Vec<u16>>,
    buttons: Vec<NativeTaskDialogButton>,
    radio_buttons: Vec<NativeTaskDialogButton>,
}

impl MarshalledTaskDialog {
    pub fn new(config: &TaskDialogConfig) -> BindingResult<Self> {
        if config.buttons.is_empty() {
            return Err(BindingError::EmptyButtonSequence);
        }

        let mut strings: Vec<Vec<u16>> = Vec::new();
        let mut store = |text: &str, field: &'static str| -> BindingResult<*const u16> {
            if text.is_empty() {
                return Ok(ptr::null());
            }
            keep_wide(&mut strings, text, field)
        };

        let mut native = NativeTaskDialogConfig::zeroed();
        native.size = std::mem::size_of::<NativeTaskDialogConfig>() as u32;
        native.parent = config.parent;
        native.instance = config.instance;
        native.flags = config.flags.bits();
        native.common_buttons = config.common_buttons.bits();
        native.width = config.width;

        native.window_title = store(&config.window_title, "window_title")?;
        native.main_instruction = store(&config.main_instruction, "main_instruction")?;
        native.content = store(&config.content, "content")?;
        native.verification_text = store(&config.verification_text, "verification_text")?;
        native.expanded_information = store(&config.expanded_information, "expanded_information")?;
        native.expanded_control_text =
            store(&config.expanded_control_text, "expanded_control_text")?;
        native.collapsed_control_text =
            store(&config.collapsed_control_text, "collapsed_control_text")?;
        native.footer = store(&config.footer, "footer")?;

        let mut native_buttons = |buttons: &[TaskDialogButton], field: &'static str| {
            buttons
                .iter()
                .map(|button| -> BindingResult<NativeTaskDialogButton> {
                    Ok(NativeTaskDialogButton {
                        button_id: button.id,
                        button_text: keep_wide(&mut strings, &button.text, field)?,
                    })
                })
                .collect::<BindingResult<Vec<_>>>()
        };
        let buttons = native_buttons(&config.buttons, "buttons")?;
        let radio_buttons = native_buttons(&config.radio_buttons, "radio_buttons")?;

        native.button_count = buttons.len() as u32;
        native.buttons = buttons.as_ptr();
        native.default_button = config.default_button;

        if !radio_buttons.is_empty() {
            native.radio_button_count = radio_buttons.len() as u32;
            native.radio_buttons = radio_buttons.as_ptr();
            native.default_radio_button = config.default_radio_button;
        }

        Ok(Self {
            native,
            _strings: strings,
            buttons,
            radio_buttons,
        })
    }

    pub fn native(&self) -> &NativeTaskDialogConfig {
        &self.native
    }

    pub fn buttons(&self) -> &[NativeTaskDialogButton] {
        &self.buttons
    }

    pub fn radio_buttons(&self) -> &[NativeTaskDialogButton] {
        &self.radio_buttons
    }
}

impl Comctl32 {
    /// Shows a modal task dialog and blocks until it is dismissed.
    ///
    /// A failure HRESULT is reported as `BindingError::TaskDialogFailed`, so an
    /// `Ok` outcome always reflects an actual user choice.
    pub fn task_dialog(&self, config: &TaskDialogConfig) -> BindingResult<TaskDialogOutcome> {
        let task_dialog_indirect = require(
            self.entry_points().task_dialog_indirect,
            TASK_DIALOG_INDIRECT,
        )?;
        let marshalled = MarshalledTaskDialog::new(config)?;

        let mut button_id = 0_i32;
        let mut radio_button_id = 0_i32;
        let mut verification = 0_i32;
        let hresult = unsafe {
            task_dialog_indirect(
                marshalled.native(),
                &mut button_id,
                &mut radio_button_id,
                &mut verification,
            )
        };

        if hresult != S_OK {
            log::warn!("TaskDialogIndirect failed with HRESULT {hresult:#010x}");
            return Err(BindingError::TaskDialogFailed { hresult });
        }

        log::debug!(
            "Task dialog closed: button {button_id}, radio {radio_button_id}, verification {verification}"
        );
        Ok(TaskDialogOutcome {
            button_id,
            radio_button_id,
            verification_checked: verification > 0,
        })
    }
}
