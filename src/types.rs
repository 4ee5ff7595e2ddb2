/*
 * Platform-agnostic value types mirrored from the comctl32 ABI. Handles are
 * pointer-sized newtypes so they can cross the `extern "system"` boundary
 * unchanged while staying `Send`, `Copy` and hashable on the Rust side.
 * Parameter records keep the exact field order of their native counterparts
 * and fill in their leading size field themselves.
 */
use std::mem::size_of;

macro_rules! native_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(pub isize);

        impl $name {
            pub const NULL: Self = Self(0);

            pub fn is_null(self) -> bool {
                self.0 == 0
            }
        }
    };
}

native_handle!(
    /// Owner or tracked window (`HWND`).
    WindowHandle
);
native_handle!(
    /// Module instance (`HINSTANCE`).
    InstanceHandle
);
native_handle!(
    /// Image list owned by comctl32 (`HIMAGELIST`). Never destroyed implicitly.
    ImageListHandle
);
native_handle!(
    /// GDI bitmap (`HBITMAP`).
    BitmapHandle
);
native_handle!(
    /// Icon or cursor (`HICON`).
    IconHandle
);

#[cfg(target_os = "windows")]
mod windows_interop {
    use super::{BitmapHandle, IconHandle, InstanceHandle, WindowHandle};
    use windows::Win32::{
        Foundation::{HINSTANCE, HWND},
        Graphics::Gdi::HBITMAP,
        UI::WindowsAndMessaging::HICON,
    };

    impl From<HWND> for WindowHandle {
        fn from(hwnd: HWND) -> Self {
            Self(hwnd.0 as isize)
        }
    }

    impl From<HINSTANCE> for InstanceHandle {
        fn from(instance: HINSTANCE) -> Self {
            Self(instance.0 as isize)
        }
    }

    impl From<HBITMAP> for BitmapHandle {
        fn from(bitmap: HBITMAP) -> Self {
            Self(bitmap.0 as isize)
        }
    }

    impl From<HICON> for IconHandle {
        fn from(icon: HICON) -> Self {
            Self(icon.0 as isize)
        }
    }
}

// Index sentinels understood by ImageList_ReplaceIcon / ImageList_Remove.
pub const IMAGE_LIST_APPEND: i32 = -1;
pub const IMAGE_LIST_ALL: i32 = -1;
/// Returned by `ImageList_Add` and `ImageList_ReplaceIcon` on failure.
pub const IMAGE_LIST_FAILED: i32 = -1;

macro_rules! flag_set {
    ($(#[$meta:meta])* $name:ident { $($(#[$flag_meta:meta])* $flag:ident = $value:expr,)* }) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(pub u32);

        impl $name {
            $($(#[$flag_meta])* pub const $flag: Self = Self($value);)*

            pub fn bits(self) -> u32 {
                self.0
            }

            pub fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }
        }

        impl ::std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl ::std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }
    };
}
pub(crate) use flag_set;

flag_set!(
    /// `ILC_*` creation flags for `ImageList_Create`.
    ImageListFlags {
        MASK = 0x0000_0001,
        COLOR = 0x0000_0000,
        COLOR_DDB = 0x0000_00FE,
        COLOR4 = 0x0000_0004,
        COLOR8 = 0x0000_0008,
        COLOR16 = 0x0000_0010,
        COLOR24 = 0x0000_0018,
        COLOR32 = 0x0000_0020,
        MIRROR = 0x0000_2000,
    }
);

flag_set!(
    /// `ICC_*` control classes registered by `InitCommonControlsEx`.
    CommonControlClasses {
        LISTVIEW = 0x0000_0001,
        TREEVIEW = 0x0000_0002,
        BAR = 0x0000_0004,
        TAB = 0x0000_0008,
        UPDOWN = 0x0000_0010,
        PROGRESS = 0x0000_0020,
        HOTKEY = 0x0000_0040,
        ANIMATE = 0x0000_0080,
        WIN95 = 0x0000_00FF,
        DATE = 0x0000_0100,
        USEREX = 0x0000_0200,
        COOL = 0x0000_0400,
        INTERNET = 0x0000_0800,
        PAGESCROLLER = 0x0000_1000,
        NATIVEFNTCTL = 0x0000_2000,
        STANDARD = 0x0000_4000,
        LINK = 0x0000_8000,
    }
);

flag_set!(
    /// `TME_*` request flags for `_TrackMouseEvent`.
    TrackMouseFlags {
        HOVER = 0x0000_0001,
        LEAVE = 0x0000_0002,
        NONCLIENT = 0x0000_0010,
        QUERY = 0x4000_0000,
        CANCEL = 0x8000_0000,
    }
);

/// Lets the system pick the hover timeout.
pub const HOVER_DEFAULT: u32 = 0xFFFF_FFFF;

/// Mirrors `TRACKMOUSEEVENT`. With `TrackMouseFlags::QUERY` the native call
/// writes the current tracking state back into this record.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackMouseEventParams {
    cb_size: u32,
    pub flags: TrackMouseFlags,
    pub window: WindowHandle,
    pub hover_time: u32,
}

impl TrackMouseEventParams {
    pub fn new(window: WindowHandle, flags: TrackMouseFlags, hover_time: u32) -> Self {
        Self {
            cb_size: size_of::<Self>() as u32,
            flags,
            window,
            hover_time,
        }
    }

    pub fn size(&self) -> u32 {
        self.cb_size
    }
}

/// Mirrors `INITCOMMONCONTROLSEX`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitCommonControlsParams {
    dw_size: u32,
    pub classes: CommonControlClasses,
}

impl InitCommonControlsParams {
    pub fn new(classes: CommonControlClasses) -> Self {
        Self {
            dw_size: size_of::<Self>() as u32,
            classes,
        }
    }

    pub fn size(&self) -> u32 {
        self.dw_size
    }
}
