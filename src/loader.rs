/*
 * Resolves comctl32.dll through LoadLibraryW/GetProcAddress. The default
 * binding is built once per process behind a `OnceLock`; a load failure is
 * cached as well, so later callers get the same error instead of a retry.
 * The module handle is never released.
 */
use crate::binding::Comctl32;
use crate::entry_points::resolve_entry_points;
use crate::error::{BindingError, Result as BindingResult};

use std::ffi::{CString, c_void};
use std::sync::OnceLock;
use windows::Win32::{
    Foundation::HMODULE,
    System::LibraryLoader::{GetProcAddress, LoadLibraryW},
};
use windows::core::{HSTRING, PCSTR};

pub const COMCTL32_LIBRARY: &str = "comctl32.dll";

fn get_proc_address(module: HMODULE, symbol: &str) -> Option<*const c_void> {
    let name = CString::new(symbol).ok()?;
    unsafe { GetProcAddress(module, PCSTR(name.as_ptr() as *const u8)) }
        .map(|func| func as *const c_void)
}

impl Comctl32 {
    /// Process-wide binding for `comctl32.dll`, resolved on first use.
    pub fn load() -> BindingResult<&'static Comctl32> {
        static COMCTL32: OnceLock<BindingResult<Comctl32>> = OnceLock::new();
        COMCTL32
            .get_or_init(|| Self::load_library(COMCTL32_LIBRARY))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Resolves an explicitly named module. The result is not cached.
    pub fn load_library(library: &str) -> BindingResult<Comctl32> {
        let module = unsafe { LoadLibraryW(&HSTRING::from(library)) }.map_err(|err| {
            log::warn!("Failed to load {library}: {err:?}");
            BindingError::LibraryLoad {
                library: library.to_string(),
                message: err.message(),
            }
        })?;
        log::debug!("Loaded {library} at {:?}", module.0);

        let entry_points = unsafe { resolve_entry_points(|symbol| get_proc_address(module, symbol)) };
        Ok(Self::from_entry_points(entry_points))
    }
}
