/*
 * Pass-through wrappers for `_TrackMouseEvent` and `InitCommonControlsEx`.
 * Both records carry their own size field; the rest is caller-defined.
 */
use crate::binding::Comctl32;
use crate::entry_points::{INIT_COMMON_CONTROLS_EX, TRACK_MOUSE_EVENT, require};
use crate::error::Result as BindingResult;
use crate::types::{InitCommonControlsParams, TrackMouseEventParams};

impl Comctl32 {
    /// Registers (or with `TrackMouseFlags::QUERY`, reads back) mouse tracking for a window.
    pub fn track_mouse_event(&self, params: &mut TrackMouseEventParams) -> BindingResult<bool> {
        let track = require(self.entry_points().track_mouse_event, TRACK_MOUSE_EVENT)?;
        Ok(unsafe { track(params) } != 0)
    }

    /// Registers the requested control classes. Call once before creating common controls.
    pub fn init_common_controls(&self, params: &InitCommonControlsParams) -> BindingResult<bool> {
        let init = require(
            self.entry_points().init_common_controls_ex,
            INIT_COMMON_CONTROLS_EX,
        )?;
        let initialized = unsafe { init(params) } != 0;
        if !initialized {
            log::warn!(
                "InitCommonControlsEx rejected classes {:#x}",
                params.classes.bits()
            );
        }
        Ok(initialized)
    }
}
