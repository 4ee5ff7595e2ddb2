/*
 * `Comctl32` is the capability every operation is invoked on: an immutable
 * table of resolved entry points. The Windows loader hands out a process-wide
 * instance; hosts that resolve symbols on their own build one with
 * `from_entry_points`. The binding performs no locking; concurrent calls on the
 * same native resource are left to comctl32.
 */
use crate::entry_points::EntryPoints;

#[derive(Debug, Clone)]
pub struct Comctl32 {
    entry_points: EntryPoints,
}

impl Comctl32 {
    pub fn from_entry_points(entry_points: EntryPoints) -> Self {
        let missing = entry_points.missing_symbols();
        if !missing.is_empty() {
            log::debug!("Comctl32 binding created without: {}", missing.join(", "));
        }
        Self { entry_points }
    }

    pub fn entry_points(&self) -> &EntryPoints {
        &self.entry_points
    }
}
