//! Mode transitions (Normal <-> Insert). The cursor is left where it is in
//! both directions.

use super::DispatchResult;
use core_input::Mode;

pub(crate) fn enter_insert(mode: &mut Mode) -> DispatchResult {
    *mode = Mode::Insert;
    tracing::trace!(target: "actions.dispatch", op = "mode", to = "insert", "mode_change");
    DispatchResult::redraw()
}

pub(crate) fn leave_insert(mode: &mut Mode) -> DispatchResult {
    *mode = Mode::Normal;
    tracing::trace!(target: "actions.dispatch", op = "mode", to = "normal", "mode_change");
    DispatchResult::redraw()
}
