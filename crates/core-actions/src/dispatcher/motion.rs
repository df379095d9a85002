//! Motion sub-dispatch (cursor movement).
//!
//! Each motion maps onto exactly one `TextBuffer` primitive; horizontal and
//! vertical steps go through `move_cursor`, which owns all clamping.

use super::DispatchResult;
use crate::MotionKind;
use core_text::TextBuffer;

pub(crate) fn handle_motion(kind: MotionKind, buffer: &mut TextBuffer) -> DispatchResult {
    let before = buffer.cursor();
    match kind {
        MotionKind::Left => buffer.move_cursor(0, -1),
        MotionKind::Right => buffer.move_cursor(0, 1),
        MotionKind::Up => buffer.move_cursor(-1, 0),
        MotionKind::Down => buffer.move_cursor(1, 0),
        MotionKind::LineStart => buffer.move_to_line_start(),
        MotionKind::LineEnd => buffer.move_to_line_end(),
        MotionKind::NextWordStart => buffer.move_to_next_word_start(),
        MotionKind::PreviousWordStart => buffer.move_to_previous_word_start(),
        MotionKind::WordEnd => buffer.move_to_word_end(),
    }
    let after = buffer.cursor();
    tracing::trace!(
        target: "actions.dispatch",
        op = "motion",
        ?kind,
        row = before.row,
        col = before.col,
        to_row = after.row,
        to_col = after.col,
        "motion"
    );
    if before != after {
        DispatchResult::redraw()
    } else {
        DispatchResult::clean()
    }
}
