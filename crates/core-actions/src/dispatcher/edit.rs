//! Text edit handling (insert / newline / backspace / delete under cursor).

use super::DispatchResult;
use core_text::TextBuffer;

pub(crate) fn insert(buffer: &mut TextBuffer, byte: u8) -> DispatchResult {
    buffer.insert_char(byte);
    DispatchResult::redraw()
}

pub(crate) fn split_line(buffer: &mut TextBuffer) -> DispatchResult {
    buffer.split_line_at_cursor();
    DispatchResult::redraw()
}

/// Remove the byte before the cursor. At column 0 nothing happens: lines are
/// never joined backwards.
pub(crate) fn backspace(buffer: &mut TextBuffer) -> DispatchResult {
    let before = buffer.cursor();
    if before.col == 0 {
        tracing::trace!(target: "actions.dispatch", op = "backspace", row = before.row, "at_line_start");
        return DispatchResult::clean();
    }
    buffer.move_cursor(0, -1);
    buffer.delete_char_forward();
    tracing::trace!(target: "actions.dispatch", op = "backspace", row = before.row, col = before.col, "edit");
    DispatchResult::redraw()
}

pub(crate) fn delete_forward(buffer: &mut TextBuffer) -> DispatchResult {
    let lines_before = buffer.line_count();
    let len_before = buffer.line_len(buffer.cursor().row);
    buffer.delete_char_forward();
    let changed = buffer.line_count() != lines_before
        || buffer.line_len(buffer.cursor().row) != len_before;
    if changed {
        DispatchResult::redraw()
    } else {
        DispatchResult::clean()
    }
}
