//! Undo / redo requests. No history is recorded, so the buffer refuses both
//! and the refusal is handed back to the caller unchanged.

use super::DispatchResult;
use crate::ActionError;
use core_text::TextBuffer;

pub(crate) fn handle_undo(buffer: &mut TextBuffer) -> Result<DispatchResult, ActionError> {
    buffer.undo()?;
    Ok(DispatchResult::redraw())
}

pub(crate) fn handle_redo(buffer: &mut TextBuffer) -> Result<DispatchResult, ActionError> {
    buffer.redo()?;
    Ok(DispatchResult::redraw())
}
