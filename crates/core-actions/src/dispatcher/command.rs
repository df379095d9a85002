//! `:w` and `:q`.

use super::DispatchResult;
use crate::ActionError;
use core_text::TextBuffer;

/// Write the buffer to its associated path. A failure leaves the buffer
/// dirty and is returned for the caller to report.
pub(crate) fn handle_write(buffer: &mut TextBuffer) -> Result<DispatchResult, ActionError> {
    match buffer.save() {
        Ok(()) => {
            tracing::info!(
                target: "actions.dispatch",
                op = "write",
                lines = buffer.line_count(),
                "write_ok"
            );
            Ok(DispatchResult::redraw())
        }
        Err(e) => {
            tracing::warn!(target: "actions.dispatch", op = "write", error = %e, "write_failed");
            Err(e.into())
        }
    }
}

pub(crate) fn handle_quit() -> DispatchResult {
    tracing::info!(target: "actions.dispatch", op = "quit", "quit");
    DispatchResult::quit()
}
