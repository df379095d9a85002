//! Dispatcher applying decoded keys to the buffer.
//!
//! Sub-modules mirror the command families:
//! * `motion`  - cursor movement
//! * `mode`    - Normal <-> Insert transitions
//! * `edit`    - text mutation (insert / delete / backspace / newline)
//! * `command` - `:w` and `:q`
//! * `undo`    - undo / redo requests
//!
//! Every Normal command and every Insert byte class is matched exhaustively
//! so adding a variant to the command table fails to compile until it is
//! routed here.

use crate::{ActionError, InsertByte, MotionKind};
use core_input::{Key, Mode, NormalCommand};
use core_text::TextBuffer;

mod command;
mod edit;
mod mode;
mod motion;
mod undo;

/// Result of dispatching a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Something visible changed (text, cursor or mode).
    pub redraw: bool,
    /// The run loop should stop.
    pub quit: bool,
}

impl DispatchResult {
    pub fn redraw() -> Self {
        Self {
            redraw: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            redraw: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            redraw: false,
            quit: true,
        }
    }
}

/// Apply `key` under the current `mode`, possibly switching it.
///
/// A key decoded for a different mode than the current one is ignored.
/// [`Key::Closed`] ends the session in either mode.
pub fn dispatch(
    key: Key,
    mode: &mut Mode,
    buffer: &mut TextBuffer,
) -> Result<DispatchResult, ActionError> {
    match (*mode, key) {
        (_, Key::Closed) => {
            tracing::info!(target: "actions.dispatch", "input_closed");
            Ok(DispatchResult::quit())
        }
        (Mode::Normal, Key::Normal(cmd)) => dispatch_normal(cmd, mode, buffer),
        (Mode::Insert, Key::Insert(byte)) => Ok(dispatch_insert(byte, mode, buffer)),
        (current, key) => {
            tracing::debug!(target: "actions.dispatch", mode = current.as_str(), ?key, "key_mode_mismatch");
            Ok(DispatchResult::clean())
        }
    }
}

fn dispatch_normal(
    cmd: NormalCommand,
    mode: &mut Mode,
    buffer: &mut TextBuffer,
) -> Result<DispatchResult, ActionError> {
    let result = match cmd {
        NormalCommand::EnterInsert => mode::enter_insert(mode),
        NormalCommand::Left => motion::handle_motion(MotionKind::Left, buffer),
        NormalCommand::Down => motion::handle_motion(MotionKind::Down, buffer),
        NormalCommand::Up => motion::handle_motion(MotionKind::Up, buffer),
        NormalCommand::Right => motion::handle_motion(MotionKind::Right, buffer),
        NormalCommand::NextWordStart => motion::handle_motion(MotionKind::NextWordStart, buffer),
        NormalCommand::PreviousWordStart => {
            motion::handle_motion(MotionKind::PreviousWordStart, buffer)
        }
        NormalCommand::LineStart => motion::handle_motion(MotionKind::LineStart, buffer),
        NormalCommand::LineEnd => motion::handle_motion(MotionKind::LineEnd, buffer),
        NormalCommand::WordEnd => motion::handle_motion(MotionKind::WordEnd, buffer),
        NormalCommand::DeleteForward => edit::delete_forward(buffer),
        NormalCommand::Undo => undo::handle_undo(buffer)?,
        NormalCommand::Redo => undo::handle_redo(buffer)?,
        NormalCommand::Save => command::handle_write(buffer)?,
        NormalCommand::Quit => command::handle_quit(),
        NormalCommand::Unknown => DispatchResult::clean(),
    };
    Ok(result)
}

fn dispatch_insert(byte: u8, mode: &mut Mode, buffer: &mut TextBuffer) -> DispatchResult {
    match InsertByte::classify(byte) {
        InsertByte::Escape => mode::leave_insert(mode),
        InsertByte::Enter => edit::split_line(buffer),
        InsertByte::Backspace => edit::backspace(buffer),
        InsertByte::Literal(b) => edit::insert(buffer, b),
    }
}
