//! Normal-mode command table.

use crate::CTRL_R;

/// Commands available in Normal mode. `Unknown` covers every unmapped byte
/// and malformed `:` sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalCommand {
    EnterInsert,
    Left,
    Down,
    Up,
    Right,
    NextWordStart,
    PreviousWordStart,
    LineStart,
    LineEnd,
    WordEnd,
    DeleteForward,
    Undo,
    Redo,
    Save,
    Quit,
    Unknown,
}

/// Map a single Normal-mode byte. `:` is a prefix and maps to `Unknown`
/// here; the decoder resolves it with [`colon_command`].
pub fn normal_command(byte: u8) -> NormalCommand {
    match byte {
        b'i' => NormalCommand::EnterInsert,
        b'h' => NormalCommand::Left,
        b'j' => NormalCommand::Down,
        b'k' => NormalCommand::Up,
        b'l' => NormalCommand::Right,
        b'w' => NormalCommand::NextWordStart,
        b'b' => NormalCommand::PreviousWordStart,
        b'0' => NormalCommand::LineStart,
        b'$' => NormalCommand::LineEnd,
        b'e' => NormalCommand::WordEnd,
        b'd' => NormalCommand::DeleteForward,
        b'u' => NormalCommand::Undo,
        CTRL_R => NormalCommand::Redo,
        _ => NormalCommand::Unknown,
    }
}

/// Resolve the byte following a `:` prefix.
pub fn colon_command(byte: u8) -> NormalCommand {
    match byte {
        b'w' => NormalCommand::Save,
        b'q' => NormalCommand::Quit,
        _ => NormalCommand::Unknown,
    }
}
