//! Raw input decoding.
//!
//! The editor reads the terminal byte by byte. [`KeyDecoder`] turns that
//! stream into one [`Key`] per call: in Normal mode a [`NormalCommand`]
//! resolved through the fixed key table, in Insert mode the raw byte itself
//! (classification of control bytes is left to the mode controller).

mod command;
mod decoder;

pub use command::{NormalCommand, colon_command, normal_command};
pub use decoder::KeyDecoder;

/// Escape: leaves Insert mode.
pub const ESC: u8 = 0x1b;
/// Carriage return, sent by Enter in raw mode.
pub const CR: u8 = 0x0d;
/// Delete, sent by Backspace on most terminals.
pub const DEL: u8 = 0x7f;
/// Backspace (Ctrl-H).
pub const BS: u8 = 0x08;
/// Ctrl-R.
pub const CTRL_R: u8 = 0x12;

/// Editor mode. Determines how the decoder interprets the next byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
        }
    }
}

/// One decoded unit of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Normal(NormalCommand),
    /// Undecoded byte read in Insert mode.
    Insert(u8),
    /// The input stream ended (or failed) before a new command started.
    Closed,
}

#[inline]
pub(crate) fn log_decoded(mode: Mode, key: &Key) {
    tracing::trace!(target: "input.decode", mode = mode.as_str(), ?key, "decoded");
}
