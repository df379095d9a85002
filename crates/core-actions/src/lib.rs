//! Modal input controller.
//!
//! Owns the editor [`Mode`] and applies decoded keys to a [`TextBuffer`]:
//! Normal-mode commands go through the fixed command table, Insert-mode
//! bytes are classified here (escape / enter / backspace / literal).
//! After every step [`ModalInputController::view`] exposes a read-only
//! snapshot for the renderer.

use core_input::{BS, CR, DEL, ESC, Key, KeyDecoder, Mode};
use core_text::{EditError, IoError, TextBuffer};
use std::io::Read;
use thiserror::Error;

pub mod dispatcher;
mod view;

pub use dispatcher::DispatchResult;
pub use view::EditorView;

/// Cursor motions reachable from Normal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    NextWordStart,
    PreviousWordStart,
    WordEnd,
}

/// How an Insert-mode byte is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertByte {
    Escape,
    Enter,
    Backspace,
    Literal(u8),
}

impl InsertByte {
    pub fn classify(byte: u8) -> Self {
        match byte {
            ESC => InsertByte::Escape,
            CR => InsertByte::Enter,
            DEL | BS => InsertByte::Backspace,
            other => InsertByte::Literal(other),
        }
    }
}

/// Failures surfaced by a dispatched command. None of them are fatal to the
/// session; the caller decides how to report them.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Edit(#[from] EditError),
}

/// The Normal/Insert state machine.
#[derive(Debug, Default)]
pub struct ModalInputController {
    mode: Mode,
}

impl ModalInputController {
    pub fn new() -> Self {
        Self { mode: Mode::Normal }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Read one key for the current mode and apply it.
    pub fn step<R: Read>(
        &mut self,
        decoder: &mut KeyDecoder<R>,
        buffer: &mut TextBuffer,
    ) -> Result<DispatchResult, ActionError> {
        let key = decoder.next_key(self.mode);
        self.handle_key(key, buffer)
    }

    /// Apply an already decoded key.
    pub fn handle_key(
        &mut self,
        key: Key,
        buffer: &mut TextBuffer,
    ) -> Result<DispatchResult, ActionError> {
        dispatcher::dispatch(key, &mut self.mode, buffer)
    }

    pub fn view<'a>(&self, buffer: &'a TextBuffer) -> EditorView<'a> {
        EditorView::new(buffer, self.mode)
    }
}
