//! Read-only editor snapshot handed to the renderer after each command.

use core_input::Mode;
use core_text::{Position, TextBuffer};
use std::borrow::Cow;
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub struct EditorView<'a> {
    pub lines: &'a [Vec<u8>],
    pub cursor: Position,
    pub source_path: Option<&'a Path>,
    pub dirty: bool,
    pub mode: Mode,
}

impl<'a> EditorView<'a> {
    pub fn new(buffer: &'a TextBuffer, mode: Mode) -> Self {
        Self {
            lines: buffer.lines(),
            cursor: buffer.cursor(),
            source_path: buffer.source_path(),
            dirty: buffer.is_dirty(),
            mode,
        }
    }

    /// The associated path as shown to the user, or `placeholder` for an
    /// unsaved buffer.
    pub fn display_name(&self, placeholder: &'a str) -> Cow<'a, str> {
        match self.source_path {
            Some(path) => path.to_string_lossy(),
            None => Cow::Borrowed(placeholder),
        }
    }
}
