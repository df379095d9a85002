//! Line-oriented text buffer with an owned cursor.
//!
//! Text is modelled as a sequence of single-byte cells: a column is a byte
//! offset into its line and no UTF-8 decoding happens anywhere in this crate.
//! Invariants restored by every operation:
//! * the buffer always holds at least one line;
//! * `cursor.row < line_count()`;
//! * `cursor.col <= line_len(cursor.row)` (equal means "append position").
//!
//! File persistence lives in [`io`], word motions in [`motion`].

use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod io;
pub mod motion;

pub use io::IoError;

/// A cursor location expressed as (row index, byte column within that row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }
    /// Clamp the row into `[0, line_count)` then the column against the
    /// length of the (possibly new) row.
    pub fn clamp_to<F>(&mut self, line_count: usize, mut line_len_fn: F)
    where
        F: FnMut(usize) -> usize,
    {
        if line_count == 0 {
            self.row = 0;
            self.col = 0;
            return;
        }
        if self.row >= line_count {
            self.row = line_count - 1;
        }
        let max_len = line_len_fn(self.row);
        if self.col > max_len {
            self.col = max_len;
        }
    }
}

/// Edit requests the buffer recognises but refuses to carry out.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    #[error("{0} is not supported")]
    Unsupported(&'static str),
}

/// Whitespace classification used by word motions: the C locale `isspace`
/// set. Every other byte, including non-ASCII ones, belongs to a word.
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Split raw file content strictly on `\n`. Empty input yields one empty line.
pub(crate) fn split_lines(content: &[u8]) -> Vec<Vec<u8>> {
    content.split(|&b| b == b'\n').map(<[u8]>::to_vec).collect()
}

/// The editable text of one file plus its cursor and persistence metadata.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<Vec<u8>>,
    cursor: Position,
    source_path: Option<PathBuf>,
    dirty: bool,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    /// An unsaved buffer holding a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
            cursor: Position::origin(),
            source_path: None,
            dirty: false,
        }
    }

    /// Build an unsaved, clean buffer from in-memory content.
    pub fn from_bytes(content: &[u8]) -> Self {
        Self {
            lines: split_lines(content),
            cursor: Position::origin(),
            source_path: None,
            dirty: false,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, idx: usize) -> Option<&[u8]> {
        self.lines.get(idx).map(Vec::as_slice)
    }

    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    /// Byte length of a line; 0 for an out-of-range index.
    pub fn line_len(&self, idx: usize) -> usize {
        self.lines.get(idx).map_or(0, Vec::len)
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn clamp_cursor(&mut self) {
        let lines = &self.lines;
        self.cursor
            .clamp_to(lines.len(), |row| lines.get(row).map_or(0, Vec::len));
    }

    /// Insert one byte at the cursor and advance past it.
    pub fn insert_char(&mut self, c: u8) {
        self.clamp_cursor();
        let Position { row, col } = self.cursor;
        self.lines[row].insert(col, c);
        self.cursor.col += 1;
        self.dirty = true;
        tracing::trace!(target: "text.edit", op = "insert_char", byte = c, row, col, "edit");
    }

    /// Delete the byte under the cursor, or join the next line when the cursor
    /// sits at the end of a non-final line. The cursor never moves.
    pub fn delete_char_forward(&mut self) {
        self.clamp_cursor();
        let Position { row, col } = self.cursor;
        if col < self.lines[row].len() {
            self.lines[row].remove(col);
        } else if row + 1 < self.lines.len() {
            let next = self.lines.remove(row + 1);
            self.lines[row].extend_from_slice(&next);
        } else {
            return;
        }
        self.dirty = true;
        tracing::trace!(target: "text.edit", op = "delete_forward", row, col, "edit");
    }

    /// Break the current line at the cursor; the cursor moves to the start of
    /// the new second half.
    pub fn split_line_at_cursor(&mut self) {
        self.clamp_cursor();
        let Position { row, col } = self.cursor;
        let suffix = self.lines[row].split_off(col);
        self.lines.insert(row + 1, suffix);
        self.cursor = Position::new(row + 1, 0);
        self.dirty = true;
        tracing::trace!(target: "text.edit", op = "split_line", row, col, "edit");
    }

    /// Relative move. The column is clamped against the destination row, so a
    /// vertical move onto a shorter line pulls the cursor back to its end.
    pub fn move_cursor(&mut self, row_delta: isize, col_delta: isize) {
        self.cursor.row = self.cursor.row.saturating_add_signed(row_delta);
        self.cursor.col = self.cursor.col.saturating_add_signed(col_delta);
        self.clamp_cursor();
    }

    /// Absolute move with the same clamping as [`TextBuffer::move_cursor`].
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor = Position::new(row, col);
        self.clamp_cursor();
    }

    pub fn move_to_line_start(&mut self) {
        self.cursor.col = 0;
    }

    pub fn move_to_line_end(&mut self) {
        self.cursor.col = self.line_len(self.cursor.row);
    }

    /// Edit history is not recorded; the request is always refused.
    pub fn undo(&mut self) -> Result<(), EditError> {
        Err(EditError::Unsupported("undo"))
    }

    pub fn redo(&mut self) -> Result<(), EditError> {
        Err(EditError::Unsupported("redo"))
    }
}
