//! Word motions.
//!
//! A word is a maximal run of non-whitespace bytes (see [`crate::is_space`]).
//! Motions only ever cross a line boundary at their entry or exit checks; the
//! inner skips never leave the current line.

use crate::{Position, TextBuffer, is_space};

impl TextBuffer {
    /// Move to the start of the next word.
    ///
    /// Order of checks: end-of-line on entry (wraps to the next line start and
    /// stops), skip the rest of the current word, skip whitespace, then
    /// end-of-line again. Reaching the end of the last line leaves the cursor
    /// at the append position.
    pub fn move_to_next_word_start(&mut self) {
        let Position { row, col } = self.cursor;
        let line = &self.lines[row];
        let has_next = row + 1 < self.lines.len();
        if col >= line.len() {
            if has_next {
                self.cursor = Position::new(row + 1, 0);
            }
            return;
        }
        let mut pos = col;
        while pos < line.len() && !is_space(line[pos]) {
            pos += 1;
        }
        while pos < line.len() && is_space(line[pos]) {
            pos += 1;
        }
        if pos < line.len() {
            self.cursor.col = pos;
        } else if has_next {
            self.cursor = Position::new(row + 1, 0);
        } else {
            self.cursor.col = line.len();
        }
    }

    /// Move to the start of the current or previous word. At column 0 the
    /// cursor goes to the end of the previous line instead.
    pub fn move_to_previous_word_start(&mut self) {
        let Position { row, col } = self.cursor;
        if col == 0 {
            if row > 0 {
                self.cursor = Position::new(row - 1, self.lines[row - 1].len());
            }
            return;
        }
        let line = &self.lines[row];
        // `pos` is one past the byte being examined.
        let mut pos = col.min(line.len());
        while pos > 0 && is_space(line[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && !is_space(line[pos - 1]) {
            pos -= 1;
        }
        self.cursor.col = pos;
    }

    /// Move onto the last byte of the word at or after the cursor.
    pub fn move_to_word_end(&mut self) {
        let Position { row, col } = self.cursor;
        let line = &self.lines[row];
        if col >= line.len() {
            if row + 1 < self.lines.len() {
                self.cursor = Position::new(row + 1, 0);
            }
            return;
        }
        let mut pos = col;
        while pos < line.len() && is_space(line[pos]) {
            pos += 1;
        }
        while pos < line.len() && !is_space(line[pos]) {
            pos += 1;
        }
        self.cursor.col = pos.saturating_sub(1);
    }
}
