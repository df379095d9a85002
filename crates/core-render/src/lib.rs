//! Full-frame terminal renderer.
//!
//! Draws an [`EditorView`] snapshot: a header row (title, name, dirty
//! marker), a blank spacer, the visible text rows with an optional
//! line-number gutter, and a reverse-video status bar on the last row. The
//! whole frame is rebuilt after every command and emitted in one flush.
//!
//! Text is shown one byte per cell: printable ASCII as-is, a tab as a single
//! space, any other byte as `?`, so screen columns always equal buffer
//! columns.

use anyhow::Result;
use core_actions::EditorView;
use std::io::Write;

pub mod status;
pub mod viewport;
pub mod writer;

use status::{StatusContext, fit_status};
use viewport::Viewport;
use writer::Writer;

/// Rows above the text area (header + spacer).
pub const HEADER_ROWS: u16 = 2;
/// Rows below the text area (status bar).
pub const STATUS_ROWS: u16 = 1;
/// Minimum digits reserved for line numbers.
pub const MIN_NUMBER_WIDTH: usize = 3;

/// Gutter width for a buffer of `line_count` lines: the digits of the largest
/// line number (at least [`MIN_NUMBER_WIDTH`]) plus one separating space.
pub fn gutter_width(line_count: usize) -> usize {
    let digits = line_count.max(1).ilog10() as usize + 1;
    digits.max(MIN_NUMBER_WIDTH) + 1
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub title: String,
    pub no_name: String,
    pub line_numbers: bool,
    pub scroll_margin: u16,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Ryu Editor".to_string(),
            no_name: "[No Name]".to_string(),
            line_numbers: true,
            scroll_margin: 0,
        }
    }
}

/// Rows available for buffer text on a terminal `rows` tall.
pub fn text_rows(rows: u16) -> u16 {
    rows.saturating_sub(HEADER_ROWS + STATUS_ROWS)
}

fn display_byte(b: u8) -> char {
    match b {
        0x20..=0x7e => b as char,
        b'\t' => ' ',
        _ => '?',
    }
}

fn display_line(line: &[u8], width: usize) -> String {
    line.iter().take(width).map(|&b| display_byte(b)).collect()
}

/// Owns the scroll state that persists between frames.
#[derive(Debug)]
pub struct Renderer {
    viewport: Viewport,
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            viewport: Viewport::new(0, 0),
            options,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Build the frame for a `(cols, rows)` terminal.
    pub fn compose(
        &mut self,
        view: &EditorView<'_>,
        message: Option<&str>,
        (cols, rows): (u16, u16),
    ) -> Writer {
        let height = text_rows(rows) as usize;
        self.viewport.height = height;
        if self.viewport.scroll_to_cursor(
            view.cursor.row,
            self.options.scroll_margin as usize,
            view.lines.len(),
        ) {
            tracing::trace!(target: "render", first_line = self.viewport.first_line, "viewport_scrolled");
        }

        let gutter = if self.options.line_numbers {
            gutter_width(view.lines.len())
        } else {
            0
        };
        let text_width = (cols as usize).saturating_sub(gutter);
        let name = view.display_name(&self.options.no_name);

        let mut w = Writer::new();
        w.hide_cursor();
        w.clear_all();
        w.move_to(0, 0);
        let dirty = if view.dirty { " [+]" } else { "" };
        let header: String = format!("{} - {}{}", self.options.title, name, dirty)
            .chars()
            .take(cols as usize)
            .collect();
        w.print(header);

        let first = self.viewport.first_line;
        for (screen_row, line) in view.lines.iter().skip(first).take(height).enumerate() {
            w.move_to(0, HEADER_ROWS + screen_row as u16);
            if self.options.line_numbers {
                let number = format!("{:>width$} ", first + screen_row + 1, width = gutter - 1);
                w.print(number.chars().take(cols as usize).collect::<String>());
            }
            w.print(display_line(line, text_width));
        }

        if rows > 0 {
            let status = fit_status(
                &StatusContext {
                    mode: view.mode,
                    name: &name,
                    dirty: view.dirty,
                    row: view.cursor.row,
                    col: view.cursor.col,
                    message,
                },
                cols as usize,
            );
            w.move_to(0, rows - 1);
            w.print_reverse(status);
        }

        if height > 0 && cols > 0 {
            let y = HEADER_ROWS as usize + (view.cursor.row - first);
            let x = (gutter + view.cursor.col).min(cols as usize - 1);
            w.move_to(x as u16, y as u16);
            w.show_cursor();
        }
        w
    }

    /// Compose and emit one frame.
    pub fn render<W: Write>(
        &mut self,
        out: &mut W,
        view: &EditorView<'_>,
        message: Option<&str>,
        size: (u16, u16),
    ) -> Result<()> {
        self.compose(view, message, size).flush_to(out)
    }
}
