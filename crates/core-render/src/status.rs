//! Status line composition.
//!
//! Format: ` MODE | <name>[ [+]] | Row: R, Col: C[ | <message>]` with 1-based
//! row and column. `<name>` is the file path or the configured placeholder
//! for an unsaved buffer; `[+]` marks unsaved changes.
//!
//! Two stages: `compose_status` produces ordered segments, `format_status`
//! turns them into the final string.

use core_input::Mode;

/// What the status line needs to know.
pub struct StatusContext<'a> {
    pub mode: Mode,
    pub name: &'a str,
    pub dirty: bool,
    pub row: usize, // 0-based cursor row
    pub col: usize, // 0-based cursor column
    /// Most recent user-facing message (e.g. a failed write).
    pub message: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    Mode(&'static str),
    FileName(&'a str),
    DirtyMarker,
    Position { row_1: usize, col_1: usize },
    Message(&'a str),
}

pub fn compose_status<'a>(ctx: &StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    let mut out = Vec::with_capacity(5);
    out.push(StatusSegment::Mode(ctx.mode.as_str()));
    out.push(StatusSegment::FileName(ctx.name));
    if ctx.dirty {
        out.push(StatusSegment::DirtyMarker);
    }
    out.push(StatusSegment::Position {
        row_1: ctx.row + 1,
        col_1: ctx.col + 1,
    });
    if let Some(msg) = ctx.message {
        out.push(StatusSegment::Message(msg));
    }
    out
}

pub fn format_status(segments: &[StatusSegment<'_>]) -> String {
    use std::fmt::Write as _;
    let mut s = String::with_capacity(48);
    for seg in segments {
        match seg {
            StatusSegment::Mode(m) => {
                s.push(' ');
                s.push_str(m);
            }
            StatusSegment::FileName(name) => {
                s.push_str(" | ");
                s.push_str(name);
            }
            StatusSegment::DirtyMarker => s.push_str(" [+]"),
            StatusSegment::Position { row_1, col_1 } => {
                let _ = write!(s, " | Row: {}, Col: {}", row_1, col_1);
            }
            StatusSegment::Message(msg) => {
                s.push_str(" | ");
                s.push_str(msg);
            }
        }
    }
    s
}

pub fn build_status(ctx: &StatusContext) -> String {
    format_status(&compose_status(ctx))
}

/// Status line for a bar `width` cells wide, padded to that width.
///
/// A message always stays visible: when the full line does not fit, the
/// position is dropped first, then the name and dirty marker. Whatever is
/// left is cut at `width`.
pub fn fit_status(ctx: &StatusContext, width: usize) -> String {
    let mut segments = compose_status(ctx);
    if ctx.message.is_some() {
        let droppable: [fn(&StatusSegment<'_>) -> bool; 2] = [
            |s| matches!(s, StatusSegment::Position { .. }),
            |s| matches!(s, StatusSegment::FileName(_) | StatusSegment::DirtyMarker),
        ];
        for drop_if in droppable {
            if format_status(&segments).chars().count() <= width {
                break;
            }
            segments.retain(|s| !drop_if(s));
        }
    }
    let line = format_status(&segments);
    format!("{:<width$}", line, width = width)
        .chars()
        .take(width)
        .collect()
}
