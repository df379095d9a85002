//! Terminal writer.
//!
//! Collects primitive terminal operations for one frame and emits them in a
//! single flush. Commands preserve ordering and positions are absolute with
//! a (0,0) origin; the caller keeps them in bounds.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    HideCursor,
    ShowCursor,
    MoveTo(u16, u16),
    ClearAll,
    Print(String),
    /// Print with reverse video, resetting attributes afterwards.
    PrintReverse(String),
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }
    pub fn hide_cursor(&mut self) {
        self.cmds.push(Command::HideCursor);
    }
    pub fn show_cursor(&mut self) {
        self.cmds.push(Command::ShowCursor);
    }
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }
    pub fn clear_all(&mut self) {
        self.cmds.push(Command::ClearAll);
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }
    pub fn print_reverse<S: Into<String>>(&mut self, s: S) {
        self.cmds.push(Command::PrintReverse(s.into()));
    }
    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::HideCursor => queue!(out, Hide)?,
                Command::ShowCursor => queue!(out, Show)?,
                Command::MoveTo(x, y) => queue!(out, MoveTo(x, y))?,
                Command::ClearAll => queue!(out, Clear(ClearType::All))?,
                Command::Print(s) => queue!(out, Print(s))?,
                Command::PrintReverse(s) => queue!(
                    out,
                    SetAttribute(Attribute::Reverse),
                    Print(s),
                    SetAttribute(Attribute::Reset)
                )?,
            }
        }
        out.flush()?;
        Ok(())
    }
}
