//! Terminal backend abstraction and crossterm implementation.
//!
//! Raw mode is a scoped resource: [`enter_guard`] switches the terminal into
//! raw mode (alternate screen, hidden cursor) and returns a [`TerminalGuard`]
//! that restores it when dropped, including during a panic unwind or an
//! early `?` return.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use std::io::stdout;

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
    fn set_title(&mut self, title: &str) -> Result<()>;
    /// Terminal size as (columns, rows).
    fn size(&self) -> Result<(u16, u16)>;
}

pub struct CrosstermBackend {
    entered: bool,
}

/// Guard returned by [`enter_guard`]; leaves raw mode on drop.
pub struct TerminalGuard<'a, B: TerminalBackend> {
    backend: &'a mut B,
}

impl<B: TerminalBackend> TerminalGuard<'_, B> {
    pub fn backend(&self) -> &B {
        &*self.backend
    }
}

/// Enter raw mode and return a guard that will leave on drop.
pub fn enter_guard<B: TerminalBackend>(backend: &mut B) -> Result<TerminalGuard<'_, B>> {
    backend.enter()?;
    Ok(TerminalGuard { backend })
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode()?;
            execute!(stdout(), EnterAlternateScreen, Hide)?;
            self.entered = true;
            tracing::debug!(target: "terminal", "raw_mode_entered");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            execute!(stdout(), LeaveAlternateScreen, Show)?;
            disable_raw_mode()?;
            self.entered = false;
            tracing::debug!(target: "terminal", "raw_mode_left");
        }
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        execute!(stdout(), SetTitle(title))?;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok(crossterm::terminal::size()?)
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

impl<B: TerminalBackend> Drop for TerminalGuard<'_, B> {
    fn drop(&mut self) {
        if let Err(e) = self.backend.leave() {
            tracing::error!(target: "terminal", error = %e, "raw_mode_restore_failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[derive(Default)]
    struct Recording {
        entered: bool,
        enters: usize,
        leaves: usize,
    }

    impl TerminalBackend for Recording {
        fn enter(&mut self) -> Result<()> {
            self.entered = true;
            self.enters += 1;
            Ok(())
        }
        fn leave(&mut self) -> Result<()> {
            self.entered = false;
            self.leaves += 1;
            Ok(())
        }
        fn set_title(&mut self, _title: &str) -> Result<()> {
            Ok(())
        }
        fn size(&self) -> Result<(u16, u16)> {
            Ok((80, 24))
        }
    }

    #[test]
    fn guard_leaves_on_drop() {
        let mut backend = Recording::default();
        {
            let guard = enter_guard(&mut backend).unwrap();
            assert!(guard.backend().entered);
            assert_eq!(guard.backend().size().unwrap(), (80, 24));
        }
        assert!(!backend.entered);
        assert_eq!((backend.enters, backend.leaves), (1, 1));
    }

    #[test]
    fn guard_leaves_on_early_error_return() {
        fn session(backend: &mut Recording) -> Result<()> {
            let _guard = enter_guard(backend)?;
            anyhow::bail!("load failed");
        }
        let mut backend = Recording::default();
        assert!(session(&mut backend).is_err());
        assert!(!backend.entered);
    }

    #[test]
    fn guard_leaves_on_panic() {
        let mut backend = Recording::default();
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = enter_guard(&mut backend).unwrap();
            panic!("boom");
        }));
        assert!(result.is_err());
        assert!(!backend.entered);
        assert_eq!(backend.leaves, 1);
    }
}
