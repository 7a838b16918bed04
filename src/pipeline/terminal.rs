//! Terminal session - raw mode, alternate screen, mouse capture.
//!
//! One guard value owns the terminal for the life of the application.
//! Entering switches to the alternate screen (which is also what keeps
//! wheel input from scrolling the shell's scrollback), hides the
//! cursor, and enables mouse capture. Leaving restores everything
//! unconditionally; `Drop` repeats the restore best-effort so a panic
//! cannot strand the user in raw mode.

use std::io::{self, stdout};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

/// Fallback size when the terminal cannot report one.
const DEFAULT_SIZE: (u16, u16) = (80, 24);

// =============================================================================
// SESSION GUARD
// =============================================================================

/// RAII guard over the terminal's interactive state.
pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    /// Take over the terminal.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide, EnableMouseCapture)?;
        Ok(Self { active: true })
    }

    /// Restore the terminal. Idempotent.
    pub fn leave(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(stdout(), DisableMouseCapture, Show, LeaveAlternateScreen)?;
        disable_raw_mode()
    }

}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

/// Current terminal size in cells, with a conventional fallback.
pub fn terminal_size() -> (u16, u16) {
    crossterm::terminal::size().unwrap_or(DEFAULT_SIZE)
}

// =============================================================================
// TESTS
// =============================================================================
