//! Application - screen routing and the event loop.
//!
//! Two screens, one explicit transition each way:
//!
//! - **Entry -> Results**: the selection becomes an immutable
//!   [`BirthInstant`] handed directly into the results screen. There
//!   is no ambient shared birth date; the context object is the only
//!   channel.
//! - **Results -> Entry**: the results screen is torn down (frame loop
//!   cancelled, render effect stopped) before it is replaced.
//!
//! The loop polls input with a frame-length timeout and ticks the
//! results screen once per iteration, so the frame cadence follows the
//! poll cadence and stops with the loop itself. Everything runs on
//! this one thread.

use std::io::{self, stdout};
use std::time::Duration;

use crate::age::{BirthInstant, current_instant};
use crate::input::{InputEvent, KeyInput, poll_event};
use crate::pipeline::{TerminalSession, terminal_size};
use crate::render::{EntryScreen, ResultsScreen};

/// Poll timeout per loop iteration, ~60 frames per second.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

// =============================================================================
// SCREENS
// =============================================================================

enum Screen {
    Entry(EntryScreen),
    Results(ResultsScreen),
}

// =============================================================================
// APP
// =============================================================================

/// The application: owns the active screen and the terminal session.
pub struct App {
    screen: Screen,
    size: (u16, u16),
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::Entry(EntryScreen::new()),
            size: terminal_size(),
        }
    }

    /// Take over the terminal and run until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        let mut session = TerminalSession::enter()?;
        self.size = terminal_size();

        if let Screen::Entry(entry) = &mut self.screen {
            entry.draw(&mut stdout(), self.size)?;
        }

        loop {
            match poll_event(FRAME_INTERVAL)? {
                Some(InputEvent::Key(key)) => {
                    if !self.handle_key(key)? {
                        break;
                    }
                }
                Some(InputEvent::Mouse(mouse)) => {
                    if let Screen::Entry(entry) = &mut self.screen {
                        if entry.handle_mouse(&mouse) {
                            entry.draw(&mut stdout(), self.size)?;
                        }
                    }
                }
                Some(InputEvent::Resize(w, h)) => {
                    self.size = (w, h);
                    match &mut self.screen {
                        Screen::Entry(entry) => entry.draw(&mut stdout(), self.size)?,
                        Screen::Results(results) => results.resize(self.size)?,
                    }
                }
                _ => {}
            }

            // One display frame per loop iteration while results are up.
            if let Screen::Results(results) = &mut self.screen {
                results.tick();
            }
        }

        session.leave()
    }

    /// Handle a key. Returns false when the application should exit.
    fn handle_key(&mut self, key: KeyInput) -> io::Result<bool> {
        if matches!(key, KeyInput::Char('q') | KeyInput::Interrupt) {
            return Ok(false);
        }

        match &mut self.screen {
            Screen::Entry(entry) => {
                if key == KeyInput::Enter {
                    let selection = entry.selection;
                    let birth =
                        BirthInstant::from_ymd(selection.year, selection.month, selection.day);

                    // Future birth dates are rejected here, at the
                    // input boundary; the calculator itself does not
                    // guard against them.
                    if birth.datetime() > current_instant() {
                        return Ok(true);
                    }

                    self.screen = Screen::Results(ResultsScreen::new(birth, self.size)?);
                }
            }
            Screen::Results(results) => match key {
                KeyInput::Char('c') => {
                    results.copy_precise_age();
                }
                KeyInput::Escape | KeyInput::Backspace => {
                    // Teardown before replacement: no frame may fire
                    // once the transition has started.
                    results.teardown();
                    let mut entry = EntryScreen::new();
                    entry.draw(&mut stdout(), self.size)?;
                    self.screen = Screen::Entry(entry);
                }
                _ => {}
            },
        }

        Ok(true)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
