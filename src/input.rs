//! Input Module - event conversion and polling.
//!
//! Bridges crossterm's event stream to the small event vocabulary the
//! screens consume. Polling doubles as the frame pacer: the event loop
//! polls with a frame-length timeout, so a quiet terminal still
//! produces one tick per frame interval.

use std::time::Duration;

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent as CrosstermMouseEvent, MouseEventKind, poll, read,
};

// =============================================================================
// EVENT TYPES
// =============================================================================

/// Unified event type for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyInput),
    Mouse(MouseInput),
    /// Terminal resize (new width, height).
    Resize(u16, u16),
    /// Unhandled event type.
    None,
}

/// Keys the screens react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    /// Ctrl+C, always a quit request.
    Interrupt,
    Other,
}

/// Mouse event with terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseInput {
    pub action: MouseAction,
    pub x: u16,
    pub y: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    /// Left button pressed.
    Down,
    /// Left button released.
    Up,
    /// Motion with the left button held.
    Drag,
    ScrollUp,
    ScrollDown,
    /// Motion, other buttons, horizontal scroll.
    Other,
}

// =============================================================================
// CONVERSION
// =============================================================================

/// Convert a crossterm key event. Only key presses and repeats count;
/// releases are ignored.
pub fn convert_key_event(event: CrosstermKeyEvent) -> Option<KeyInput> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Some(KeyInput::Interrupt);
    }

    let key = match event.code {
        KeyCode::Char(c) => KeyInput::Char(c),
        KeyCode::Enter => KeyInput::Enter,
        KeyCode::Esc => KeyInput::Escape,
        KeyCode::Backspace => KeyInput::Backspace,
        KeyCode::Up => KeyInput::Up,
        KeyCode::Down => KeyInput::Down,
        KeyCode::Left => KeyInput::Left,
        KeyCode::Right => KeyInput::Right,
        _ => KeyInput::Other,
    };
    Some(key)
}

/// Convert a crossterm mouse event.
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> MouseInput {
    let action = match event.kind {
        MouseEventKind::Down(MouseButton::Left) => MouseAction::Down,
        MouseEventKind::Up(MouseButton::Left) => MouseAction::Up,
        MouseEventKind::Drag(MouseButton::Left) => MouseAction::Drag,
        MouseEventKind::ScrollUp => MouseAction::ScrollUp,
        MouseEventKind::ScrollDown => MouseAction::ScrollDown,
        _ => MouseAction::Other,
    };

    MouseInput {
        action,
        x: event.column,
        y: event.row,
    }
}

// =============================================================================
// POLLING
// =============================================================================

/// Poll for an event with a timeout. `Ok(None)` means the timeout
/// elapsed quietly, which is the frame-pacing case.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    match read()? {
        CrosstermEvent::Key(key) => Ok(convert_key_event(key)
            .map(InputEvent::Key)
            .unwrap_or(InputEvent::None)),
        CrosstermEvent::Mouse(mouse) => Ok(InputEvent::Mouse(convert_mouse_event(mouse))),
        CrosstermEvent::Resize(w, h) => Ok(InputEvent::Resize(w, h)),
        _ => Ok(InputEvent::None),
    }
}

// =============================================================================
// TESTS
// =============================================================================
