//! Terminal event polling and conversion to abstract input

use crossterm::event::{
    self, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;
use tabmenu_core::prelude::*;
use tabmenu_core::{InputKey, MouseAction, Point};

/// One input cycle's worth of work for the host loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Key(InputKey),
    Mouse(MouseAction, Point),
    /// Terminal size changed; redraw
    Resize,
    /// Poll timed out
    Tick,
}

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert crossterm MouseEvent to an action at a cell position
pub fn mouse_event_to_action(mouse: MouseEvent) -> Option<(MouseAction, Point)> {
    let action = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => MouseAction::LeftDown,
        MouseEventKind::Up(MouseButton::Left) => MouseAction::LeftUp,
        MouseEventKind::Drag(MouseButton::Left) => MouseAction::LeftDrag,
        MouseEventKind::Down(MouseButton::Right) => MouseAction::RightDown,
        MouseEventKind::Up(MouseButton::Right) => MouseAction::RightUp,
        MouseEventKind::Down(MouseButton::Middle) => MouseAction::MiddleDown,
        MouseEventKind::Up(MouseButton::Middle) => MouseAction::MiddleUp,
        MouseEventKind::Moved => MouseAction::Move,
        MouseEventKind::ScrollUp => MouseAction::ScrollUp,
        MouseEventKind::ScrollDown => MouseAction::ScrollDown,
        _ => return None,
    };
    Some((
        action,
        Point::new(i32::from(mouse.column), i32::from(mouse.row)),
    ))
}

/// Poll for terminal events with timeout
pub fn poll(timeout: Duration) -> Result<Option<UiEvent>> {
    if !event::poll(timeout)? {
        return Ok(Some(UiEvent::Tick));
    }

    let event = match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(UiEvent::Key)
        }
        Event::Mouse(mouse) => {
            mouse_event_to_action(mouse).map(|(action, pos)| UiEvent::Mouse(action, pos))
        }
        Event::Resize(_, _) => Some(UiEvent::Resize),
        _ => None,
    };
    Ok(event)
}
