//! Abstract input events, independent of terminal library.
//!
//! Keyboard and mouse events are converted from crossterm at the TUI
//! boundary so that widget logic can be driven (and tested) without a
//! terminal.

/// Abstract input key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

/// Discrete mouse action carried by a mouse event.
///
/// Menu routing only distinguishes [`MouseAction::LeftDown`] and
/// [`MouseAction::LeftUp`]; every other action is treated as hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    LeftDown,
    LeftUp,
    /// Pointer moved with the left button held
    LeftDrag,
    /// Pointer moved with no button held
    Move,
    RightDown,
    RightUp,
    MiddleDown,
    MiddleUp,
    ScrollUp,
    ScrollDown,
}

impl MouseAction {
    pub fn is_left_down(self) -> bool {
        self == MouseAction::LeftDown
    }

    pub fn is_left_up(self) -> bool {
        self == MouseAction::LeftUp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_mouse_action_predicates() {
        assert!(MouseAction::LeftDown.is_left_down());
        assert!(!MouseAction::LeftDown.is_left_up());
        assert!(MouseAction::LeftUp.is_left_up());
        assert!(!MouseAction::Move.is_left_down());
        assert!(!MouseAction::LeftDrag.is_left_up());
    }
}
