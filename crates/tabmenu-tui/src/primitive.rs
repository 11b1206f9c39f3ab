//! The retained drawable contract shared by every widget in this crate.
//!
//! A [`Primitive`] owns its placement, draws itself into a ratatui buffer and
//! reacts to abstract input. Containers (the menu bar, the tab container)
//! forward calls to the primitives they own.

use ratatui::buffer::Buffer;
use tabmenu_core::{InputKey, MouseAction, Point, Rectangle};

/// Result of offering a mouse event to a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseOutcome {
    /// Not handled; the caller may offer it elsewhere
    Ignored,
    /// Handled
    Consumed,
    /// Handled, and the primitive wants the follow-up events of this gesture
    Captured,
}

impl MouseOutcome {
    pub fn is_consumed(self) -> bool {
        !matches!(self, MouseOutcome::Ignored)
    }
}

/// A drawable, focusable, input-handling widget.
pub trait Primitive {
    fn rect(&self) -> Rectangle;

    fn set_rect(&mut self, rect: Rectangle);

    /// Draw into `buf`. Takes `&mut self` because containers lay out their
    /// children as part of drawing.
    fn draw(&mut self, buf: &mut Buffer);

    fn focus(&mut self) {}

    fn blur(&mut self) {}

    fn has_focus(&self) -> bool {
        false
    }

    fn handle_key(&mut self, _key: &InputKey) {}

    fn handle_mouse(&mut self, _action: MouseAction, _position: Point) -> MouseOutcome {
        MouseOutcome::Ignored
    }
}

impl<P: Primitive + ?Sized> Primitive for Box<P> {
    fn rect(&self) -> Rectangle {
        (**self).rect()
    }

    fn set_rect(&mut self, rect: Rectangle) {
        (**self).set_rect(rect)
    }

    fn draw(&mut self, buf: &mut Buffer) {
        (**self).draw(buf)
    }

    fn focus(&mut self) {
        (**self).focus()
    }

    fn blur(&mut self) {
        (**self).blur()
    }

    fn has_focus(&self) -> bool {
        (**self).has_focus()
    }

    fn handle_key(&mut self, key: &InputKey) {
        (**self).handle_key(key)
    }

    fn handle_mouse(&mut self, action: MouseAction, position: Point) -> MouseOutcome {
        (**self).handle_mouse(action, position)
    }
}
