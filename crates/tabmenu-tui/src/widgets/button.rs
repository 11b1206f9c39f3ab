//! Single-row clickable label

use ratatui::buffer::Buffer;
use ratatui::style::Style;
use tabmenu_core::{tagged_width_i32, MouseAction, Point, Rectangle};

use crate::canvas;
use crate::markup;
use crate::primitive::{MouseOutcome, Primitive};

/// A label that reports clicks inside its rect.
///
/// The button has no callback of its own; the container that owns it asks
/// [`Button::clicked`] and acts on the answer.
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    rect: Rectangle,
    style: Style,
    has_focus: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            rect: Rectangle::default(),
            style: Style::default(),
            has_focus: false,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Cells needed to show the whole label
    pub fn label_width(&self) -> i32 {
        tagged_width_i32(&self.label)
    }

    /// A click is a left-button release inside the rect.
    pub fn clicked(&self, action: MouseAction, position: Point) -> bool {
        action.is_left_up() && self.rect.contains(position)
    }
}

impl Primitive for Button {
    fn rect(&self) -> Rectangle {
        self.rect
    }

    fn set_rect(&mut self, rect: Rectangle) {
        self.rect = rect;
    }

    fn draw(&mut self, buf: &mut Buffer) {
        if self.rect.is_empty() {
            return;
        }
        let spans = markup::spans(&self.label, self.style);
        canvas::print_spans(buf, self.rect.x, self.rect.y, self.rect.width, &spans);
    }

    fn focus(&mut self) {
        self.has_focus = true;
    }

    fn blur(&mut self) {
        self.has_focus = false;
    }

    fn has_focus(&self) -> bool {
        self.has_focus
    }

    fn handle_mouse(&mut self, action: MouseAction, position: Point) -> MouseOutcome {
        if !self.rect.contains(position) {
            return MouseOutcome::Ignored;
        }
        match action {
            MouseAction::LeftDown | MouseAction::LeftUp => MouseOutcome::Captured,
            _ => MouseOutcome::Consumed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::row_text;
    use ratatui::layout::Rect;
    use ratatui::style::Color;

    fn button() -> Button {
        let mut button = Button::new("[yellow]log[-]");
        button.set_rect(Rectangle::new(1, 0, 3, 1));
        button
    }

    #[test]
    fn test_label_width_ignores_tags() {
        assert_eq!(button().label_width(), 3);
    }

    #[test]
    fn test_clicked_only_on_release_inside() {
        let button = button();
        assert!(button.clicked(MouseAction::LeftUp, Point::new(1, 0)));
        assert!(button.clicked(MouseAction::LeftUp, Point::new(3, 0)));
        assert!(!button.clicked(MouseAction::LeftUp, Point::new(4, 0)));
        assert!(!button.clicked(MouseAction::LeftDown, Point::new(1, 0)));
        assert!(!button.clicked(MouseAction::Move, Point::new(1, 0)));
    }

    #[test]
    fn test_handle_mouse_captures_presses() {
        let mut button = button();
        assert_eq!(
            button.handle_mouse(MouseAction::LeftDown, Point::new(2, 0)),
            MouseOutcome::Captured
        );
        assert_eq!(
            button.handle_mouse(MouseAction::Move, Point::new(2, 0)),
            MouseOutcome::Consumed
        );
        assert_eq!(
            button.handle_mouse(MouseAction::LeftUp, Point::new(9, 0)),
            MouseOutcome::Ignored
        );
    }

    #[test]
    fn test_draw_clips_to_rect() {
        let mut button = Button::new("close").with_style(Style::default().fg(Color::Red));
        button.set_rect(Rectangle::new(1, 0, 1, 1));
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));

        button.draw(&mut buf);

        assert_eq!(row_text(&buf, 0), " c  ");
        assert_eq!(buf[(1, 0)].fg, Color::Red);
    }

    #[test]
    fn test_draw_applies_label_tags() {
        let mut button = Button::new("a[yellow]b").with_style(Style::default().fg(Color::Red));
        button.set_rect(Rectangle::new(0, 0, 2, 1));
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));

        button.draw(&mut buf);

        assert_eq!(row_text(&buf, 0), "ab ");
        assert_eq!(buf[(0, 0)].fg, Color::Red);
        assert_eq!(buf[(1, 0)].fg, Color::Yellow);
    }

    #[test]
    fn test_draw_unplaced_button_is_noop() {
        let mut button = Button::new("X");
        let mut buf = Buffer::empty(Rect::new(0, 0, 2, 1));
        button.draw(&mut buf);
        assert_eq!(row_text(&buf, 0), "  ");
    }
}
