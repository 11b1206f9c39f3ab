//! Test utilities for widget rendering and routing
//!
//! Widgets draw straight into a ratatui [`Buffer`], so most tests only need
//! [`row_text`]. [`TestTerminal`] wraps a `TestBackend` terminal for tests
//! that go through a full frame.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use tabmenu_core::{InputKey, MouseAction, Point, Rectangle};

use crate::canvas;
use crate::primitive::{MouseOutcome, Primitive};

pub const TEST_WIDTH: u16 = 40;
pub const TEST_HEIGHT: u16 = 12;

/// Thin wrapper around a `TestBackend` terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Draw `primitive` over the whole terminal in one frame.
    pub fn draw_primitive<P: Primitive + ?Sized>(&mut self, primitive: &mut P) {
        self.terminal
            .draw(|frame| {
                let area = frame.area();
                primitive.set_rect(canvas::from_rect(area));
                primitive.draw(frame.buffer_mut());
            })
            .expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        row_text(self.buffer(), line).contains(text)
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Symbols of one buffer row, concatenated.
pub fn row_text(buf: &Buffer, y: u16) -> String {
    let area = buf.area;
    let mut result = String::new();
    if y >= area.top() && y < area.bottom() {
        for x in area.left()..area.right() {
            result.push_str(buf[(x, y)].symbol());
        }
    }
    result
}

pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut result = String::new();
    for y in area.top()..area.bottom() {
        result.push_str(&row_text(buf, y));
        result.push('\n');
    }
    result
}

/// Everything that happened to a [`RecordingPane`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PaneLog {
    pub focus_calls: usize,
    pub blur_calls: usize,
    pub draws: usize,
    pub keys: Vec<InputKey>,
    pub mouse: Vec<(MouseAction, Point)>,
    pub rect: Rectangle,
    pub has_focus: bool,
}

/// A pane that fills its rect with its label and records every call.
///
/// The log is shared, so tests keep a handle after the pane is moved into
/// a container.
#[derive(Debug, Clone)]
pub struct RecordingPane {
    label: String,
    log: Rc<RefCell<PaneLog>>,
}

impl RecordingPane {
    pub fn new(label: &str) -> (Self, Rc<RefCell<PaneLog>>) {
        let log = Rc::new(RefCell::new(PaneLog::default()));
        let pane = Self {
            label: label.to_string(),
            log: Rc::clone(&log),
        };
        (pane, log)
    }
}

impl Primitive for RecordingPane {
    fn rect(&self) -> Rectangle {
        self.log.borrow().rect
    }

    fn set_rect(&mut self, rect: Rectangle) {
        self.log.borrow_mut().rect = rect;
    }

    fn draw(&mut self, buf: &mut Buffer) {
        let rect = {
            let mut log = self.log.borrow_mut();
            log.draws += 1;
            log.rect
        };
        canvas::print(
            buf,
            rect.x,
            rect.y,
            rect.width,
            &self.label,
            ratatui::style::Style::default(),
        );
    }

    fn focus(&mut self) {
        let mut log = self.log.borrow_mut();
        log.focus_calls += 1;
        log.has_focus = true;
    }

    fn blur(&mut self) {
        let mut log = self.log.borrow_mut();
        log.blur_calls += 1;
        log.has_focus = false;
    }

    fn has_focus(&self) -> bool {
        self.log.borrow().has_focus
    }

    fn handle_key(&mut self, key: &InputKey) {
        self.log.borrow_mut().keys.push(key.clone());
    }

    fn handle_mouse(&mut self, action: MouseAction, position: Point) -> MouseOutcome {
        self.log.borrow_mut().mouse.push((action, position));
        MouseOutcome::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    #[test]
    fn test_row_text_out_of_range_is_empty() {
        let buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        assert_eq!(row_text(&buf, 0), "   ");
        assert_eq!(row_text(&buf, 4), "");
    }

    #[test]
    fn test_recording_pane_draws_label() {
        let (mut pane, log) = RecordingPane::new("pane-a");
        let mut term = TestTerminal::with_size(10, 2);
        term.draw_primitive(&mut pane);
        assert!(term.line_contains(0, "pane-a"));
        assert_eq!(log.borrow().draws, 1);
        assert_eq!(log.borrow().rect, Rectangle::new(0, 0, 10, 2));
    }
}
