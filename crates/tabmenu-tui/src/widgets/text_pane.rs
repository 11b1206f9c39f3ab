//! Bordered, scrollable text content for tabs

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::buffer::Buffer;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph, Widget};
use tabmenu_core::{InputKey, MouseAction, Point, Rectangle};

use crate::canvas;
use crate::markup;
use crate::primitive::{MouseOutcome, Primitive};
use crate::theme::styles;

/// Shared line storage. The host keeps a handle to append while the pane
/// sits inside a container.
pub type SharedLines = Rc<RefCell<Vec<String>>>;

/// A titled block of text lines.
#[derive(Debug, Clone)]
pub struct TextPane {
    title: String,
    lines: SharedLines,
    scroll: usize,
    rect: Rectangle,
    has_focus: bool,
}

impl TextPane {
    pub fn new(title: impl Into<String>, body: &str) -> Self {
        let lines = body.lines().map(str::to_string).collect();
        Self::shared(title, Rc::new(RefCell::new(lines)))
    }

    pub fn shared(title: impl Into<String>, lines: SharedLines) -> Self {
        Self {
            title: title.into(),
            lines,
            scroll: 0,
            rect: Rectangle::default(),
            has_focus: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> SharedLines {
        Rc::clone(&self.lines)
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    fn max_scroll(&self) -> usize {
        self.lines.borrow().len().saturating_sub(1)
    }

    fn page(&self) -> usize {
        // Border rows don't count
        (self.rect.height - 2).max(1) as usize
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let target = self.scroll.saturating_add_signed(delta);
        self.scroll = target.min(self.max_scroll());
    }
}

impl Primitive for TextPane {
    fn rect(&self) -> Rectangle {
        self.rect
    }

    fn set_rect(&mut self, rect: Rectangle) {
        self.rect = rect;
    }

    fn draw(&mut self, buf: &mut Buffer) {
        let area = canvas::visible_area(buf, self.rect);
        if area.is_empty() {
            return;
        }
        self.scroll = self.scroll.min(self.max_scroll());

        Clear.render(area, buf);
        buf.set_style(area, styles::pane_background());

        let block = styles::glass_block(self.has_focus).title(format!(" {} ", self.title));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .lines
            .borrow()
            .iter()
            .skip(self.scroll)
            .take(inner.height as usize)
            .map(|line| Line::from(markup::spans(line, Style::default())))
            .collect();
        Paragraph::new(lines).render(inner, buf);
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

    fn handle_key(&mut self, key: &InputKey) {
        match key {
            InputKey::Up | InputKey::Char('k') => self.scroll_by(-1),
            InputKey::Down | InputKey::Char('j') => self.scroll_by(1),
            InputKey::PageUp => self.scroll_by(-(self.page() as isize)),
            InputKey::PageDown => self.scroll_by(self.page() as isize),
            InputKey::Home => self.scroll = 0,
            InputKey::End => self.scroll = self.max_scroll(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, action: MouseAction, position: Point) -> MouseOutcome {
        if !self.rect.contains(position) {
            return MouseOutcome::Ignored;
        }
        match action {
            MouseAction::ScrollUp => self.scroll_by(-1),
            MouseAction::ScrollDown => self.scroll_by(1),
            _ => {}
        }
        MouseOutcome::Consumed
    }
}
