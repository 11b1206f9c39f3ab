//! Named content panes with a clickable tab strip
//!
//! The content area fills everything above a one-row strip of tab buttons.
//! Each strip row is the tab's label button followed by a one-cell close
//! button. At most one pane is shown at a time.

use std::fmt;

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::widgets::{Clear, Widget};
use tabmenu_core::prelude::*;
use tabmenu_core::{InputKey, MouseAction, Point, Rectangle};

use super::button::Button;
use crate::canvas;
use crate::primitive::{MouseOutcome, Primitive};
use crate::theme::styles;

const CLOSE_LABEL: &str = "X";

struct TabEntry {
    name: String,
    pane: Box<dyn Primitive>,
    button: Button,
    close: Button,
}

impl TabEntry {
    fn new(name: String, pane: Box<dyn Primitive>) -> Self {
        Self {
            button: Button::new(name.clone()),
            close: Button::new(CLOSE_LABEL).with_style(styles::tab_close_button()),
            name,
            pane,
        }
    }

    /// Label width plus the close button and one cell of spacing
    fn row_width(&self) -> u16 {
        u16::try_from(self.button.label_width() + 2).unwrap_or(u16::MAX)
    }
}

/// A set of named panes, one of which is shown.
#[derive(Default)]
pub struct Tabs {
    entries: Vec<TabEntry>,
    shown: Option<String>,
    rect: Rectangle,
    content_rect: Rectangle,
    strip_rect: Rectangle,
}

impl fmt::Debug for Tabs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tabs")
            .field("tabs", &self.tab_names())
            .field("shown", &self.shown)
            .field("rect", &self.rect)
            .finish()
    }
}

impl Tabs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `pane` under `name` and add its button row to the strip.
    ///
    /// Does not show the tab. Re-adding an existing name replaces its pane
    /// in place; if that tab was shown, the new pane is shown instead.
    pub fn add_tab(
        &mut self,
        name: impl Into<String>,
        pane: impl Primitive + 'static,
    ) -> &mut Self {
        let name = name.into();
        let entry = TabEntry::new(name.clone(), Box::new(pane));

        match self.position(&name) {
            Some(index) => {
                let mut old = std::mem::replace(&mut self.entries[index], entry);
                if self.is_shown(&name) {
                    old.pane.blur();
                    self.activate(index);
                }
                debug!("Replaced tab '{}'", name);
            }
            None => {
                debug!("Added tab '{}'", name);
                self.entries.push(entry);
            }
        }

        self.layout();
        self
    }

    /// Unregister `name` and hand its pane back.
    ///
    /// If it was shown, the first remaining tab in insertion order is shown
    /// instead, or nothing if it was the last one. Unknown names are a no-op.
    pub fn remove_tab(&mut self, name: &str) -> Option<Box<dyn Primitive>> {
        let index = self.position(name)?;

        if self.is_shown(name) {
            match self.entries.iter().position(|entry| entry.name != name) {
                Some(fallback) => self.show_index(fallback),
                None => {
                    self.entries[index].pane.blur();
                    self.shown = None;
                }
            }
        }

        let entry = self.entries.remove(index);
        debug!("Removed tab '{}'", name);
        self.layout();
        Some(entry.pane)
    }

    /// Blur the shown pane, then show and focus `name`.
    pub fn show_tab(&mut self, name: &str) -> Result<()> {
        let index = self
            .position(name)
            .ok_or_else(|| Error::unknown_tab(name))?;
        self.show_index(index);
        Ok(())
    }

    pub fn exists(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn find_tab(&self, name: &str) -> Option<&dyn Primitive> {
        self.position(name)
            .map(|index| self.entries[index].pane.as_ref())
    }

    pub fn find_tab_mut(&mut self, name: &str) -> Option<&mut dyn Primitive> {
        let index = self.position(name)?;
        Some(self.entries[index].pane.as_mut())
    }

    /// Name of the shown tab
    pub fn current_tab(&self) -> Option<&str> {
        self.shown.as_deref()
    }

    pub fn tab_names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Area the shown pane occupies
    pub fn content_rect(&self) -> Rectangle {
        self.content_rect
    }

    /// Rects of the label and close buttons of `name`
    pub fn button_rects(&self, name: &str) -> Option<(Rectangle, Rectangle)> {
        self.position(name).map(|index| {
            let entry = &self.entries[index];
            (entry.button.rect(), entry.close.rect())
        })
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    fn is_shown(&self, name: &str) -> bool {
        self.shown.as_deref() == Some(name)
    }

    fn shown_index(&self) -> Option<usize> {
        self.shown.as_deref().and_then(|name| self.position(name))
    }

    fn show_index(&mut self, index: usize) {
        if let Some(current) = self.shown_index() {
            self.entries[current].pane.blur();
        }
        self.activate(index);
    }

    fn activate(&mut self, index: usize) {
        let content = self.content_rect;
        let entry = &mut self.entries[index];
        entry.pane.set_rect(content);
        entry.pane.focus();
        debug!("Showing tab '{}'", entry.name);
        self.shown = Some(entry.name.clone());
    }

    /// Split into content area and strip, then lay out the button rows.
    fn layout(&mut self) {
        let area = canvas::to_rect(self.rect);
        let [content, strip] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
        self.content_rect = canvas::from_rect(content);
        self.strip_rect = canvas::from_rect(strip);

        if let Some(index) = self.shown_index() {
            self.entries[index].pane.set_rect(self.content_rect);
        }

        let rows = Layout::horizontal(
            self.entries
                .iter()
                .map(|entry| Constraint::Length(entry.row_width())),
        )
        .flex(Flex::Start)
        .split(strip);

        for (entry, row) in self.entries.iter_mut().zip(rows.iter()) {
            let label_width = u16::try_from(entry.button.label_width()).unwrap_or(u16::MAX);
            let [label, close] = Layout::horizontal([
                Constraint::Length(label_width),
                Constraint::Length(1),
            ])
            .flex(Flex::Start)
            .areas(*row);
            entry.button.set_rect(canvas::from_rect(label));
            entry.close.set_rect(canvas::from_rect(close));
        }
    }
}

impl Primitive for Tabs {
    fn rect(&self) -> Rectangle {
        self.rect
    }

    fn set_rect(&mut self, rect: Rectangle) {
        self.rect = rect;
        self.layout();
    }

    fn draw(&mut self, buf: &mut Buffer) {
        if self.rect.is_empty() {
            return;
        }
        self.layout();

        let content = canvas::visible_area(buf, self.content_rect);
        Clear.render(content, buf);
        if let Some(index) = self.shown_index() {
            self.entries[index].pane.draw(buf);
        }

        let shown = self.shown.clone();
        for entry in &mut self.entries {
            let active = shown.as_deref() == Some(entry.name.as_str());
            entry.button.set_style(styles::tab_button(active));
            entry.button.draw(buf);
            entry.close.draw(buf);
        }
    }

    fn focus(&mut self) {
        if let Some(index) = self.shown_index() {
            self.entries[index].pane.focus();
        }
    }

    fn blur(&mut self) {
        if let Some(index) = self.shown_index() {
            self.entries[index].pane.blur();
        }
    }

    fn has_focus(&self) -> bool {
        self.shown_index()
            .is_some_and(|index| self.entries[index].pane.has_focus())
    }

    fn handle_key(&mut self, key: &InputKey) {
        if let Some(index) = self.shown_index() {
            self.entries[index].pane.handle_key(key);
        }
    }

    fn handle_mouse(&mut self, action: MouseAction, position: Point) -> MouseOutcome {
        if self.rect.is_empty() || !self.rect.contains(position) {
            return MouseOutcome::Ignored;
        }

        if self.strip_rect.contains(position) {
            for index in 0..self.entries.len() {
                let entry = &mut self.entries[index];
                if entry.close.clicked(action, position) {
                    let name = entry.name.clone();
                    self.remove_tab(&name);
                    return MouseOutcome::Captured;
                }
                if entry.button.clicked(action, position) {
                    self.show_index(index);
                    return MouseOutcome::Captured;
                }

                let outcome = match entry.button.handle_mouse(action, position) {
                    MouseOutcome::Ignored => entry.close.handle_mouse(action, position),
                    outcome => outcome,
                };
                if outcome.is_consumed() {
                    return outcome;
                }
            }
            return MouseOutcome::Ignored;
        }

        match self.shown_index() {
            Some(index) => self.entries[index].pane.handle_mouse(action, position),
            None => MouseOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{row_text, PaneLog, RecordingPane};
    use crate::theme::palette;
    use ratatui::layout::Rect;
    use ratatui::style::Modifier;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<PaneLog>>;

    fn tabs(names: &[&str]) -> (Tabs, Vec<Log>) {
        let mut tabs = Tabs::new();
        tabs.set_rect(Rectangle::new(0, 0, 30, 5));
        let logs = names
            .iter()
            .map(|name| {
                let (pane, log) = RecordingPane::new(&format!("pane-{}", name));
                tabs.add_tab(*name, pane);
                log
            })
            .collect();
        (tabs, logs)
    }

    fn draw(tabs: &mut Tabs) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 5));
        tabs.draw(&mut buf);
        buf
    }

    #[test]
    fn test_add_does_not_show() {
        let (tabs, logs) = tabs(&["a"]);
        assert!(tabs.exists("a"));
        assert_eq!(tabs.current_tab(), None);
        assert_eq!(logs[0].borrow().focus_calls, 0);
    }

    #[test]
    fn test_show_tab_displays_pane() {
        let (mut tabs, logs) = tabs(&["a", "b"]);

        tabs.show_tab("a").unwrap();

        assert_eq!(tabs.current_tab(), Some("a"));
        let found = tabs.find_tab("a").unwrap();
        assert_eq!(found.rect(), Rectangle::new(0, 0, 30, 4));
        assert!(found.has_focus());
        assert!(!tabs.find_tab("b").unwrap().has_focus());

        let buf = draw(&mut tabs);
        assert!(row_text(&buf, 0).starts_with("pane-a"));
        assert_eq!(logs[1].borrow().draws, 0);
    }

    #[test]
    fn test_show_tab_blurs_previous() {
        let (mut tabs, logs) = tabs(&["a", "b"]);
        tabs.show_tab("a").unwrap();

        tabs.show_tab("b").unwrap();

        assert_eq!(logs[0].borrow().blur_calls, 1);
        assert!(!logs[0].borrow().has_focus);
        assert!(logs[1].borrow().has_focus);
        assert_eq!(tabs.current_tab(), Some("b"));
    }

    #[test]
    fn test_show_unknown_tab_is_an_error() {
        let (mut tabs, logs) = tabs(&["a"]);
        tabs.show_tab("a").unwrap();

        let err = tabs.show_tab("nope").unwrap_err();

        assert!(matches!(err, Error::UnknownTab { ref name } if name == "nope"));
        assert_eq!(tabs.current_tab(), Some("a"));
        assert_eq!(logs[0].borrow().blur_calls, 0);
    }

    #[test]
    fn test_remove_shown_tab_falls_back_to_first_remaining() {
        let (mut tabs, logs) = tabs(&["a", "b", "c"]);
        tabs.show_tab("b").unwrap();

        let removed = tabs.remove_tab("b");

        assert!(removed.is_some());
        assert!(!tabs.exists("b"));
        assert_eq!(tabs.current_tab(), Some("a"));
        assert!(logs[0].borrow().has_focus);
        assert!(tabs.find_tab(tabs.current_tab().unwrap()).is_some());
        assert_eq!(tabs.tab_names(), vec!["a", "c"]);
    }

    #[test]
    fn test_remove_first_shown_tab_falls_back_to_next() {
        let (mut tabs, _) = tabs(&["a", "b", "c"]);
        tabs.show_tab("a").unwrap();

        tabs.remove_tab("a");

        assert_eq!(tabs.current_tab(), Some("b"));
    }

    #[test]
    fn test_remove_hidden_tab_keeps_current() {
        let (mut tabs, logs) = tabs(&["a", "b"]);
        tabs.show_tab("a").unwrap();

        tabs.remove_tab("b");

        assert_eq!(tabs.current_tab(), Some("a"));
        assert_eq!(logs[0].borrow().blur_calls, 0);
    }

    #[test]
    fn test_remove_last_tab_empties_content() {
        let (mut tabs, logs) = tabs(&["a"]);
        tabs.show_tab("a").unwrap();

        tabs.remove_tab("a");

        assert!(!tabs.exists("a"));
        assert!(tabs.is_empty());
        assert_eq!(tabs.current_tab(), None);
        assert!(!logs[0].borrow().has_focus);

        let buf = draw(&mut tabs);
        assert_eq!(row_text(&buf, 0), " ".repeat(30));
    }

    #[test]
    fn test_remove_unknown_tab_is_noop() {
        let (mut tabs, _) = tabs(&["a"]);
        assert!(tabs.remove_tab("nope").is_none());
        assert_eq!(tabs.len(), 1);
    }

    #[test]
    fn test_re_adding_replaces_in_place() {
        let (mut tabs, logs) = tabs(&["a", "b"]);
        tabs.show_tab("a").unwrap();
        let (replacement, new_log) = RecordingPane::new("fresh");

        tabs.add_tab("a", replacement);

        assert_eq!(tabs.tab_names(), vec!["a", "b"]);
        assert_eq!(tabs.current_tab(), Some("a"));
        assert_eq!(logs[0].borrow().blur_calls, 1);
        assert!(new_log.borrow().has_focus);
        assert_eq!(new_log.borrow().rect, Rectangle::new(0, 0, 30, 4));
    }

    #[test]
    fn test_strip_layout() {
        let (tabs, _) = tabs(&["a", "log"]);

        // "a" row is 3 cells, "log" row is 5
        assert_eq!(
            tabs.button_rects("a"),
            Some((Rectangle::new(0, 4, 1, 1), Rectangle::new(1, 4, 1, 1)))
        );
        assert_eq!(
            tabs.button_rects("log"),
            Some((Rectangle::new(3, 4, 3, 1), Rectangle::new(6, 4, 1, 1)))
        );
    }

    #[test]
    fn test_draw_strip() {
        let (mut tabs, _) = tabs(&["a", "log"]);
        tabs.show_tab("log").unwrap();

        let buf = draw(&mut tabs);

        assert_eq!(row_text(&buf, 4), format!("aX logX{}", " ".repeat(23)));
        assert_eq!(buf[(1, 4)].fg, palette::TAB_CLOSE);
        assert_eq!(buf[(3, 4)].fg, palette::TAB_ACTIVE);
        assert!(buf[(3, 4)].modifier.contains(Modifier::BOLD));
        assert_eq!(buf[(0, 4)].fg, palette::TEXT_MUTED);
    }

    #[test]
    fn test_click_label_shows_tab() {
        let (mut tabs, _) = tabs(&["a", "log"]);

        let press = tabs.handle_mouse(MouseAction::LeftDown, Point::new(4, 4));
        assert_eq!(press, MouseOutcome::Captured);
        assert_eq!(tabs.current_tab(), None);

        let release = tabs.handle_mouse(MouseAction::LeftUp, Point::new(4, 4));
        assert_eq!(release, MouseOutcome::Captured);
        assert_eq!(tabs.current_tab(), Some("log"));
    }

    #[test]
    fn test_click_close_removes_tab() {
        let (mut tabs, _) = tabs(&["a", "log"]);
        tabs.show_tab("log").unwrap();

        tabs.handle_mouse(MouseAction::LeftUp, Point::new(6, 4));

        assert!(!tabs.exists("log"));
        assert_eq!(tabs.current_tab(), Some("a"));
        assert_eq!(
            tabs.button_rects("a"),
            Some((Rectangle::new(0, 4, 1, 1), Rectangle::new(1, 4, 1, 1)))
        );
    }

    #[test]
    fn test_strip_gap_is_ignored() {
        let (mut tabs, _) = tabs(&["a"]);
        assert_eq!(
            tabs.handle_mouse(MouseAction::LeftUp, Point::new(2, 4)),
            MouseOutcome::Ignored
        );
        assert_eq!(
            tabs.handle_mouse(MouseAction::LeftUp, Point::new(40, 4)),
            MouseOutcome::Ignored
        );
    }

    #[test]
    fn test_content_events_go_to_shown_pane() {
        let (mut tabs, logs) = tabs(&["a", "b"]);
        tabs.show_tab("b").unwrap();

        let outcome = tabs.handle_mouse(MouseAction::Move, Point::new(2, 2));
        tabs.handle_key(&InputKey::Char('x'));

        assert_eq!(outcome, MouseOutcome::Consumed);
        assert_eq!(logs[1].borrow().mouse, vec![(MouseAction::Move, Point::new(2, 2))]);
        assert_eq!(logs[1].borrow().keys, vec![InputKey::Char('x')]);
        assert!(logs[0].borrow().mouse.is_empty());
    }

    #[test]
    fn test_focus_delegates_to_shown_pane() {
        let (mut tabs, logs) = tabs(&["a"]);
        assert!(!tabs.has_focus());
        tabs.show_tab("a").unwrap();
        assert!(tabs.has_focus());

        tabs.blur();
        assert!(!tabs.has_focus());
        tabs.focus();
        assert!(logs[0].borrow().has_focus);
    }

    #[test]
    fn test_resize_moves_shown_pane() {
        let (mut tabs, logs) = tabs(&["a"]);
        tabs.show_tab("a").unwrap();

        tabs.set_rect(Rectangle::new(2, 1, 10, 6));

        assert_eq!(logs[0].borrow().rect, Rectangle::new(2, 1, 10, 5));
        assert_eq!(
            tabs.button_rects("a"),
            Some((Rectangle::new(2, 6, 1, 1), Rectangle::new(3, 6, 1, 1)))
        );
    }
}
