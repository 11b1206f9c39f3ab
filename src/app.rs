//! Demo state: a menu bar over a tab container
//!
//! Menu selections are queued by the bar's callback and applied once the
//! event that caused them has been fully routed.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::buffer::Buffer;
use tabmenu_core::config::Settings;
use tabmenu_core::prelude::*;
use tabmenu_core::{InputKey, MouseAction, Point, Rectangle};
use tabmenu_tui::event::UiEvent;
use tabmenu_tui::{MenuBar, MenuGlyphs, Primitive, SharedLines, Tabs, TextPane};

/// Tab that lists menu selections
pub const LOG_TAB: &str = "log";

const ABOUT_TAB: &str = "about";
const ABOUT_TEXT: &str = "tabmenu\n\nA drop-down menu bar and a tab container for the terminal.\nPress q to quit.";

pub struct App {
    menu: MenuBar,
    tabs: Tabs,
    log: SharedLines,
    selections: Rc<RefCell<Vec<String>>>,
    untitled: usize,
    should_quit: bool,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        let glyphs = MenuGlyphs::new(
            settings.ui.expand_indicator.clone(),
            settings.ui.shadow_glyph.clone(),
        );
        let mut menu = MenuBar::new(&settings.menu.options).with_glyphs(glyphs);

        let selections = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&selections);
        menu.set_selected_func(move |id| sink.borrow_mut().push(id.to_string()));

        let log: SharedLines = Rc::new(RefCell::new(Vec::new()));
        let mut tabs = Tabs::new();
        for tab in &settings.tabs.initial {
            if tab.name == LOG_TAB {
                log.borrow_mut()
                    .extend(tab.body.lines().map(str::to_string));
                tabs.add_tab(LOG_TAB, TextPane::shared(LOG_TAB, Rc::clone(&log)));
            } else {
                tabs.add_tab(tab.name.clone(), TextPane::new(tab.name.clone(), &tab.body));
            }
        }

        let mut app = Self {
            menu,
            tabs,
            log,
            selections,
            untitled: 0,
            should_quit: false,
        };
        if let Some(first) = settings.tabs.initial.first() {
            app.show(&first.name);
        }
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn menu(&self) -> &MenuBar {
        &self.menu
    }

    pub fn tabs(&self) -> &Tabs {
        &self.tabs
    }

    pub fn log_lines(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    /// Menu bar on the first row, tabs below.
    pub fn set_area(&mut self, area: Rectangle) {
        self.menu
            .set_rect(Rectangle::new(area.x, area.y, area.width, 1));
        self.tabs.set_rect(Rectangle::new(
            area.x,
            area.y + 1,
            area.width,
            (area.height - 1).max(0),
        ));
    }

    pub fn draw(&mut self, buf: &mut Buffer) {
        self.tabs.draw(buf);
        // Open submenus overlay the tab content
        self.menu.draw(buf);
    }

    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Key(key) => self.handle_key(key),
            UiEvent::Mouse(action, position) => self.handle_mouse(action, position),
            UiEvent::Resize | UiEvent::Tick => {}
        }
        self.apply_selections();
    }

    fn handle_key(&mut self, key: InputKey) {
        match key {
            InputKey::Char('q') | InputKey::CharCtrl('c') => self.should_quit = true,
            InputKey::Esc => self.menu.close(),
            key => self.tabs.handle_key(&key),
        }
    }

    /// The menu gets first refusal
    fn handle_mouse(&mut self, action: MouseAction, position: Point) {
        if self.menu.handle_mouse(action, position).is_consumed() {
            return;
        }
        self.tabs.handle_mouse(action, position);
    }

    fn apply_selections(&mut self) {
        let pending: Vec<String> = self.selections.borrow_mut().drain(..).collect();
        for id in pending {
            self.apply(&id);
        }
    }

    fn apply(&mut self, id: &str) {
        info!("Menu selection: {}", id);
        match id {
            "file.quit" => self.should_quit = true,
            "file.new" => self.new_tab(),
            "file.close" => self.close_tab(),
            "edit.clear" => self.log.borrow_mut().clear(),
            "help.about" => {
                if !self.tabs.exists(ABOUT_TAB) {
                    self.tabs
                        .add_tab(ABOUT_TAB, TextPane::new(ABOUT_TAB, ABOUT_TEXT));
                }
                self.show(ABOUT_TAB);
            }
            _ => {}
        }
        self.log.borrow_mut().push(format!("selected {}", id));
    }

    fn new_tab(&mut self) {
        self.untitled += 1;
        let name = format!("untitled-{}", self.untitled);
        self.tabs.add_tab(name.clone(), TextPane::new(name.clone(), ""));
        self.show(&name);
    }

    fn close_tab(&mut self) {
        if let Some(name) = self.tabs.current_tab().map(str::to_string) {
            self.tabs.remove_tab(&name);
        }
    }

    fn show(&mut self, name: &str) {
        if let Err(e) = self.tabs.show_tab(name) {
            warn!("{}", e);
        }
    }
}
