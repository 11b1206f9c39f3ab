//! The menu bar widget: top-level layout, drawing and mouse routing.

use std::fmt;

use ratatui::buffer::Buffer;
use tabmenu_core::prelude::*;
use tabmenu_core::{tagged_width_i32, MenuOption, MouseAction, Point, Rectangle};

use super::item::{MenuItem, NodeId};
use super::tree::MenuTree;
use super::MenuGlyphs;
use crate::canvas;
use crate::markup;
use crate::primitive::{MouseOutcome, Primitive};
use crate::theme::styles;

/// Who should receive the rest of a mouse gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    Item(NodeId),
    Bar,
}

/// Result of routing one mouse event through the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuMouseOutcome {
    pub consumed: bool,
    pub capture: Option<MenuTarget>,
}

impl MenuMouseOutcome {
    pub const IGNORED: Self = Self {
        consumed: false,
        capture: None,
    };

    fn captured(target: MenuTarget) -> Self {
        Self {
            consumed: true,
            capture: Some(target),
        }
    }
}

/// A horizontal bar of drop-down menus.
pub struct MenuBar {
    tree: MenuTree,
    rect: Rectangle,
    focused_menu: Option<NodeId>,
    /// A menu session runs from the first open until `close()`. Hover only
    /// expands items while a session runs, even if the pointer has just
    /// collapsed the previously open chain.
    in_session: bool,
    disabled: bool,
    has_focus: bool,
    glyphs: MenuGlyphs,
    selected: Option<Box<dyn FnMut(&str)>>,
}

impl fmt::Debug for MenuBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuBar")
            .field("tree", &self.tree)
            .field("rect", &self.rect)
            .field("focused_menu", &self.focused_menu)
            .field("in_session", &self.in_session)
            .field("disabled", &self.disabled)
            .field("has_focus", &self.has_focus)
            .field("glyphs", &self.glyphs)
            .field("selected", &self.selected.is_some())
            .finish()
    }
}

impl MenuBar {
    pub fn new(options: &[MenuOption]) -> Self {
        Self {
            tree: MenuTree::build(options),
            rect: Rectangle::default(),
            focused_menu: None,
            in_session: false,
            disabled: false,
            has_focus: false,
            glyphs: MenuGlyphs::default(),
            selected: None,
        }
    }

    pub fn with_glyphs(mut self, glyphs: MenuGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Called with the option id of every executed leaf item.
    pub fn set_selected_func<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&str) + 'static,
    {
        self.selected = Some(Box::new(handler));
        self
    }

    /// A disabled bar ignores all input.
    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.disabled = disabled;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable every item whose option id is `option_id`.
    /// Returns false if there is no such item.
    pub fn set_item_disabled(&mut self, option_id: &str, disabled: bool) -> bool {
        let matches: Vec<NodeId> = self
            .tree
            .iter()
            .filter(|(_, node)| node.option().id == option_id)
            .map(|(id, _)| id)
            .collect();
        for &id in &matches {
            self.tree.get_mut(id).disabled = disabled;
        }
        !matches.is_empty()
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn item(&self, id: NodeId) -> &MenuItem {
        self.tree.get(id)
    }

    pub fn top_level_menus(&self) -> &[NodeId] {
        self.tree.roots()
    }

    pub fn find(&self, option_id: &str) -> Option<NodeId> {
        self.tree.find(option_id)
    }

    pub fn glyphs(&self) -> &MenuGlyphs {
        &self.glyphs
    }

    pub fn focused_menu(&self) -> Option<NodeId> {
        self.focused_menu
    }

    pub fn set_focused_menu(&mut self, menu: Option<NodeId>) {
        self.focused_menu = menu;
    }

    /// True iff some submenu chain is open.
    pub fn is_active(&self) -> bool {
        self.tree.any_open()
    }

    /// True from the first open until the bar is closed.
    pub fn in_session(&self) -> bool {
        self.in_session
    }

    /// True if the focused item is `id` or one of its descendants.
    pub fn is_focused(&self, id: NodeId) -> bool {
        self.tree.is_focused(id, self.focused_menu)
    }

    pub fn display_text(&self, id: NodeId) -> String {
        self.tree.get(id).display_text(&self.glyphs.expand_indicator)
    }

    pub fn update_children_location(&mut self, id: NodeId) {
        self.tree
            .update_children_location(id, &self.glyphs.expand_indicator);
    }

    /// Open `id`. Opening a top-level item first collapses every open chain,
    /// so at most one top-level chain is open at a time. Opening a submenu
    /// item leaves its siblings alone.
    pub fn open(&mut self, id: NodeId) {
        if self.tree.get(id).is_root() {
            self.tree.close_all();
        }
        self.in_session = true;
        self.tree.set_open(id);
        debug!("Opened menu '{}'", self.tree.get(id).option().id);
    }

    /// End the menu session: close every item, clear focus. Idempotent.
    pub fn close(&mut self) {
        self.in_session = false;
        self.tree.close_all();
        self.focused_menu = None;
    }

    fn execute(&mut self, id: NodeId) {
        let option_id = self.tree.get(id).option().id.clone();
        debug!("Executing menu item '{}'", option_id);
        if let Some(handler) = self.selected.as_mut() {
            handler(&option_id);
        }
        self.close();
    }

    /// Place the top-level items left to right with a one-cell gutter and
    /// cascade their open submenus.
    pub fn layout(&mut self) {
        let mut x = self.rect.x;
        let y = self.rect.y;

        for i in 0..self.tree.roots().len() {
            let id = self.tree.roots()[i];
            let width = tagged_width_i32(&self.display_text(id));
            self.tree.get_mut(id).set_rect(Rectangle::new(x, y, width, 1));
            self.update_children_location(id);
            x += width + 1;
        }
    }

    /// Draw `id` and, if it is open, its descendants.
    ///
    /// # Panics
    /// If any drawn item has an empty rectangle; layout must run first.
    fn draw_item(&self, id: NodeId, buf: &mut Buffer) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            self.draw_single(current, buf);
            let node = self.tree.get(current);
            if node.is_open() {
                stack.extend(node.children().iter().rev().copied());
            }
        }
    }

    fn draw_single(&self, id: NodeId, buf: &mut Buffer) {
        let node = self.tree.get(id);
        let rect = node.rect();
        assert!(
            !rect.is_empty(),
            "MenuItem::draw: '{}' at {:?}",
            node.option().text,
            rect
        );

        let style = styles::menu_item(node.is_disabled(), self.is_focused(id));

        let text = node.rendered_text(&self.glyphs.expand_indicator);
        let spans = markup::spans(&text, style);
        let used = canvas::print_spans(buf, rect.x, rect.y, rect.width, &spans);
        if used < rect.width {
            let fill = " ".repeat((rect.width - used) as usize);
            canvas::print(buf, rect.x + used, rect.y, rect.width - used, &fill, style);
        }

        if !node.is_root() {
            let shadow_style = styles::menu_shadow();
            let shadow = &self.glyphs.shadow;
            canvas::set_symbol(buf, rect.right(), rect.y, shadow, shadow_style);
            canvas::print(
                buf,
                rect.x + 1,
                rect.y + 1,
                rect.width,
                &shadow.repeat(rect.width as usize),
                shadow_style,
            );
        }
    }

    /// Offer a mouse event to every top-level chain; the first consumer
    /// wins. An unconsumed left press during a menu session dismisses it.
    pub fn route_mouse(&mut self, action: MouseAction, position: Point) -> MenuMouseOutcome {
        if self.disabled {
            return MenuMouseOutcome::IGNORED;
        }

        for i in 0..self.tree.roots().len() {
            let id = self.tree.roots()[i];
            let outcome = self.route_item(id, action, position);
            if outcome.consumed {
                return outcome;
            }
        }

        if action.is_left_down() && self.in_session {
            debug!("Click outside menus, closing");
            self.close();
            return MenuMouseOutcome::captured(MenuTarget::Bar);
        }

        MenuMouseOutcome::IGNORED
    }

    /// Route through one item. Open children are asked first, so the
    /// recursion depth is bounded by the length of the open chain.
    fn route_item(&mut self, id: NodeId, action: MouseAction, position: Point) -> MenuMouseOutcome {
        let node = self.tree.get(id);
        if node.is_disabled() {
            return MenuMouseOutcome::IGNORED;
        }

        if node.is_open() && node.has_children() {
            for i in 0..self.tree.get(id).children().len() {
                let child = self.tree.get(id).children()[i];
                let outcome = self.route_item(child, action, position);
                if outcome.consumed {
                    return outcome;
                }
            }
        }

        let node = self.tree.get(id);
        let has_children = node.has_children();

        if node.rect().contains(position) {
            let is_root = node.is_root();
            self.focused_menu = Some(id);

            match action {
                MouseAction::LeftDown => {
                    // Top-level items open on release
                    if !is_root && has_children {
                        self.open(id);
                    }
                }
                MouseAction::LeftUp => {
                    if has_children {
                        self.open(id);
                    } else {
                        self.execute(id);
                    }
                }
                _ => {
                    if has_children && self.in_session {
                        self.open(id);
                    }
                }
            }

            return MenuMouseOutcome::captured(MenuTarget::Item(id));
        }

        if node.is_open() {
            if self.is_focused(id) {
                self.focused_menu = None;
            }
            self.tree.close(id);
            return MenuMouseOutcome::captured(MenuTarget::Item(id));
        }

        MenuMouseOutcome::IGNORED
    }
}

impl Primitive for MenuBar {
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

        self.layout();
        for i in 0..self.tree.roots().len() {
            let id = self.tree.roots()[i];
            self.draw_item(id, buf);
        }
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
        if self.route_mouse(action, position).consumed {
            MouseOutcome::Captured
        } else {
            MouseOutcome::Ignored
        }
    }
}
