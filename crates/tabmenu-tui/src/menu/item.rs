//! A single node of the menu tree.

use tabmenu_core::{tagged_width_i32, MenuOption, Orientation, Rectangle};

/// Handle to a [`MenuItem`] inside its owning [`MenuTree`](super::MenuTree).
///
/// Handles are only meaningful for the tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One menu entry plus its tree links and interaction state.
#[derive(Debug, Clone)]
pub struct MenuItem {
    option: MenuOption,
    pub(crate) children: Vec<NodeId>,
    parent: Option<NodeId>,
    children_orientation: Orientation,
    pub(crate) is_open: bool,
    pub(crate) disabled: bool,
    rect: Rectangle,
}

impl MenuItem {
    pub(crate) fn new(option: MenuOption, orientation: Orientation, parent: Option<NodeId>) -> Self {
        let rect = Rectangle::new(0, 0, tagged_width_i32(&option.text), 1);
        Self {
            option,
            children: Vec::new(),
            parent,
            children_orientation: orientation,
            is_open: false,
            disabled: false,
            rect,
        }
    }

    pub fn option(&self) -> &MenuOption {
        &self.option
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Top-level items have no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn children_orientation(&self) -> Orientation {
        self.children_orientation
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn rect(&self) -> Rectangle {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rectangle) {
        self.rect = rect;
    }

    /// Move horizontally, keeping row and size.
    pub fn set_x(&mut self, x: i32) {
        self.rect = self.rect.with_top_left(x, self.rect.y);
    }

    /// Move, keeping size.
    pub fn set_top_left(&mut self, x: i32, y: i32) {
        self.rect = self.rect.with_top_left(x, y);
    }

    /// Label shown for this item. Items with children get `indicator`
    /// appended.
    pub fn display_text(&self, indicator: &str) -> String {
        if self.has_children() {
            format!("{} {}", self.option.text, indicator)
        } else {
            self.option.text.clone()
        }
    }

    /// Text as drawn: submenu entries get one cell of left padding.
    pub(crate) fn rendered_text(&self, indicator: &str) -> String {
        if self.is_root() {
            self.display_text(indicator)
        } else {
            format!(" {}", self.display_text(indicator))
        }
    }
}
