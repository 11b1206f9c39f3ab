//! Hierarchical drop-down menu bar.
//!
//! A [`MenuBar`] is built once from a flat list of
//! [`MenuOption`](tabmenu_core::MenuOption)s. Every draw cycle it lays out
//! its top-level items left to right and cascades the open submenus below
//! and beside them; mouse events are routed through the open chains so the
//! innermost item gets first refusal.

mod bar;
mod item;
mod tree;

pub use bar::{MenuBar, MenuMouseOutcome, MenuTarget};
pub use item::{MenuItem, NodeId};
pub use tree::MenuTree;

/// Glyphs used when drawing menus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGlyphs {
    /// Appended to labels of items that open a submenu
    pub expand_indicator: String,
    /// Fills the drop shadow of submenu items
    pub shadow: String,
}

impl MenuGlyphs {
    pub fn new(expand_indicator: impl Into<String>, shadow: impl Into<String>) -> Self {
        Self {
            expand_indicator: expand_indicator.into(),
            shadow: shadow.into(),
        }
    }
}

impl Default for MenuGlyphs {
    fn default() -> Self {
        Self::new("⯈", "░")
    }
}
