//! tabmenu-tui - ratatui widget layer for tabmenu
//!
//! Retained widgets that draw into a ratatui [`Buffer`](ratatui::buffer::Buffer)
//! and react to the abstract input types of `tabmenu-core`:
//!
//! - [`MenuBar`] - drop-down menus built from dotted option paths
//! - [`Tabs`] - named panes with a clickable tab strip
//! - [`Button`], [`TextPane`] - building blocks and content
//!
//! Every widget implements [`Primitive`]. The host owns the terminal and
//! the event loop; [`event`] and [`terminal`] cover the crossterm side.

pub mod canvas;
pub mod event;
pub mod markup;
pub mod menu;
pub mod primitive;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use menu::{MenuBar, MenuGlyphs, MenuItem, MenuMouseOutcome, MenuTarget, MenuTree, NodeId};
pub use primitive::{MouseOutcome, Primitive};
pub use widgets::{Button, SharedLines, Tabs, TextPane};
