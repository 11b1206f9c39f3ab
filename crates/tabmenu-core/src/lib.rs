//! # tabmenu-core - Core Domain Types
//!
//! Foundation crate for tabmenu. Provides the terminal-independent pieces of
//! the widget layer: cell geometry, menu option descriptions, tagged-string
//! measurement, abstract input events, error handling, logging and
//! configuration.
//!
//! This crate has **no terminal dependencies** -- ratatui and crossterm live
//! in `tabmenu-tui`.
//!
//! ## Public API
//!
//! ### Geometry (`geometry`)
//! - [`Point`], [`Rectangle`] - Cell coordinates and regions (half-open containment)
//! - [`Orientation`] - Direction in which submenu children are stacked
//!
//! ### Menu Options (`option`)
//! - [`MenuOption`] - Flat `{id, text, structure}` entry with a dotted tree path
//!
//! ### Text (`text`)
//! - [`tagged_width()`] - Cell width of a string, ignoring style tags
//! - [`strip_tags()`] - Remove style tags
//! - [`segments()`] - Split a label into text runs and parsed [`StyleTag`]s
//!
//! ### Input (`input`)
//! - [`InputKey`], [`MouseAction`] - Terminal-independent input events
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]
//!
//! ### Configuration (`config`)
//! - [`config::Settings`], [`config::load_settings()`]
//!
//! ## Prelude
//!
//! ```rust
//! use tabmenu_core::prelude::*;
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod option;
pub mod prelude;
pub mod text;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use geometry::{Orientation, Point, Rectangle};
pub use input::{InputKey, MouseAction};
pub use option::MenuOption;
pub use text::{
    segments, strip_tags, tagged_width, tagged_width_i32, Segment, StyleTag, TagField,
};
