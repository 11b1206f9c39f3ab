//! Configuration file parsing for tabmenu
//!
//! Supports `.tabmenu/config.toml` for behavior, menu contents, startup tabs
//! and glyphs.

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, parse_settings};
pub use types::*;
