//! Configuration types for tabmenu
//!
//! Defines:
//! - `Settings` - Global application settings (.tabmenu/config.toml)
//! - Per-section settings structs with serde defaults

use serde::{Deserialize, Serialize};

use crate::option::MenuOption;

/// Application settings (.tabmenu/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub menu: MenuSettings,

    #[serde(default)]
    pub tabs: TabSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask the terminal to report mouse events
    #[serde(default = "default_true")]
    pub mouse_capture: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            mouse_capture: true,
        }
    }
}

/// Menu bar contents
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MenuSettings {
    /// Flat option list; tree position comes from each `structure`
    #[serde(default = "default_menu_options")]
    pub options: Vec<MenuOption>,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            options: default_menu_options(),
        }
    }
}

/// A tab opened at startup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TabSpec {
    pub name: String,
    #[serde(default)]
    pub body: String,
}

impl TabSpec {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

/// Tab container contents
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TabSettings {
    #[serde(default = "default_tabs")]
    pub initial: Vec<TabSpec>,
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            initial: default_tabs(),
        }
    }
}

/// Glyph settings. Colors are not configurable.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Appended to labels of items that open a submenu
    #[serde(default = "default_expand_indicator")]
    pub expand_indicator: String,

    /// Drawn to the right of and below submenu items
    #[serde(default = "default_shadow_glyph")]
    pub shadow_glyph: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            expand_indicator: default_expand_indicator(),
            shadow_glyph: default_shadow_glyph(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_expand_indicator() -> String {
    "⯈".to_string()
}

fn default_shadow_glyph() -> String {
    "░".to_string()
}

fn default_menu_options() -> Vec<MenuOption> {
    vec![
        MenuOption::new("file", "File", "file"),
        MenuOption::new("file.new", "New tab", "file.new"),
        MenuOption::new("file.recent", "Recent", "file.recent"),
        MenuOption::new("file.recent.readme", "README.md", "file.recent.readme"),
        MenuOption::new("file.recent.notes", "notes.txt", "file.recent.notes"),
        MenuOption::new("file.close", "Close tab", "file.close"),
        MenuOption::new("file.quit", "Quit", "file.quit"),
        MenuOption::new("edit", "Edit", "edit"),
        MenuOption::new("edit.clear", "Clear", "edit.clear"),
        MenuOption::new("help", "Help", "help"),
        MenuOption::new("help.about", "About", "help.about"),
    ]
}

fn default_tabs() -> Vec<TabSpec> {
    vec![
        TabSpec::new(
            "welcome",
            "Click a menu title to open it, then click an entry to run it.",
        ),
        TabSpec::new("log", "Menu selections are listed here."),
    ]
}
