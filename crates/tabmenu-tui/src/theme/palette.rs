//! Color palette for menus and tabs.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_MUTED: Color = Color::Gray;

// --- Menu ---
pub const MENU_ACTIVE_BG: Color = Color::Red; // Focused item and its open ancestors
pub const MENU_DISABLED_FG: Color = Color::Gray;
pub const MENU_DISABLED_BG: Color = Color::Black;

// --- Effects ---
pub const SHADOW_FG: Color = Color::Gray;
pub const SHADOW_BG: Color = Color::Black;

// --- Tabs ---
pub const TAB_ACTIVE: Color = Color::Cyan;
pub const TAB_CLOSE: Color = Color::Red;
