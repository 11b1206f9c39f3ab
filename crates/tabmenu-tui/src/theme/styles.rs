//! Semantic style builders for menus and tabs.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Menu item styles ---

/// Style for a menu item. Disabled wins over focused, focused wins over
/// default.
pub fn menu_item(disabled: bool, focused: bool) -> Style {
    if disabled {
        menu_item_disabled()
    } else if focused {
        menu_item_active()
    } else {
        menu_item_default()
    }
}

pub fn menu_item_default() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn menu_item_active() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(palette::MENU_ACTIVE_BG)
}

pub fn menu_item_disabled() -> Style {
    Style::default()
        .fg(palette::MENU_DISABLED_FG)
        .bg(palette::MENU_DISABLED_BG)
}

/// Drop shadow drawn beside and under submenu items.
pub fn menu_shadow() -> Style {
    Style::default()
        .fg(palette::SHADOW_FG)
        .bg(palette::SHADOW_BG)
}

// --- Tab strip styles ---

pub fn tab_button(active: bool) -> Style {
    if active {
        Style::default()
            .fg(palette::TAB_ACTIVE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette::TEXT_MUTED)
    }
}

pub fn tab_close_button() -> Style {
    Style::default().fg(palette::TAB_CLOSE)
}

// --- Block builders ---

pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            Style::default().fg(palette::BORDER_ACTIVE)
        } else {
            Style::default().fg(palette::BORDER_DIM)
        })
}

pub fn pane_background() -> Style {
    Style::default().bg(palette::DEEPEST_BG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_priority() {
        // disabled beats focused
        assert_eq!(menu_item(true, true), menu_item_disabled());
        assert_eq!(menu_item(true, false), menu_item_disabled());
        assert_eq!(menu_item(false, true), menu_item_active());
        assert_eq!(menu_item(false, false), menu_item_default());
    }

    #[test]
    fn test_active_item_has_highlight_background() {
        assert_eq!(menu_item_active().bg, Some(palette::MENU_ACTIVE_BG));
        assert_eq!(menu_item_default().bg, None);
    }

    #[test]
    fn test_tab_button_styles_differ() {
        assert_ne!(tab_button(true), tab_button(false));
        assert_eq!(tab_close_button().fg, Some(palette::TAB_CLOSE));
    }
}
