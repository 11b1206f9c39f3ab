//! Style tags to ratatui spans.
//!
//! `[fg:bg:attrs]` tags change the style of the text after them. An empty
//! field keeps the current value and `-` restores the base style the caller
//! draws with. Unknown colour names leave the colour unchanged.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use tabmenu_core::{segments, Segment, StyleTag, TagField};

/// Split a tagged label into styled spans, starting from `base`.
pub fn spans(text: &str, base: Style) -> Vec<Span<'static>> {
    let mut style = base;
    let mut out = Vec::new();

    for segment in segments(text) {
        match segment {
            Segment::Text(run) => out.push(Span::styled(run.to_string(), style)),
            Segment::Tag(tag) => style = apply(style, &tag, base),
        }
    }
    out
}

fn apply(current: Style, tag: &StyleTag, base: Style) -> Style {
    let mut style = current;

    match &tag.fg {
        TagField::Keep => {}
        TagField::Reset => style.fg = base.fg,
        TagField::Set(name) => style.fg = color(name).or(style.fg),
    }
    match &tag.bg {
        TagField::Keep => {}
        TagField::Reset => style.bg = base.bg,
        TagField::Set(name) => style.bg = color(name).or(style.bg),
    }
    match &tag.attrs {
        TagField::Keep => {}
        TagField::Reset => {
            style.add_modifier = base.add_modifier;
            style.sub_modifier = base.sub_modifier;
        }
        TagField::Set(flags) => {
            style.add_modifier = base.add_modifier | modifiers(flags);
            style.sub_modifier = base.sub_modifier;
        }
    }
    style
}

fn color(name: &str) -> Option<Color> {
    name.parse().ok()
}

fn modifiers(flags: &str) -> Modifier {
    flags.chars().fold(Modifier::empty(), |acc, flag| {
        acc | match flag {
            'l' => Modifier::SLOW_BLINK,
            'b' => Modifier::BOLD,
            'i' => Modifier::ITALIC,
            'd' => Modifier::DIM,
            'r' => Modifier::REVERSED,
            'u' => Modifier::UNDERLINED,
            's' => Modifier::CROSSED_OUT,
            _ => Modifier::empty(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Style {
        Style::default().fg(Color::White).bg(Color::Black)
    }

    #[test]
    fn test_plain_text_is_one_span() {
        let spans = spans("File", base());
        assert_eq!(spans, vec![Span::styled("File", base())]);
    }

    #[test]
    fn test_colour_applies_until_reset() {
        let spans = spans("[red]Fi[-]le", base());

        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "Fi");
        assert_eq!(spans[0].style.fg, Some(Color::Red));
        assert_eq!(spans[0].style.bg, Some(Color::Black));
        assert_eq!(spans[1].style, base());
    }

    #[test]
    fn test_background_hex_and_attributes() {
        let spans = spans("[:#00ff00:bu]Save[::-]!", base());

        assert_eq!(spans[0].style.fg, Some(Color::White));
        assert_eq!(spans[0].style.bg, Some(Color::Rgb(0, 255, 0)));
        assert!(spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert!(spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
        assert_eq!(spans[1].style.add_modifier, Modifier::empty());
    }

    #[test]
    fn test_unknown_colour_keeps_current() {
        let spans = spans("[nosuchcolour]x", base());
        assert_eq!(spans[0].style.fg, Some(Color::White));
    }

    #[test]
    fn test_tags_only_yield_no_spans() {
        assert!(spans("[red][-]", base()).is_empty());
    }
}
