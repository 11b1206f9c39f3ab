//! Clipped drawing onto a ratatui [`Buffer`] with signed cell coordinates.
//!
//! Widgets position themselves with [`Rectangle`]s that may hang off the
//! edge of the screen (a cascading submenu near the right border, a shadow
//! below the last row). Everything here silently clips to `buf.area`.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use tabmenu_core::Rectangle;
use unicode_width::UnicodeWidthChar;

/// Print `text` starting at `(x, y)`, using at most `max_width` cells.
///
/// Characters left of the buffer are skipped; anything past the right edge
/// or past `max_width` is dropped.
pub fn print(buf: &mut Buffer, x: i32, y: i32, max_width: i32, text: &str, style: Style) {
    let area = buf.area;
    if max_width <= 0 || y < i32::from(area.top()) || y >= i32::from(area.bottom()) {
        return;
    }

    let limit = (x + max_width).min(i32::from(area.right()));
    let mut col = x;
    let mut start = None;

    // Skip whatever falls left of the buffer
    for (idx, ch) in text.char_indices() {
        if col >= i32::from(area.left()) {
            start = Some(idx);
            break;
        }
        col += ch.width().unwrap_or(0) as i32;
    }

    let Some(start) = start else {
        return;
    };
    if col >= limit {
        return;
    }

    let visible = &text[start..];
    buf.set_stringn(col as u16, y as u16, visible, (limit - col) as usize, style);
}

/// Print styled spans back to back from `(x, y)` within `max_width` cells.
///
/// Returns the number of cells the spans cover, capped at `max_width`.
pub fn print_spans(buf: &mut Buffer, x: i32, y: i32, max_width: i32, spans: &[Span<'_>]) -> i32 {
    let mut col = x;
    for span in spans {
        let remaining = x + max_width - col;
        if remaining <= 0 {
            break;
        }
        print(buf, col, y, remaining, &span.content, span.style);
        col += i32::try_from(span.width()).unwrap_or(i32::MAX);
    }
    (col - x).clamp(0, max_width.max(0))
}

/// Put a single symbol at `(x, y)` if it is on the buffer.
pub fn set_symbol(buf: &mut Buffer, x: i32, y: i32, symbol: &str, style: Style) {
    let (Ok(cx), Ok(cy)) = (u16::try_from(x), u16::try_from(y)) else {
        return;
    };
    if let Some(cell) = buf.cell_mut((cx, cy)) {
        cell.set_symbol(symbol).set_style(style);
    }
}

/// Convert to a ratatui `Rect`, clamping negative origins and sizes to zero.
pub fn to_rect(rect: Rectangle) -> Rect {
    let clamp = |v: i32| u16::try_from(v.max(0)).unwrap_or(u16::MAX);
    Rect::new(
        clamp(rect.x),
        clamp(rect.y),
        clamp(rect.width),
        clamp(rect.height),
    )
}

pub fn from_rect(rect: Rect) -> Rectangle {
    Rectangle::new(
        i32::from(rect.x),
        i32::from(rect.y),
        i32::from(rect.width),
        i32::from(rect.height),
    )
}

/// The part of `rect` that lies on the buffer.
pub fn visible_area(buf: &Buffer, rect: Rectangle) -> Rect {
    if rect.is_empty() {
        return Rect::default();
    }
    to_rect(rect).intersection(buf.area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::row_text;

    #[test]
    fn test_print_inside() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        print(&mut buf, 2, 0, 8, "File", Style::default());
        assert_eq!(row_text(&buf, 0), "  File    ");
    }

    #[test]
    fn test_print_respects_max_width() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        print(&mut buf, 0, 0, 3, "Window", Style::default());
        assert_eq!(row_text(&buf, 0), "Win       ");
    }

    #[test]
    fn test_print_clips_right_edge() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        print(&mut buf, 3, 0, 10, "Window", Style::default());
        assert_eq!(row_text(&buf, 0), "   Win");
    }

    #[test]
    fn test_print_clips_left_edge() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        print(&mut buf, -2, 0, 6, "Window", Style::default());
        assert_eq!(row_text(&buf, 0), "ndow  ");
    }

    #[test]
    fn test_print_off_screen_rows_are_ignored() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        print(&mut buf, 0, 1, 4, "x", Style::default());
        print(&mut buf, 0, -1, 4, "x", Style::default());
        assert_eq!(row_text(&buf, 0), "    ");
    }

    #[test]
    fn test_print_spans_keeps_each_style() {
        use ratatui::style::Color;

        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 1));
        let spans = [
            Span::styled("ab", Style::default().fg(Color::Red)),
            Span::styled("cde", Style::default().fg(Color::Blue)),
        ];

        let used = print_spans(&mut buf, 1, 0, 4, &spans);

        assert_eq!(used, 4);
        assert_eq!(row_text(&buf, 0), " abcd   ");
        assert_eq!(buf[(2, 0)].fg, Color::Red);
        assert_eq!(buf[(3, 0)].fg, Color::Blue);
    }

    #[test]
    fn test_set_symbol_bounds() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 2, 2));
        set_symbol(&mut buf, 1, 1, "░", Style::default());
        set_symbol(&mut buf, 5, 1, "░", Style::default());
        set_symbol(&mut buf, -1, 0, "░", Style::default());
        assert_eq!(row_text(&buf, 1), " ░");
    }

    #[test]
    fn test_to_rect_clamps_negative() {
        assert_eq!(to_rect(Rectangle::new(-3, 2, 5, -1)), Rect::new(0, 2, 5, 0));
        assert_eq!(from_rect(Rect::new(1, 2, 3, 4)), Rectangle::new(1, 2, 3, 4));
    }
}
