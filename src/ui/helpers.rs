use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` to `max_width` display cells, ending in an ellipsis when shortened.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw + 1 > max_width {
            result.push('…');
            break;
        }
        result.push(c);
        width += cw;
    }
    result
}

/// Rows `text` takes when wrapped at `width` cells. Approximates word wrapping
/// by character count, which can only undercount by a row per long word.
pub fn wrapped_height(text: &str, width: usize) -> usize {
    let width = width.max(1);
    text.lines().map(|line| line.width().div_ceil(width).max(1)).sum::<usize>().max(1)
}

/// Centered rectangle of at most `width` x `height` inside `area`.
pub fn centered_rect(area: ratatui::layout::Rect, width: u16, height: u16) -> ratatui::layout::Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    ratatui::layout::Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
