use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut result = String::new();
    for g in s.graphemes(true) {
        let gw = display_width(g);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(g);
    }
    result.push('\u{2026}');
    result
}

/// Longest prefix of `s` that fits in `max_cells` cells, without an ellipsis.
pub fn prefix_within_width(s: &str, max_cells: usize) -> &str {
    let mut width = 0;
    for (i, g) in s.grapheme_indices(true) {
        width += display_width(g);
        if width > max_cells {
            return &s[..i];
        }
    }
    s
}

/// Next grapheme boundary after `byte_offset`. None at end of string.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    match s[byte_offset..].grapheme_indices(true).nth(1) {
        Some((i, _)) => Some(byte_offset + i),
        None => Some(s.len()),
    }
}

/// Previous grapheme boundary before `byte_offset`. None at start of string.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// Start of the word to the left of `byte_offset` (whitespace-delimited).
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = s[..byte_offset.min(s.len())]
        .grapheme_indices(true)
        .collect();
    let is_space = |g: &str| g.chars().all(char::is_whitespace);

    let mut idx = graphemes.len();
    while idx > 0 && is_space(graphemes[idx - 1].1) {
        idx -= 1;
    }
    while idx > 0 && !is_space(graphemes[idx - 1].1) {
        idx -= 1;
    }
    graphemes.get(idx).map_or(0, |(i, _)| *i)
}

/// First byte of the window of `s` to display in `max_cells` cells so that
/// the cursor at `cursor` (a byte offset) stays on screen, one cell reserved
/// for the cursor itself.
pub fn scroll_start_for_cursor(s: &str, cursor: usize, max_cells: usize) -> usize {
    let cursor = cursor.min(s.len());
    if max_cells == 0 {
        return cursor;
    }
    let mut start = 0;
    let mut width = display_width(&s[..cursor]);
    for (i, g) in s[..cursor].grapheme_indices(true) {
        if width < max_cells {
            break;
        }
        width -= display_width(g);
        start = i + g.len();
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_cases() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("你好"), 4);
        assert_eq!(display_width("cafe\u{0301}"), 4);
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("\u{2713}\u{270E}\u{2715}\u{232B}"), 4);
    }

    #[test]
    fn truncate_cases() {
        assert_eq!(truncate_to_width("hi", 10), "hi");
        assert_eq!(truncate_to_width("hello", 5), "hello");
        assert_eq!(truncate_to_width("hello world", 8), "hello w\u{2026}");
        assert_eq!(truncate_to_width("你好世界", 5), "你好\u{2026}");
        assert_eq!(truncate_to_width("hello", 0), "");
        assert_eq!(truncate_to_width("hello", 1), "\u{2026}");
    }

    #[test]
    fn prefix_within_width_cases() {
        assert_eq!(prefix_within_width("hello", 10), "hello");
        assert_eq!(prefix_within_width("hello", 3), "hel");
        assert_eq!(prefix_within_width("你好", 3), "你");
        assert_eq!(prefix_within_width("abc", 0), "");
    }

    #[test]
    fn grapheme_steps() {
        let s = "a🎉b";
        assert_eq!(next_grapheme_boundary(s, 0), Some(1));
        assert_eq!(next_grapheme_boundary(s, 1), Some(5));
        assert_eq!(next_grapheme_boundary(s, 6), None);
        assert_eq!(prev_grapheme_boundary(s, 5), Some(1));
        assert_eq!(prev_grapheme_boundary(s, 0), None);
    }

    #[test]
    fn combining_mark_is_one_step() {
        let s = "cafe\u{0301}!";
        assert_eq!(next_grapheme_boundary(s, 3), Some(6));
        assert_eq!(prev_grapheme_boundary(s, 6), Some(3));
    }

    #[test]
    fn word_left() {
        let s = "buy oat milk";
        assert_eq!(word_boundary_left(s, s.len()), 8);
        assert_eq!(word_boundary_left(s, 8), 4);
        assert_eq!(word_boundary_left(s, 4), 0);
        assert_eq!(word_boundary_left(s, 0), 0);
        assert_eq!(word_boundary_left("milk   ", 7), 0);
    }

    #[test]
    fn scroll_start_keeps_cursor_visible() {
        // fits: no scroll
        assert_eq!(scroll_start_for_cursor("hello", 5, 10), 0);
        // cursor at end of 10 chars in 5 cells: show last 4 chars plus cursor cell
        assert_eq!(scroll_start_for_cursor("abcdefghij", 10, 5), 6);
        // cursor mid-string
        assert_eq!(scroll_start_for_cursor("abcdefghij", 3, 5), 0);
        // wide chars
        assert_eq!(scroll_start_for_cursor("你好世界", 12, 5), 6);
    }
}
