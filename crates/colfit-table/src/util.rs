//! Display-width aware text helpers.
//!
//! Every width and offset in this crate is measured in terminal columns,
//! so a CJK character counts as 2 and a tab advances to the next tab stop.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Tab stops used when measuring source lines.
pub const TAB_STOP: usize = 8;

/// Returns the display width of a string in terminal columns.
///
/// # Example
///
/// ```rust
/// use colfit_table::display_width;
///
/// assert_eq!(display_width("/dev/sda1"), 9);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Advances a display column past one character of a source line.
pub(crate) fn advance_column(column: usize, c: char) -> usize {
    if c == '\t' {
        (column / TAB_STOP + 1) * TAB_STOP
    } else {
        column + c.width().unwrap_or(0)
    }
}

/// Pads a string on the left (right-aligns) to reach the target width.
///
/// Strings already at or over the width are returned unchanged.
///
/// ```rust
/// use colfit_table::pad_left;
///
/// assert_eq!(pad_left("42", 5), "   42");
/// assert_eq!(pad_left("hello", 3), "hello");
/// ```
pub fn pad_left(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(s));
    let mut out = String::with_capacity(s.len() + padding);
    out.extend(std::iter::repeat(' ').take(padding));
    out.push_str(s);
    out
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// ```rust
/// use colfit_table::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// assert_eq!(pad_right("hello", 3), "hello");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(s));
    let mut out = String::with_capacity(s.len() + padding);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(padding));
    out
}

/// Cuts a string to at most `max_width` columns, keeping the start.
///
/// No ellipsis is added: the result is always a prefix of the input.
pub fn truncate_end(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > max_width {
            break;
        }
        result.push(c);
        current += w;
    }
    result
}

/// Cuts a string to at most `max_width` columns, keeping the end.
pub fn truncate_start(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let mut kept: Vec<char> = Vec::new();
    let mut current = 0;
    for c in s.chars().rev() {
        let w = c.width().unwrap_or(0);
        if current + w > max_width {
            break;
        }
        kept.push(c);
        current += w;
    }
    kept.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_wide_chars_twice() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本語"), 6);
    }

    #[test]
    fn tab_advances_to_next_stop() {
        assert_eq!(advance_column(0, '\t'), 8);
        assert_eq!(advance_column(7, '\t'), 8);
        assert_eq!(advance_column(8, '\t'), 16);
        assert_eq!(advance_column(3, 'x'), 4);
    }

    #[test]
    fn padding_never_truncates() {
        assert_eq!(pad_left("abc", 2), "abc");
        assert_eq!(pad_right("abc", 2), "abc");
        assert_eq!(pad_left("", 3), "   ");
    }

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(pad_right("日本", 6), "日本  ");
        assert_eq!(pad_left("日本", 5), " 日本");
    }

    #[test]
    fn truncate_end_keeps_prefix() {
        assert_eq!(truncate_end("/snap/core18", 5), "/snap");
        assert_eq!(truncate_end("short", 10), "short");
        assert_eq!(truncate_end("abc", 0), "");
    }

    #[test]
    fn truncate_start_keeps_suffix() {
        assert_eq!(truncate_start("/snap/core18", 6), "core18");
        assert_eq!(truncate_start("short", 10), "short");
    }

    #[test]
    fn truncate_does_not_split_wide_chars() {
        assert_eq!(truncate_end("日本語", 3), "日");
        assert_eq!(truncate_start("日本語", 3), "語");
    }
}
