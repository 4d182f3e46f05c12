//! Whitespace tokenizer that remembers where each token sat on the line.

use crate::util::advance_column;

/// A run of non-whitespace characters and its position on the source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub text: &'a str,
    /// Display column of the first character.
    pub start: usize,
    /// Display column just past the last character.
    pub end: usize,
    pub byte_start: usize,
    pub byte_end: usize,
}

/// Splits a line on whitespace runs.
pub(crate) fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut column = 0;
    // (byte offset, display column) of the token being scanned
    let mut open: Option<(usize, usize)> = None;

    for (idx, c) in line.char_indices() {
        if c.is_whitespace() {
            if let Some((byte_start, start)) = open.take() {
                tokens.push(Token {
                    text: &line[byte_start..idx],
                    start,
                    end: column,
                    byte_start,
                    byte_end: idx,
                });
            }
        } else if open.is_none() {
            open = Some((idx, column));
        }
        column = advance_column(column, c);
    }

    if let Some((byte_start, start)) = open {
        tokens.push(Token {
            text: &line[byte_start..],
            start,
            end: column,
            byte_start,
            byte_end: line.len(),
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<&str> {
        tokenize(line).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(texts("a  bb\tccc "), vec!["a", "bb", "ccc"]);
        assert!(texts("   ").is_empty());
        assert!(texts("").is_empty());
    }

    #[test]
    fn records_display_offsets() {
        let tokens = tokenize("  ab  cd");
        assert_eq!((tokens[0].start, tokens[0].end), (2, 4));
        assert_eq!((tokens[1].start, tokens[1].end), (6, 8));
    }

    #[test]
    fn tabs_move_to_tab_stops() {
        let tokens = tokenize("ab\tcd");
        assert_eq!(tokens[1].start, 8);
        assert_eq!(tokens[1].byte_start, 3);
    }

    #[test]
    fn wide_chars_shift_later_offsets() {
        let tokens = tokenize("日本 x");
        assert_eq!(tokens[0].end, 4);
        assert_eq!(tokens[1].start, 5);
    }
}
