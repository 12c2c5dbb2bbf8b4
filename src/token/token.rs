//! Token model: a role plus the column it starts at on its line.
//!
//! Tokens are produced per line. `offset` is 0-indexed and counted in UTF-16
//! code units, the unit editors use for columns, so ranges stay correct for
//! non-ASCII text. A token's end is implied by the next token on the same line
//! (or the line's end), which is how `LinkedTokenBuilder` derives ranges.
use crate::token::{TokenType, TokenTypes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub offset: usize,
    pub kind: TokenType,
}

impl Token {
    pub const fn new(kind: TokenType, offset: usize) -> Self {
        Self { offset, kind }
    }

    /// Build a token from an external tokenizer's tag. Unknown tags yield `None`.
    pub fn from_tag(offset: usize, tag: &str, types: &TokenTypes) -> Option<Self> {
        types.resolve(tag).map(|kind| Self::new(kind, offset))
    }
}

/// Turns a whole document into per-line token lists.
///
/// Implementations never fail: malformed input still yields tokens, at worst
/// ones the classifiers cannot match. An empty line yields an empty list.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Vec<Token>>;
}

/// Split a document into lines the way editors number them: `\n` separates
/// lines, a trailing `\r` is not part of the line, and a trailing newline opens
/// one more (empty) line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Length of `line` in UTF-16 code units.
pub fn utf16_len(line: &str) -> usize {
    line.chars().map(char::len_utf16).sum()
}

/// Slice `line` by UTF-16 column offsets (0-indexed, end exclusive). Offsets
/// past the end are clamped.
pub fn utf16_slice(line: &str, start: usize, end: usize) -> &str {
    let mut units = 0;
    let mut start_byte = line.len();
    let mut end_byte = line.len();
    for (byte, ch) in line.char_indices() {
        if units == start && start_byte == line.len() {
            start_byte = byte;
        }
        if units >= end {
            end_byte = byte;
            break;
        }
        units += ch.len_utf16();
    }
    if start_byte > end_byte {
        return "";
    }
    &line[start_byte..end_byte]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_lines_keeps_trailing_empty_line() {
        assert_eq!(split_lines("a\r\nb\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn utf16_slicing_handles_surrogate_pairs() {
        let line = "a😀b";
        assert_eq!(utf16_len(line), 4);
        assert_eq!(utf16_slice(line, 0, 1), "a");
        assert_eq!(utf16_slice(line, 1, 3), "😀");
        assert_eq!(utf16_slice(line, 3, 4), "b");
        assert_eq!(utf16_slice(line, 3, 99), "b");
        assert_eq!(utf16_slice(line, 4, 5), "");
    }

    #[test]
    fn from_tag_resolves_through_table() {
        let types = crate::languages::sql::TOKEN_TYPES;
        let token = Token::from_tag(3, types.keyword, &types).expect("known tag");
        assert_eq!(token, Token::new(TokenType::Keyword, 3));
        assert!(Token::from_tag(0, "bogus", &types).is_none());
    }
}
