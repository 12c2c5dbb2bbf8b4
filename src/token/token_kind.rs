//! Lexical roles shared by every supported language.
//!
//! Each language names its token tags differently (`keyword.sql`,
//! `keyword.logs`, ...) but all of them map onto this one role taxonomy, which
//! is what the linked-token layer and the statement-position classifiers
//! reason about. See `token_types.rs` for the per-language tag tables.

/// Role of a token, independent of the language that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TokenType {
    Keyword,
    Identifier,
    Function,
    Operator,
    Delimiter,
    Parenthesis,
    Number,
    String,
    DoubleQuotedString,
    Type,
    Variable,
    Whitespace,
    Comment,
    Regexp,
}

impl TokenType {
    pub const ALL: [Self; 14] = [
        TokenType::Keyword,
        TokenType::Identifier,
        TokenType::Function,
        TokenType::Operator,
        TokenType::Delimiter,
        TokenType::Parenthesis,
        TokenType::Number,
        TokenType::String,
        TokenType::DoubleQuotedString,
        TokenType::Type,
        TokenType::Variable,
        TokenType::Whitespace,
        TokenType::Comment,
        TokenType::Regexp,
    ];

    /// True for tokens that carry no grammatical meaning.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenType::Whitespace | TokenType::Comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivia_classification() {
        assert!(TokenType::Whitespace.is_trivia());
        assert!(TokenType::Comment.is_trivia());
        assert!(!TokenType::Keyword.is_trivia());
        assert!(!TokenType::Delimiter.is_trivia());
    }

    #[test]
    fn display_is_role_name() {
        assert_eq!(TokenType::DoubleQuotedString.to_string(), "DoubleQuotedString");
        assert_eq!(TokenType::Parenthesis.to_string(), "Parenthesis");
    }
}
