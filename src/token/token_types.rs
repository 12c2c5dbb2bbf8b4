use crate::token::TokenType;

/// Concrete tag names a language's tokenizer uses for each [`TokenType`].
///
/// Hosts that drive their own tokenizer hand us `{offset, tag}` pairs; the
/// table resolves those tags back to roles. Tags are unique per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenTypes {
    pub keyword: &'static str,
    pub identifier: &'static str,
    pub function: &'static str,
    pub operator: &'static str,
    pub delimiter: &'static str,
    pub parenthesis: &'static str,
    pub number: &'static str,
    pub string: &'static str,
    pub double_quoted_string: &'static str,
    pub type_: &'static str,
    pub variable: &'static str,
    pub whitespace: &'static str,
    pub comment: &'static str,
    pub regexp: &'static str,
}

impl TokenTypes {
    pub const fn tag(&self, kind: TokenType) -> &'static str {
        match kind {
            TokenType::Keyword => self.keyword,
            TokenType::Identifier => self.identifier,
            TokenType::Function => self.function,
            TokenType::Operator => self.operator,
            TokenType::Delimiter => self.delimiter,
            TokenType::Parenthesis => self.parenthesis,
            TokenType::Number => self.number,
            TokenType::String => self.string,
            TokenType::DoubleQuotedString => self.double_quoted_string,
            TokenType::Type => self.type_,
            TokenType::Variable => self.variable,
            TokenType::Whitespace => self.whitespace,
            TokenType::Comment => self.comment,
            TokenType::Regexp => self.regexp,
        }
    }

    /// Resolve a tag produced by an external tokenizer. Unknown tags yield `None`.
    pub fn resolve(&self, tag: &str) -> Option<TokenType> {
        TokenType::ALL.into_iter().find(|kind| self.tag(*kind) == tag)
    }
}
