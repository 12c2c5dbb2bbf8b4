//! Navigable token chain.
//!
//! The chain is an arena: nodes live in one `Vec` in document order and refer
//! to their neighbours by index. A [`LinkedToken`] is a cheap `Copy` handle
//! (`&TokenChain` + index) exposing typed predicates and directional search.
//! Nothing mutates links once the builder is done, so handles can be passed
//! around freely for the lifetime of the request.
//!
//! Value comparisons ignore ASCII case: every supported language treats its
//! vocabulary case-insensitively (`select` and `SELECT` are the same keyword).
use crate::{linked_token::TokenRange, token::TokenType};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    kind: TokenType,
    value: String,
    range: TokenRange,
    prev: Option<usize>,
    next: Option<usize>,
}

/// All tokens of one document, linked across line boundaries, plus the index
/// of the token under the cursor (if any).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenChain {
    nodes: Vec<Node>,
    current: Option<usize>,
}

impl TokenChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<LinkedToken<'_>> {
        (index < self.nodes.len()).then_some(LinkedToken { chain: self, index })
    }

    pub fn first(&self) -> Option<LinkedToken<'_>> {
        self.get(0)
    }

    /// The token whose range contains the cursor.
    pub fn current(&self) -> Option<LinkedToken<'_>> {
        self.current.and_then(|index| self.get(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = LinkedToken<'_>> {
        (0..self.nodes.len()).map(|index| LinkedToken { chain: self, index })
    }

    /// Append a node and link it after the previously appended one.
    pub(crate) fn push(&mut self, kind: TokenType, value: impl Into<String>, range: TokenRange) -> usize {
        let index = self.nodes.len();
        let prev = index.checked_sub(1);
        if let Some(prev) = prev {
            self.nodes[prev].next = Some(index);
        }
        self.nodes.push(Node {
            kind,
            value: value.into(),
            range,
            prev,
            next: None,
        });
        index
    }

    pub(crate) fn set_current(&mut self, index: usize) {
        self.current = Some(index);
    }
}

/// Handle to one node of a [`TokenChain`].
#[derive(Clone, Copy)]
pub struct LinkedToken<'a> {
    chain: &'a TokenChain,
    index: usize,
}

impl<'a> LinkedToken<'a> {
    fn node(&self) -> &'a Node {
        &self.chain.nodes[self.index]
    }

    fn at(&self, index: Option<usize>) -> Option<LinkedToken<'a>> {
        index.map(|index| LinkedToken {
            chain: self.chain,
            index,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> TokenType {
        self.node().kind
    }

    pub fn value(&self) -> &'a str {
        &self.node().value
    }

    pub fn range(&self) -> TokenRange {
        self.node().range
    }

    pub fn previous(&self) -> Option<LinkedToken<'a>> {
        self.at(self.node().prev)
    }

    pub fn next(&self) -> Option<LinkedToken<'a>> {
        self.at(self.node().next)
    }

    /// Exact role match, and when `value` is given, a case-insensitive value match.
    pub fn is(&self, kind: TokenType, value: Option<&str>) -> bool {
        self.kind() == kind && value.is_none_or(|v| self.value().eq_ignore_ascii_case(v))
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.value().eq_ignore_ascii_case(value)
    }

    pub fn is_keyword(&self) -> bool {
        self.kind() == TokenType::Keyword
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind() == TokenType::Whitespace
    }

    pub fn is_parenthesis(&self) -> bool {
        self.kind() == TokenType::Parenthesis
    }

    pub fn is_identifier(&self) -> bool {
        self.kind() == TokenType::Identifier
    }

    pub fn is_string(&self) -> bool {
        self.kind() == TokenType::String
    }

    pub fn is_double_quoted_string(&self) -> bool {
        self.kind() == TokenType::DoubleQuotedString
    }

    pub fn is_variable(&self) -> bool {
        self.kind() == TokenType::Variable
    }

    pub fn is_function(&self) -> bool {
        self.kind() == TokenType::Function
    }

    pub fn is_number(&self) -> bool {
        self.kind() == TokenType::Number
    }

    pub fn is_operator(&self) -> bool {
        self.kind() == TokenType::Operator
    }

    pub fn is_delimiter(&self) -> bool {
        self.kind() == TokenType::Delimiter
    }

    pub fn is_comment(&self) -> bool {
        self.kind() == TokenType::Comment
    }

    pub fn get_previous_non_whitespace_token(&self) -> Option<LinkedToken<'a>> {
        self.walk_back().find(|t| !t.is_whitespace())
    }

    /// Nearest preceding token that is neither whitespace nor a comment.
    pub fn get_previous_significant_token(&self) -> Option<LinkedToken<'a>> {
        self.walk_back().find(|t| !t.kind().is_trivia())
    }

    pub fn get_next_non_whitespace_token(&self) -> Option<LinkedToken<'a>> {
        self.walk_forward().find(|t| !t.is_whitespace())
    }

    pub fn get_previous_keyword(&self) -> Option<LinkedToken<'a>> {
        self.walk_back().find(|t| t.is_keyword())
    }

    pub fn get_previous_of_type(&self, kind: TokenType, value: Option<&str>) -> Option<LinkedToken<'a>> {
        self.walk_back().find(|t| t.is(kind, value))
    }

    pub fn get_next_of_type(&self, kind: TokenType, value: Option<&str>) -> Option<LinkedToken<'a>> {
        self.walk_forward().find(|t| t.is(kind, value))
    }

    /// Tokens strictly between this one and the nearest preceding `(kind, value)`
    /// boundary, nearest first. Whitespace and `ignore`d roles are skipped; the
    /// boundary itself is excluded. Without a boundary the scan runs to the
    /// start of the chain.
    pub fn get_previous_until(
        &self,
        kind: TokenType,
        ignore: &[TokenType],
        value: Option<&str>,
    ) -> Vec<LinkedToken<'a>> {
        Self::collect_until(self.walk_back(), kind, ignore, value)
    }

    /// Forward counterpart of [`Self::get_previous_until`].
    pub fn get_next_until(
        &self,
        kind: TokenType,
        ignore: &[TokenType],
        value: Option<&str>,
    ) -> Vec<LinkedToken<'a>> {
        Self::collect_until(self.walk_forward(), kind, ignore, value)
    }

    fn collect_until(
        tokens: impl Iterator<Item = LinkedToken<'a>>,
        kind: TokenType,
        ignore: &[TokenType],
        value: Option<&str>,
    ) -> Vec<LinkedToken<'a>> {
        tokens
            .take_while(|t| !t.is(kind, value))
            .filter(|t| !t.is_whitespace() && !ignore.contains(&t.kind()))
            .collect()
    }

    /// Strictly preceding tokens, nearest first.
    pub fn walk_back(&self) -> impl Iterator<Item = LinkedToken<'a>> + use<'a> {
        std::iter::successors(self.previous(), |t| t.previous())
    }

    /// Strictly following tokens, nearest first.
    pub fn walk_forward(&self) -> impl Iterator<Item = LinkedToken<'a>> + use<'a> {
        std::iter::successors(self.next(), |t| t.next())
    }
}

impl PartialEq for LinkedToken<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.chain, other.chain) && self.index == other.index
    }
}

impl Eq for LinkedToken<'_> {}

impl fmt::Debug for LinkedToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedToken")
            .field("kind", &self.kind())
            .field("value", &self.value())
            .field("range", &self.range())
            .finish()
    }
}
