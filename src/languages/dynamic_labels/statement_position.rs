use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum StatementPosition {
    #[default]
    Unknown,
    AnyPosition,
}

/// Anywhere in free text (or on a lone `$`) a pattern can be inserted.
/// Inside a pattern, open or closed, nothing can be completed safely.
pub fn statement_position(current: Option<LinkedToken<'_>>) -> StatementPosition {
    match current {
        None => StatementPosition::AnyPosition,
        Some(token) if token.is_whitespace() || token.is_identifier() => StatementPosition::AnyPosition,
        Some(token) if token.is(TokenType::Variable, Some("$")) => StatementPosition::AnyPosition,
        Some(_) => StatementPosition::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::end_of;
    use rstest::rstest;
    use StatementPosition::*;

    fn classify(text: &str, position: Position) -> StatementPosition {
        let chain = TokenChain::build(DynamicLabels.tokenizer(), text, position);
        statement_position(chain.current())
    }

    #[rstest]
    #[case("", AnyPosition)]
    #[case("cpu", AnyPosition)]
    #[case("${LABEL} ", AnyPosition)]
    #[case("${LABEL} $", AnyPosition)]
    #[case("${PROP('Dim.", Unknown)]
    #[case("${LABEL}", Unknown)]
    fn at_end(#[case] text: &str, #[case] expected: StatementPosition) {
        assert_eq!(classify(text, end_of(text)), expected);
    }

    #[test]
    fn inside_a_closed_pattern() {
        assert_eq!(classify("${LABEL} x", Position::new(1, 4)), Unknown);
    }
}
