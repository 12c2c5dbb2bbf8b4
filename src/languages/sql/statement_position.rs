use super::*;
use TokenType::{Delimiter, Keyword, Operator, Parenthesis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum StatementPosition {
    #[default]
    Unknown,
    SelectKeyword,
    AfterSelectKeyword,
    AfterSelectFuncFirstArgument,
    AfterSelectArgs,
    FromKeyword,
    AfterFromKeyword,
    SchemaFuncFirstArgument,
    SchemaFuncExtraArgument,
    AfterFrom,
    WhereKey,
    WhereComparisonOperator,
    WhereValue,
    AfterWhereValue,
    AfterGroupByKeywords,
    AfterGroupBy,
    AfterOrderByKeywords,
    AfterOrderByFunction,
    AfterOrderByDirection,
    AfterLimitKeyword,
}

/// Classify the cursor from the token under it. First matching rule wins.
pub fn statement_position(current: Option<LinkedToken<'_>>) -> StatementPosition {
    use StatementPosition::*;

    let Some(current) = current else {
        return SelectKeyword;
    };
    let previous = current.get_previous_significant_token();
    let previous_keyword = current.get_previous_keyword();
    let keyword_before_that = previous_keyword.and_then(|t| t.get_previous_keyword());

    let after = |keyword: &str| previous_keyword.is_some_and(|t| t.has_value(keyword));
    let previous_is = |kind: TokenType, value: Option<&str>| previous.is_some_and(|t| t.is(kind, value));
    let previous_names = previous.is_some_and(|t| t.is_identifier() || t.is_double_quoted_string());
    // `(` under the cursor or right behind it.
    let opens_call = previous_is(Parenthesis, Some("(")) || current.is(Parenthesis, Some("("));
    let by_clause = |clause: &str| after(BY) && keyword_before_that.is_some_and(|t| t.has_value(clause));

    if previous.is_none()
        && (current.is_whitespace() || current.is_identifier() || current.is(Keyword, Some(SELECT)))
    {
        return SelectKeyword;
    }

    if previous_is(Keyword, Some(SELECT)) {
        return AfterSelectKeyword;
    }

    if after(SELECT) && opens_call {
        return AfterSelectFuncFirstArgument;
    }

    if after(SELECT)
        && previous_names
        && previous
            .and_then(|t| t.get_previous_non_whitespace_token())
            .is_some_and(|t| t.is(Parenthesis, Some("(")))
    {
        return AfterSelectArgs;
    }

    if after(SELECT) && previous_is(Parenthesis, Some(")")) {
        return FromKeyword;
    }

    if previous_is(Keyword, Some(FROM)) {
        return AfterFromKeyword;
    }

    if after(SCHEMA) && opens_call {
        return SchemaFuncFirstArgument;
    }

    if after(SCHEMA) && previous_is(Delimiter, Some(",")) {
        return SchemaFuncExtraArgument;
    }

    if (after(FROM) && previous.is_some_and(|t| t.is_double_quoted_string() || t.is_variable()))
        || (after(SCHEMA) && previous_is(Parenthesis, Some(")")))
    {
        return AfterFrom;
    }

    if after(WHERE) {
        if previous_is(Keyword, Some(WHERE))
            || previous_is(Parenthesis, Some("("))
            || LOGICAL_OPERATORS.iter().any(|op| previous_is(Operator, Some(op)))
        {
            return WhereKey;
        }
        if previous_names {
            return WhereComparisonOperator;
        }
        if COMPARISON_OPERATORS.iter().any(|op| previous_is(Operator, Some(op))) {
            return WhereValue;
        }
        if previous.is_some_and(|t| {
            t.is_string() || t.is_number() || t.is_variable() || t.is(Parenthesis, Some(")"))
        }) {
            return AfterWhereValue;
        }
    }

    if by_clause(GROUP) {
        if previous_is(Keyword, Some(BY)) || previous_is(Delimiter, Some(",")) {
            return AfterGroupByKeywords;
        }
        if previous_names {
            return AfterGroupBy;
        }
    }

    if by_clause(ORDER) {
        if previous_is(Keyword, Some(BY)) {
            return AfterOrderByKeywords;
        }
        if previous_is(Parenthesis, Some(")")) {
            return AfterOrderByFunction;
        }
    }

    if previous_is(Keyword, Some(ASC)) || previous_is(Keyword, Some(DESC)) {
        return AfterOrderByDirection;
    }

    if previous_is(Keyword, Some(LIMIT)) {
        return AfterLimitKeyword;
    }

    Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::end_of;
    use rstest::rstest;
    use StatementPosition::*;

    fn classify(text: &str) -> StatementPosition {
        let chain = TokenChain::build(Sql.tokenizer(), text, end_of(text));
        statement_position(chain.current())
    }

    const METRIC: &str = "SELECT AVG(CPUUtilization) ";
    const FROM_EC2: &str = "SELECT AVG(CPUUtilization) FROM \"AWS/EC2\" ";

    #[rstest]
    #[case("", SelectKeyword)]
    #[case("SEL", SelectKeyword)]
    #[case("  SEL", SelectKeyword)]
    #[case("\n  SEL", SelectKeyword)]
    #[case("-- note\nSEL", SelectKeyword)]
    #[case("-- note\n", SelectKeyword)]
    #[case("SELECT ", AfterSelectKeyword)]
    #[case("SELECT AV", AfterSelectKeyword)]
    #[case("SELECT AVG(", AfterSelectFuncFirstArgument)]
    #[case("SELECT AVG(CPU", AfterSelectFuncFirstArgument)]
    #[case("SELECT AVG(CPUUtilization ", AfterSelectArgs)]
    #[case(METRIC, FromKeyword)]
    #[case("SELECT AVG(CPUUtilization) FROM ", AfterFromKeyword)]
    #[case("SELECT AVG(CPUUtilization) FROM SCHEMA(", SchemaFuncFirstArgument)]
    #[case("SELECT AVG(CPUUtilization) FROM SCHEMA(\"AWS/EC2\", ", SchemaFuncExtraArgument)]
    #[case("SELECT AVG(CPUUtilization) FROM SCHEMA(\"AWS/EC2\", InstanceId) ", AfterFrom)]
    #[case(FROM_EC2, AfterFrom)]
    #[case("SELECT AVG(CPUUtilization) FROM $namespace ", AfterFrom)]
    fn select_and_from_positions(#[case] text: &str, #[case] expected: StatementPosition) {
        assert_eq!(classify(text), expected);
    }

    #[rstest]
    #[case("WHERE ", WhereKey)]
    #[case("WHERE InstanceId ", WhereComparisonOperator)]
    #[case("WHERE InstanceId = ", WhereValue)]
    #[case("WHERE InstanceId != ", WhereValue)]
    #[case("WHERE InstanceId = 'i-1' ", AfterWhereValue)]
    #[case("WHERE InstanceId = 'i-1' AND ", WhereKey)]
    #[case("WHERE InstanceId = 'i-1' or ", WhereKey)]
    #[case("GROUP BY ", AfterGroupByKeywords)]
    #[case("GROUP BY InstanceId, ", AfterGroupByKeywords)]
    #[case("GROUP BY InstanceId ", AfterGroupBy)]
    #[case("ORDER BY ", AfterOrderByKeywords)]
    #[case("ORDER BY MAX() ", AfterOrderByFunction)]
    #[case("ORDER BY MAX() DESC ", AfterOrderByDirection)]
    #[case("ORDER BY MAX() DESC LIMIT ", AfterLimitKeyword)]
    #[case("LIMIT 10 ", Unknown)]
    fn clause_positions(#[case] tail: &str, #[case] expected: StatementPosition) {
        assert_eq!(classify(&format!("{FROM_EC2}{tail}")), expected);
    }

    #[test]
    fn classification_is_deterministic() {
        let text = format!("{FROM_EC2}WHERE InstanceId = ");
        let chain = TokenChain::build(Sql.tokenizer(), &text, end_of(&text));
        assert_eq!(statement_position(chain.current()), statement_position(chain.current()));
    }

    #[test]
    fn multi_line_queries_link_across_lines() {
        assert_eq!(classify("SELECT AVG(CPUUtilization)\nFROM\n"), AfterFromKeyword);
    }
}
