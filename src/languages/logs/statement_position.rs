use super::*;
use TokenType::{Delimiter, Parenthesis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum StatementPosition {
    #[default]
    Unknown,
    Comment,
    NewCommand,
    AfterDedupKeyword,
    AfterDisplayKeyword,
    AfterFieldsKeyword,
    AfterFilterKeyword,
    AfterParseKeyword,
    AfterSortKeyword,
    AfterStatsKeyword,
    AfterLimitKeyword,
    /// After an operand of `fields`, `display` or `parse`.
    AfterCommandArg,
    /// After an operand of `filter`.
    AfterFilterArg,
    AfterStatsBy,
    /// After a closed aggregation call in `stats`.
    AfterFunction,
    FunctionArg,
    ArithmeticOperatorArg,
    ComparisonOperatorArg,
    BooleanOperatorArg,
    AfterSortField,
}

fn is_pipe(token: &LinkedToken<'_>) -> bool {
    token.is(Delimiter, Some("|"))
}

/// Tokens before `token` within the same command (up to the previous `|`).
fn within_command<'a>(token: LinkedToken<'a>) -> impl Iterator<Item = LinkedToken<'a>> {
    token.walk_back().take_while(|t| !is_pipe(t))
}

/// The command keyword governing `token`.
fn command<'a>(token: LinkedToken<'a>) -> Option<LinkedToken<'a>> {
    within_command(token).find(|t| t.is_keyword() && contains(&COMMANDS, t.value()))
}

/// Innermost `(` left open before `token`. For a `)` this is its partner.
fn open_parenthesis<'a>(token: LinkedToken<'a>) -> Option<LinkedToken<'a>> {
    let mut depth = 0usize;
    for t in within_command(token) {
        if t.is(Parenthesis, Some(")")) {
            depth += 1;
        } else if t.is(Parenthesis, Some("(")) {
            if depth == 0 {
                return Some(t);
            }
            depth -= 1;
        }
    }
    None
}

/// Position right after a command keyword, or after a `,` continuing its list.
fn after_command_keyword(command: &str) -> StatementPosition {
    use StatementPosition::*;
    match command.to_ascii_lowercase().as_str() {
        DEDUP => AfterDedupKeyword,
        DISPLAY => AfterDisplayKeyword,
        FIELDS => AfterFieldsKeyword,
        FILTER => AfterFilterKeyword,
        PARSE => AfterParseKeyword,
        SORT => AfterSortKeyword,
        STATS => AfterStatsKeyword,
        LIMIT => AfterLimitKeyword,
        _ => Unknown,
    }
}

/// Position after a complete operand (field, literal or closed call) of `command`.
fn after_operand(command: &str) -> StatementPosition {
    use StatementPosition::*;
    match command.to_ascii_lowercase().as_str() {
        FILTER => AfterFilterArg,
        SORT => AfterSortField,
        FIELDS | DISPLAY | PARSE => AfterCommandArg,
        _ => Unknown,
    }
}

pub fn statement_position(current: Option<LinkedToken<'_>>) -> StatementPosition {
    use StatementPosition::*;

    let Some(current) = current else {
        return NewCommand;
    };
    if current.is_comment() {
        return Comment;
    }
    let Some(previous) = current.get_previous_significant_token() else {
        return NewCommand;
    };
    if is_pipe(&previous) {
        return NewCommand;
    }

    let command = command(current);
    let command_name = command.map(|t| t.value()).unwrap_or_default();
    let previous_keyword = within_command(current).find(|t| t.is_keyword());
    let in_stats_by = command_name.eq_ignore_ascii_case(STATS)
        && previous_keyword.is_some_and(|t| t.has_value(BY));

    if previous.is_keyword() {
        if contains(&COMMANDS, previous.value()) {
            return after_command_keyword(previous.value());
        }
        if previous.has_value(BY) && command_name.eq_ignore_ascii_case(STATS) {
            return AfterStatsBy;
        }
        return Unknown;
    }

    if previous.is_operator() {
        let value = previous.value();
        return if contains(&BOOLEAN_OPERATORS, value) {
            BooleanOperatorArg
        } else if COMPARISON_OPERATORS.contains(&value) {
            ComparisonOperatorArg
        } else if ARITHMETIC_OPERATORS.contains(&value) {
            ArithmeticOperatorArg
        } else {
            Unknown
        };
    }

    let open = open_parenthesis(current);

    if current.is(Parenthesis, Some("("))
        || previous.is(Parenthesis, Some("("))
        || (open.is_some() && previous.is(Delimiter, Some(",")))
    {
        return FunctionArg;
    }

    if previous.is(Delimiter, Some(",")) {
        if in_stats_by {
            return AfterStatsBy;
        }
        return after_command_keyword(command_name);
    }

    if open.is_some() {
        return Unknown;
    }

    if previous.is(Parenthesis, Some(")")) {
        let head = open_parenthesis(previous).and_then(|t| t.get_previous_non_whitespace_token());
        let aggregation = head.is_some_and(|t| contains(&AGGREGATION_FUNCTIONS, t.value()));
        if command_name.eq_ignore_ascii_case(STATS) {
            return if aggregation && !in_stats_by { AfterFunction } else { Unknown };
        }
        return after_operand(command_name);
    }

    if previous.is_identifier()
        || previous.is_string()
        || previous.is_double_quoted_string()
        || previous.is_number()
        || previous.kind() == TokenType::Regexp
    {
        return after_operand(command_name);
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
        let chain = TokenChain::build(Logs.tokenizer(), text, end_of(text));
        statement_position(chain.current())
    }

    #[rstest]
    #[case("", NewCommand)]
    #[case("fie", NewCommand)]
    #[case("fields @message | ", NewCommand)]
    #[case("fields @message\n| so", NewCommand)]
    #[case("# only a note", Comment)]
    #[case("# note\nfie", NewCommand)]
    #[case("# note\n", NewCommand)]
    #[case("  fie", NewCommand)]
    #[case("dedup ", AfterDedupKeyword)]
    #[case("display ", AfterDisplayKeyword)]
    #[case("fields ", AfterFieldsKeyword)]
    #[case("fields @timestamp, ", AfterFieldsKeyword)]
    #[case("filter ", AfterFilterKeyword)]
    #[case("parse ", AfterParseKeyword)]
    #[case("sort ", AfterSortKeyword)]
    #[case("stats ", AfterStatsKeyword)]
    #[case("limit ", AfterLimitKeyword)]
    fn command_positions(#[case] text: &str, #[case] expected: StatementPosition) {
        assert_eq!(classify(text), expected);
    }

    #[rstest]
    #[case("fields @message ", AfterCommandArg)]
    #[case("fields strlen(@message) ", AfterCommandArg)]
    #[case("parse @message \"user=*\" ", AfterCommandArg)]
    #[case("filter @message ", AfterFilterArg)]
    #[case("filter @message like /error/ ", AfterFilterArg)]
    #[case("filter @duration > ", ComparisonOperatorArg)]
    #[case("filter @duration > 10 and ", BooleanOperatorArg)]
    #[case("filter not ", BooleanOperatorArg)]
    #[case("fields @duration * ", ArithmeticOperatorArg)]
    #[case("fields strlen(", FunctionArg)]
    #[case("fields concat(@a, ", FunctionArg)]
    #[case("fields concat(@a ", Unknown)]
    #[case("stats count(*) ", AfterFunction)]
    #[case("stats count(*) by ", AfterStatsBy)]
    #[case("stats count(*) by @logStream, ", AfterStatsBy)]
    #[case("stats count(*), ", AfterStatsKeyword)]
    #[case("sort @timestamp ", AfterSortField)]
    #[case("sort @timestamp desc ", Unknown)]
    fn argument_positions(#[case] text: &str, #[case] expected: StatementPosition) {
        assert_eq!(classify(text), expected);
    }

    #[test]
    fn commands_are_scoped_by_pipes() {
        assert_eq!(classify("filter @message like /x/ | fields @message "), AfterCommandArg);
        assert_eq!(classify("stats count(*) by bin(5m) | sort "), AfterSortKeyword);
    }
}
