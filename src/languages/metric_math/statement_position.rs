use super::*;
use TokenType::{Delimiter, Parenthesis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum StatementPosition {
    #[default]
    Unknown,
    PredefinedFunction,
    SearchFuncSecondArg,
    SearchFuncThirdArg,
    PredefinedFuncSecondArg,
    WithinString,
}

/// The innermost unclosed call around `token`: its `(` and the number of
/// top-level `,` between that `(` and `token`.
fn enclosing_call<'a>(token: LinkedToken<'a>) -> Option<(LinkedToken<'a>, usize)> {
    let mut depth = 0usize;
    let mut commas = 0;
    for t in token.walk_back() {
        if t.is(Parenthesis, Some(")")) {
            depth += 1;
        } else if t.is(Parenthesis, Some("(")) {
            if depth == 0 {
                return Some((t, commas));
            }
            depth -= 1;
        } else if depth == 0 && t.is(Delimiter, Some(",")) {
            commas += 1;
        }
    }
    None
}

pub fn statement_position(current: Option<LinkedToken<'_>>) -> StatementPosition {
    use StatementPosition::*;

    let Some(current) = current else {
        return PredefinedFunction;
    };
    if current.is_string() {
        return WithinString;
    }

    let previous = current.get_previous_non_whitespace_token();
    let after_comma = current.is(Delimiter, Some(",")) || previous.is_some_and(|t| t.is(Delimiter, Some(",")));

    if after_comma && let Some((open, commas)) = enclosing_call(current) {
        // A `,` under the cursor is not yet behind it.
        let commas = commas + usize::from(current.is(Delimiter, Some(",")));
        let head = open.get_previous_non_whitespace_token().filter(|t| t.is_function());
        match head {
            Some(head) if head.has_value(SEARCH) => {
                return match commas {
                    1 => SearchFuncSecondArg,
                    2 => SearchFuncThirdArg,
                    _ => Unknown,
                };
            }
            Some(_) => return PredefinedFuncSecondArg,
            None => {}
        }
    }

    PredefinedFunction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::end_of;
    use rstest::rstest;
    use StatementPosition::*;

    fn classify(text: &str) -> StatementPosition {
        let chain = TokenChain::build(MetricMath.tokenizer(), text, end_of(text));
        statement_position(chain.current())
    }

    #[rstest]
    #[case("", PredefinedFunction)]
    #[case("AB", PredefinedFunction)]
    #[case("m1 + ", PredefinedFunction)]
    #[case("ABS(", PredefinedFunction)]
    #[case("FILL(m1, ", PredefinedFuncSecondArg)]
    #[case("FILL(m1,", PredefinedFuncSecondArg)]
    #[case("SEARCH('{AWS/EC2} CPUUtilization', ", SearchFuncSecondArg)]
    #[case("SEARCH('{AWS/EC2} CPUUtilization', 'Average', ", SearchFuncThirdArg)]
    #[case("SEARCH('{AWS/EC2} CPUUtilization', 'Average', 300, ", Unknown)]
    #[case("SEARCH('{AWS/EC2} MetricName=\"CPU", WithinString)]
    #[case("SUM(SEARCH('{AWS/EC2} x', 'Sum', 300)) + FILL(m1, ", PredefinedFuncSecondArg)]
    #[case("SEARCH('{AWS/EC2} x', FILL(m1, ", PredefinedFuncSecondArg)]
    fn positions(#[case] text: &str, #[case] expected: StatementPosition) {
        assert_eq!(classify(text), expected);
    }
}
