//! CloudWatch metric math expressions.
//!
//! `FILL(m1, REPEAT)`, `SEARCH('{AWS/EC2,InstanceId} CPUUtilization', 'Average', 300)`
use crate::*;
use async_trait::async_trait;

crate::reexport!(vocabulary);
crate::reexport!(statement_position);
crate::reexport!(suggestion_kind);
crate::reexport!(suggestions);

pub const TOKEN_TYPES: TokenTypes = TokenTypes {
    keyword: "keyword.MetricMath",
    identifier: "identifier.MetricMath",
    function: "predefined.MetricMath",
    operator: "operator.MetricMath",
    delimiter: "delimiter.MetricMath",
    parenthesis: "delimiter.parenthesis.MetricMath",
    number: "number.MetricMath",
    string: "string.MetricMath",
    double_quoted_string: "string.double.MetricMath",
    type_: "type.MetricMath",
    variable: "variable.MetricMath",
    whitespace: "white.MetricMath",
    comment: "comment.MetricMath",
    regexp: "regexp.MetricMath",
};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricMathDialect;

impl Dialect for MetricMathDialect {
    fn word(&self, word: &str) -> TokenType {
        if FUNCTIONS.iter().any(|f| f.eq_ignore_ascii_case(word)) {
            TokenType::Function
        } else if KEYWORD_ARGUMENTS.iter().any(|k| k.eq_ignore_ascii_case(word)) {
            TokenType::Keyword
        } else {
            TokenType::Identifier
        }
    }
}

static TOKENIZER: Scanner<MetricMathDialect> = Scanner::new(MetricMathDialect);

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricMath;

#[async_trait]
impl Language for MetricMath {
    type StatementPosition = StatementPosition;
    type SuggestionKind = SuggestionKind;

    const ID: &'static str = "cloudwatch-MetricMath";

    fn token_types(&self) -> &'static TokenTypes {
        &TOKEN_TYPES
    }

    fn tokenizer(&self) -> &dyn Tokenizer {
        &TOKENIZER
    }

    fn classify(&self, current: Option<LinkedToken<'_>>) -> StatementPosition {
        statement_position(current)
    }

    fn kinds(&self, position: StatementPosition) -> Vec<SuggestionKind> {
        suggestion_kinds(position)
    }

    async fn suggest(
        &self,
        kind: SuggestionKind,
        _context: &SuggestionContext<'_, StatementPosition>,
        items: &mut CompletionItems,
    ) -> Result {
        suggest(kind, items);
        Ok(())
    }
}
