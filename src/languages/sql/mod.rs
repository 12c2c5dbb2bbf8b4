//! CloudWatch Metrics Insights SQL.
//!
//! `SELECT AVG(CPUUtilization) FROM SCHEMA("AWS/EC2", InstanceId)
//!  WHERE InstanceId = 'i-1' GROUP BY InstanceId ORDER BY AVG() DESC LIMIT 10`
use crate::{languages::unquote, *};
use async_trait::async_trait;

crate::reexport!(vocabulary);
crate::reexport!(statement_position);
crate::reexport!(suggestion_kind);
crate::reexport!(token_utils);
crate::reexport!(suggestions);

pub const TOKEN_TYPES: TokenTypes = TokenTypes {
    keyword: "keyword.sql",
    identifier: "identifier.sql",
    function: "predefined.sql",
    operator: "operator.sql",
    delimiter: "delimiter.sql",
    parenthesis: "delimiter.parenthesis.sql",
    number: "number.sql",
    string: "string.sql",
    double_quoted_string: "string.double.sql",
    type_: "type.sql",
    variable: "variable.sql",
    whitespace: "white.sql",
    comment: "comment.sql",
    regexp: "regexp.sql",
};

#[derive(Debug, Clone, Copy, Default)]
pub struct SqlDialect;

impl Dialect for SqlDialect {
    fn word(&self, word: &str) -> TokenType {
        if KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(word)) {
            TokenType::Keyword
        } else if STATISTICS.iter().any(|s| s.eq_ignore_ascii_case(word)) {
            TokenType::Function
        } else if LOGICAL_OPERATORS.iter().any(|o| o.eq_ignore_ascii_case(word)) {
            TokenType::Operator
        } else {
            TokenType::Identifier
        }
    }

    fn line_comment(&self) -> Option<&'static str> {
        Some("--")
    }
}

static TOKENIZER: Scanner<SqlDialect> = Scanner::new(SqlDialect);

#[derive(Debug, Clone, Copy, Default)]
pub struct Sql;

#[async_trait]
impl Language for Sql {
    type StatementPosition = StatementPosition;
    type SuggestionKind = SuggestionKind;

    const ID: &'static str = "cloudwatch-sql";

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
        context: &SuggestionContext<'_, StatementPosition>,
        items: &mut CompletionItems,
    ) -> Result {
        suggest(kind, context, items).await
    }
}
