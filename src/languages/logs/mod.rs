//! CloudWatch Logs Insights: pipe separated commands.
//!
//! `fields @timestamp, @message | filter @message like /error/ | stats count(*) by bin(5m)`
use crate::*;
use async_trait::async_trait;

crate::reexport!(vocabulary);
crate::reexport!(statement_position);
crate::reexport!(suggestion_kind);
crate::reexport!(suggestions);

pub const TOKEN_TYPES: TokenTypes = TokenTypes {
    keyword: "keyword.logs",
    identifier: "identifier.logs",
    function: "predefined.logs",
    operator: "operator.logs",
    delimiter: "delimiter.logs",
    parenthesis: "delimiter.parenthesis.logs",
    number: "number.logs",
    string: "string.logs",
    double_quoted_string: "string.double.logs",
    type_: "type.logs",
    variable: "variable.logs",
    whitespace: "white.logs",
    comment: "comment.logs",
    regexp: "regexp.logs",
};

#[derive(Debug, Clone, Copy, Default)]
pub struct LogsDialect;

impl Dialect for LogsDialect {
    fn word(&self, word: &str) -> TokenType {
        if contains(&COMMANDS, word) || contains(&KEYWORDS, word) {
            TokenType::Keyword
        } else if contains(&BOOLEAN_OPERATORS, word) {
            TokenType::Operator
        } else if contains(&AGGREGATION_FUNCTIONS, word) || functions().any(|f| f.eq_ignore_ascii_case(word)) {
            TokenType::Function
        } else {
            TokenType::Identifier
        }
    }

    fn line_comment(&self) -> Option<&'static str> {
        Some("#")
    }

    fn is_delimiter(&self, c: char) -> bool {
        c == ',' || c == '|'
    }

    /// System fields start with `@`.
    fn is_word_start(&self, c: char) -> bool {
        c.is_alphabetic() || c == '_' || c == '@'
    }

    fn is_word_part(&self, c: char) -> bool {
        c.is_alphanumeric() || matches!(c, '_' | '.' | '@')
    }

    fn regex_literals(&self) -> bool {
        true
    }

    fn backtick(&self) -> Option<TokenType> {
        Some(TokenType::Identifier)
    }
}

static TOKENIZER: Scanner<LogsDialect> = Scanner::new(LogsDialect);

#[derive(Debug, Clone, Copy, Default)]
pub struct Logs;

#[async_trait]
impl Language for Logs {
    type StatementPosition = StatementPosition;
    type SuggestionKind = SuggestionKind;

    const ID: &'static str = "cloudwatch-logs";

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

#[cfg(test)]
mod tests {
    use super::*;
    use TokenType::*;

    fn kinds(text: &str) -> Vec<TokenType> {
        Logs.tokenizer().tokenize(text)[0].iter().map(|t| t.kind).collect()
    }

    #[test]
    fn pipes_delimit_and_system_fields_are_words() {
        assert_eq!(
            kinds("fields @message | sort"),
            vec![Keyword, Whitespace, Identifier, Whitespace, Delimiter, Whitespace, Keyword]
        );
    }

    #[test]
    fn regex_after_like_and_comment_to_line_end() {
        assert_eq!(kinds("like /err|warn/"), vec![Keyword, Whitespace, Regexp]);
        assert_eq!(kinds("# stats count(*)"), vec![Comment]);
    }

    #[test]
    fn boolean_words_are_operators_and_functions_ignore_case() {
        assert_eq!(kinds("not strlen"), vec![Operator, Whitespace, Function]);
        assert_eq!(kinds("COUNT"), vec![Function]);
    }
}
