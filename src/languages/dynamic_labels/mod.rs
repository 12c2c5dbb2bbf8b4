//! Dynamic label templates: `${LABEL} on ${PROP('Dim.InstanceId')}`.
use crate::*;
use async_trait::async_trait;

crate::reexport!(vocabulary);
crate::reexport!(scanner);
crate::reexport!(statement_position);
crate::reexport!(suggestion_kind);
crate::reexport!(suggestions);

pub const TOKEN_TYPES: TokenTypes = TokenTypes {
    keyword: "keyword.dynamicLabels",
    identifier: "identifier.dynamicLabels",
    function: "predefined.dynamicLabels",
    operator: "operator.dynamicLabels",
    delimiter: "delimiter.dynamicLabels",
    parenthesis: "delimiter.parenthesis.dynamicLabels",
    number: "number.dynamicLabels",
    string: "string.dynamicLabels",
    double_quoted_string: "string.double.dynamicLabels",
    type_: "type.dynamicLabels",
    variable: "variable.dynamicLabels",
    whitespace: "white.dynamicLabels",
    comment: "comment.dynamicLabels",
    regexp: "regexp.dynamicLabels",
};

#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicLabels;

#[async_trait]
impl Language for DynamicLabels {
    type StatementPosition = StatementPosition;
    type SuggestionKind = SuggestionKind;

    const ID: &'static str = "cloudwatch-dynamicLabels";

    fn token_types(&self) -> &'static TokenTypes {
        &TOKEN_TYPES
    }

    fn tokenizer(&self) -> &dyn Tokenizer {
        &LabelScanner
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
