use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SuggestionKind {
    InsertPattern,
}

pub fn suggestion_kinds(position: StatementPosition) -> Vec<SuggestionKind> {
    match position {
        StatementPosition::AnyPosition => vec![SuggestionKind::InsertPattern],
        StatementPosition::Unknown => vec![],
    }
}
