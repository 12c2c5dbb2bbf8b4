use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SuggestionKind {
    Command,
    Function,
    AggregationFunction,
    InKeyword,
    LikeKeyword,
    AsKeyword,
    ByKeyword,
    SortOrderDirectionKeyword,
    ComparisonOperator,
    BooleanOperator,
    NotKeyword,
}

/// Positions expecting a field name or a literal offer nothing: there is no
/// field catalog to draw from.
pub fn suggestion_kinds(position: StatementPosition) -> Vec<SuggestionKind> {
    use StatementPosition as P;
    use SuggestionKind::*;

    match position {
        P::NewCommand => vec![Command],
        P::AfterDisplayKeyword | P::AfterFieldsKeyword => vec![Function],
        P::AfterFilterKeyword => vec![Function, NotKeyword],
        P::AfterStatsKeyword => vec![AggregationFunction],
        P::AfterStatsBy => vec![Function],
        P::AfterFunction => vec![AsKeyword, ByKeyword],
        P::AfterCommandArg => vec![AsKeyword],
        P::AfterFilterArg => vec![ComparisonOperator, InKeyword, LikeKeyword, BooleanOperator],
        P::FunctionArg | P::ArithmeticOperatorArg | P::ComparisonOperatorArg => vec![Function],
        P::BooleanOperatorArg => vec![Function, NotKeyword],
        P::AfterSortField => vec![SortOrderDirectionKeyword],
        P::AfterDedupKeyword
        | P::AfterParseKeyword
        | P::AfterSortKeyword
        | P::AfterLimitKeyword
        | P::Comment
        | P::Unknown => vec![],
    }
}
