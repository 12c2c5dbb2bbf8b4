use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SuggestionKind {
    SelectKeyword,
    FunctionsWithArguments,
    FunctionsWithoutArguments,
    Metrics,
    FromKeyword,
    SchemaKeyword,
    Namespaces,
    LabelKeys,
    WhereKeyword,
    ComparisonOperators,
    LabelValues,
    LogicalOperators,
    GroupByKeywords,
    OrderByKeywords,
    LimitKeyword,
    SortOrderDirectionKeyword,
}

/// Positions expecting free input (the closing parenthesis after a metric,
/// a number after LIMIT) offer nothing.
pub fn suggestion_kinds(position: StatementPosition) -> Vec<SuggestionKind> {
    use StatementPosition as P;
    use SuggestionKind::*;

    match position {
        P::SelectKeyword => vec![SelectKeyword],
        P::AfterSelectKeyword => vec![FunctionsWithArguments, FunctionsWithoutArguments],
        P::AfterSelectFuncFirstArgument => vec![Metrics],
        P::FromKeyword => vec![FromKeyword],
        P::AfterFromKeyword => vec![Namespaces, SchemaKeyword],
        P::SchemaFuncFirstArgument => vec![Namespaces],
        P::SchemaFuncExtraArgument => vec![LabelKeys],
        P::AfterFrom => vec![WhereKeyword, GroupByKeywords, OrderByKeywords, LimitKeyword],
        P::WhereKey => vec![LabelKeys],
        P::WhereComparisonOperator => vec![ComparisonOperators],
        P::WhereValue => vec![LabelValues],
        P::AfterWhereValue => vec![LogicalOperators, GroupByKeywords, OrderByKeywords, LimitKeyword],
        P::AfterGroupByKeywords => vec![LabelKeys],
        P::AfterGroupBy => vec![OrderByKeywords, LimitKeyword],
        P::AfterOrderByKeywords => vec![FunctionsWithoutArguments],
        P::AfterOrderByFunction => vec![SortOrderDirectionKeyword, LimitKeyword],
        P::AfterOrderByDirection => vec![LimitKeyword],
        P::AfterSelectArgs | P::AfterLimitKeyword | P::Unknown => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use SuggestionKind::*;

    #[rstest]
    #[case(StatementPosition::SelectKeyword, vec![SelectKeyword])]
    #[case(StatementPosition::AfterSelectKeyword, vec![FunctionsWithArguments, FunctionsWithoutArguments])]
    #[case(StatementPosition::AfterSelectFuncFirstArgument, vec![Metrics])]
    #[case(StatementPosition::AfterFromKeyword, vec![Namespaces, SchemaKeyword])]
    #[case(StatementPosition::AfterWhereValue, vec![LogicalOperators, GroupByKeywords, OrderByKeywords, LimitKeyword])]
    #[case(StatementPosition::Unknown, vec![])]
    fn positions_map_to_ordered_kinds(#[case] position: StatementPosition, #[case] expected: Vec<SuggestionKind>) {
        assert_eq!(suggestion_kinds(position), expected);
    }
}
