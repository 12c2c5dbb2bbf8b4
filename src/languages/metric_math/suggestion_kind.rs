use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SuggestionKind {
    FunctionsWithArguments,
    KeywordArguments,
    Statistic,
    Period,
}

pub fn suggestion_kinds(position: StatementPosition) -> Vec<SuggestionKind> {
    use StatementPosition as P;
    use SuggestionKind::*;

    match position {
        P::PredefinedFunction => vec![FunctionsWithArguments],
        P::PredefinedFuncSecondArg => vec![KeywordArguments, FunctionsWithArguments],
        P::SearchFuncSecondArg => vec![Statistic],
        P::SearchFuncThirdArg => vec![Period],
        P::WithinString | P::Unknown => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use SuggestionKind::*;

    #[rstest]
    #[case(StatementPosition::PredefinedFunction, vec![FunctionsWithArguments])]
    #[case(StatementPosition::PredefinedFuncSecondArg, vec![KeywordArguments, FunctionsWithArguments])]
    #[case(StatementPosition::SearchFuncSecondArg, vec![Statistic])]
    #[case(StatementPosition::SearchFuncThirdArg, vec![Period])]
    #[case(StatementPosition::WithinString, vec![])]
    fn positions_map_to_ordered_kinds(#[case] position: StatementPosition, #[case] expected: Vec<SuggestionKind>) {
        assert_eq!(suggestion_kinds(position), expected);
    }
}
