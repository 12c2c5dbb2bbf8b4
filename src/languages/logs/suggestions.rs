use super::*;
use CompletionItemKind as Kind;
use CompletionItemPriority as Priority;

/// Logs Insights vocabulary is static; nothing here touches the catalog.
pub fn suggest(kind: SuggestionKind, items: &mut CompletionItems) {
    use SuggestionKind::*;

    match kind {
        Command => {
            for command in COMMANDS {
                let item = items
                    .item(command)
                    .kind(Kind::Method)
                    .priority(Priority::High)
                    .insert_text(format!("{command} "))
                    .retrigger();
                items.push(item);
            }
        }
        Function => {
            for function in functions() {
                call(items, function, Priority::Medium);
            }
        }
        AggregationFunction => {
            for function in AGGREGATION_FUNCTIONS {
                call(items, function, Priority::MediumHigh);
            }
        }
        InKeyword => keyword(items, IN, Priority::MediumHigh),
        LikeKeyword => keyword(items, LIKE, Priority::MediumHigh),
        AsKeyword => keyword(items, AS, Priority::MediumHigh),
        ByKeyword => keyword(items, BY, Priority::MediumHigh),
        NotKeyword => keyword(items, NOT, Priority::MediumLow),
        SortOrderDirectionKeyword => {
            for direction in SORT_DIRECTIONS {
                keyword(items, direction, Priority::MediumHigh);
            }
        }
        ComparisonOperator => {
            for operator in COMPARISON_OPERATORS {
                operator_item(items, operator);
            }
        }
        BooleanOperator => {
            for operator in [AND, OR] {
                operator_item(items, operator);
            }
        }
    }
}

fn call(items: &mut CompletionItems, function: &str, priority: Priority) {
    let item = items
        .item(function)
        .kind(Kind::Function)
        .priority(priority)
        .snippet(format!("{function}($0)"))
        .retrigger();
    items.push(item);
}

fn keyword(items: &mut CompletionItems, keyword: &str, priority: Priority) {
    let item = items
        .item(keyword)
        .kind(Kind::Keyword)
        .priority(priority)
        .insert_text(format!("{keyword} "))
        .retrigger();
    items.push(item);
}

fn operator_item(items: &mut CompletionItems, operator: &str) {
    let item = items
        .item(operator)
        .kind(Kind::Operator)
        .insert_text(format!("{operator} "))
        .retrigger();
    items.push(item);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(kind: SuggestionKind) -> Vec<CompletionItem> {
        let mut items = CompletionItems::new(None, Position::new(1, 1));
        suggest(kind, &mut items);
        items.into_vec()
    }

    #[test]
    fn every_command_is_offered() {
        let labels: Vec<_> = generate(SuggestionKind::Command).into_iter().map(|i| i.label).collect();
        assert_eq!(labels, COMMANDS);
    }

    #[test]
    fn functions_exclude_aggregations() {
        let items = generate(SuggestionKind::Function);
        assert!(items.iter().any(|i| i.label == "strlen" && i.insert_text == "strlen($0)"));
        assert!(!items.iter().any(|i| i.label == "count"));
        let aggregations = generate(SuggestionKind::AggregationFunction);
        assert_eq!(aggregations.len(), AGGREGATION_FUNCTIONS.len());
    }

    #[test]
    fn boolean_operators_leave_not_to_its_own_kind() {
        let labels: Vec<_> = generate(SuggestionKind::BooleanOperator).into_iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["and", "or"]);
    }
}
