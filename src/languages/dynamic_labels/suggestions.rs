use super::*;
use CompletionItemKind as Kind;
use CompletionItemPriority as Priority;

pub fn suggest(kind: SuggestionKind, items: &mut CompletionItems) {
    match kind {
        SuggestionKind::InsertPattern => {
            for pattern in PATTERNS {
                let item = items.item(pattern).kind(Kind::Constant);
                items.push(item);
            }
            let item = items
                .item(DIMENSION_PROPERTY)
                .kind(Kind::Snippet)
                .priority(Priority::High)
                .snippet(DIMENSION_PROPERTY_SNIPPET);
            items.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_plus_one_high_priority_dimension_property() {
        let mut items = CompletionItems::new(None, Position::new(1, 1));
        suggest(SuggestionKind::InsertPattern, &mut items);
        let items = items.into_vec();
        assert_eq!(items.len(), PATTERNS.len() + 1);
        let high: Vec<_> = items.iter().filter(|i| i.sort_text == Priority::High).collect();
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].label, DIMENSION_PROPERTY);
        assert!(high[0].is_snippet());
    }
}
