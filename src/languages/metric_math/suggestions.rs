use super::*;
use CompletionItemKind as Kind;
use CompletionItemPriority as Priority;

pub fn suggest(kind: SuggestionKind, items: &mut CompletionItems) {
    match kind {
        SuggestionKind::FunctionsWithArguments => {
            for function in FUNCTIONS {
                let item = items
                    .item(function)
                    .kind(Kind::Function)
                    .snippet(format!("{function}($0)"))
                    .retrigger();
                items.push(item);
            }
        }
        SuggestionKind::KeywordArguments => {
            for keyword in KEYWORD_ARGUMENTS {
                let item = items.item(keyword).kind(Kind::Keyword).priority(Priority::MediumHigh);
                items.push(item);
            }
        }
        SuggestionKind::Statistic => {
            for statistic in STATISTICS {
                let item = items
                    .item(statistic)
                    .kind(Kind::Constant)
                    .insert_text(format!("'{statistic}', "))
                    .retrigger();
                items.push(item);
            }
        }
        SuggestionKind::Period => {
            for period in PERIODS {
                let item = items.item(period.to_string()).kind(Kind::Value);
                items.push(item);
            }
        }
    }
}
