use crate::*;

/// Per-request accumulator of completion items.
///
/// The replacement range is fixed at construction: the current token's range,
/// or a zero-width range at the cursor when the current token is missing,
/// whitespace or a parenthesis (nothing to replace).
#[derive(Debug, Clone)]
pub struct CompletionItems {
    range: TokenRange,
    items: Vec<CompletionItem>,
    variables_appended: bool,
}

impl CompletionItems {
    pub fn new(current: Option<LinkedToken<'_>>, position: Position) -> Self {
        let range = match current {
            Some(token) if !token.is_whitespace() && !token.is_parenthesis() => token.range(),
            _ => TokenRange::empty_at(position),
        };
        Self {
            range,
            items: Vec::new(),
            variables_appended: false,
        }
    }

    pub fn range(&self) -> TokenRange {
        self.range
    }

    /// A fresh item over this request's range, not yet added.
    pub fn item(&self, label: impl Into<String>) -> CompletionItem {
        CompletionItem::new(label, self.range)
    }

    pub fn push(&mut self, item: CompletionItem) {
        self.items.push(item);
    }

    pub fn add(&mut self, label: impl Into<String>, kind: CompletionItemKind, priority: CompletionItemPriority) {
        let item = self.item(label).kind(kind).priority(priority);
        self.push(item);
    }

    /// One `$name` item per template variable, lowest tier. Only the first
    /// call per request has an effect.
    pub fn append_template_variables(&mut self, variables: &dyn TemplateVariables) {
        if self.variables_appended {
            return;
        }
        self.variables_appended = true;
        for name in variables.variables() {
            self.add(format!("${name}"), CompletionItemKind::Variable, CompletionItemPriority::Low);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompletionItem> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<CompletionItem> {
        self.items
    }
}
