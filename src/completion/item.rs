use crate::*;

/// Icon / category the editor shows next to a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CompletionItemKind {
    Keyword,
    Function,
    Method,
    Field,
    Module,
    Value,
    Operator,
    Variable,
    Snippet,
    Constant,
    Text,
}

/// Sort tier. Editors order by `sort_text` lexically, so the rendered strings
/// are spaced out to leave room for finer tiers later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum CompletionItemPriority {
    #[display("a")]
    High,
    #[display("d")]
    MediumHigh,
    #[display("g")]
    Medium,
    #[display("k")]
    MediumLow,
    #[display("q")]
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertTextRule {
    /// `insert_text` contains snippet placeholders (`$0`, `${1:..}`).
    InsertAsSnippet,
}

/// Editor action to run after a completion is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum EditorCommand {
    /// Re-open the suggestion list right away.
    #[display("editor.action.triggerSuggest")]
    TriggerSuggest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    pub label: String,
    pub insert_text: String,
    pub kind: CompletionItemKind,
    /// Text replaced on accept. Zero width when there is nothing to replace.
    pub range: TokenRange,
    pub sort_text: CompletionItemPriority,
    pub insert_text_rules: Option<InsertTextRule>,
    pub command: Option<EditorCommand>,
}

impl CompletionItem {
    /// A plain `Text` item at medium priority inserting its own label.
    pub fn new(label: impl Into<String>, range: TokenRange) -> Self {
        let label = label.into();
        Self {
            insert_text: label.clone(),
            label,
            kind: CompletionItemKind::Text,
            range,
            sort_text: CompletionItemPriority::Medium,
            insert_text_rules: None,
            command: None,
        }
    }

    pub fn kind(mut self, kind: CompletionItemKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn priority(mut self, priority: CompletionItemPriority) -> Self {
        self.sort_text = priority;
        self
    }

    pub fn insert_text(mut self, text: impl Into<String>) -> Self {
        self.insert_text = text.into();
        self
    }

    /// Insert `snippet` with placeholders expanded.
    pub fn snippet(mut self, snippet: impl Into<String>) -> Self {
        self.insert_text = snippet.into();
        self.insert_text_rules = Some(InsertTextRule::InsertAsSnippet);
        self
    }

    /// Re-open suggestions once accepted.
    pub fn retrigger(mut self) -> Self {
        self.command = Some(EditorCommand::TriggerSuggest);
        self
    }

    pub fn is_snippet(&self) -> bool {
        self.insert_text_rules == Some(InsertTextRule::InsertAsSnippet)
    }
}
