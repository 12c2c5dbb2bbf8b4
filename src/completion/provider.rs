use crate::*;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// Completion items tagged with the generation of the request that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagged {
    pub generation: u64,
    pub items: Vec<CompletionItem>,
}

/// Runs the completion pipeline for one language:
/// tokenize -> link -> classify -> map to kinds -> generate.
///
/// Stateless between requests apart from a generation counter, which hosts
/// can use to drop responses superseded by a later trigger.
pub struct CompletionItemProvider<L> {
    language: L,
    resources: Arc<dyn Resources>,
    variables: Arc<dyn TemplateVariables>,
    region: String,
    generation: AtomicU64,
}

impl<L: Language> CompletionItemProvider<L> {
    pub fn new(language: L, resources: Arc<dyn Resources>, variables: Arc<dyn TemplateVariables>) -> Self {
        Self {
            language,
            resources,
            variables,
            region: config().region.clone(),
            generation: AtomicU64::new(0),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn language(&self) -> &L {
        &self.language
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn statement_position(&self, text: &str, position: Position) -> L::StatementPosition {
        let chain = TokenChain::build(self.language.tokenizer(), text, position);
        self.language.classify(chain.current())
    }

    pub fn suggestion_kinds(&self, text: &str, position: Position) -> Vec<L::SuggestionKind> {
        self.language.kinds(self.statement_position(text, position))
    }

    /// Completion items for the cursor at `position` in `text`.
    ///
    /// Never fails: a suggestion kind whose generation errors (typically a
    /// catalog lookup) is logged and skipped, the other kinds still
    /// contribute. Template variables are appended once, after every kind,
    /// and only when the position offers anything at all.
    pub async fn provide(&self, text: &str, position: Position) -> Vec<CompletionItem> {
        let chain = TokenChain::build(self.language.tokenizer(), text, position);
        let current = chain.current();
        let statement_position = self.language.classify(current);
        let kinds = self.language.kinds(statement_position);
        trace!(
            language = L::ID,
            %position,
            current = ?current.map(|t| t.value()),
            %statement_position,
            ?kinds,
            "Classified cursor"
        );

        let context = SuggestionContext {
            current,
            position,
            statement_position,
            resources: self.resources.as_ref(),
            region: &self.region,
        };
        let mut items = CompletionItems::new(current, position);
        if kinds.is_empty() {
            return items.into_vec();
        }
        for kind in kinds {
            if let Err(err) = self.language.suggest(kind, &context, &mut items).await {
                warn!(language = L::ID, %kind, "Skipping suggestions: {err}");
            }
        }
        items.append_template_variables(self.variables.as_ref());
        debug!(language = L::ID, %statement_position, count = items.len(), "Generated completion items");
        items.into_vec()
    }

    /// [`Self::provide`], tagged with a fresh generation number.
    pub async fn provide_tagged(&self, text: &str, position: Position) -> Tagged {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let items = self.provide(text, position).await;
        Tagged { generation, items }
    }

    /// True if no request was issued after the one tagged `generation`.
    pub fn is_latest(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}
