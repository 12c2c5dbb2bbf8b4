use crate::*;
use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// What a suggestion generator gets to look at. `P` is the language's
/// statement position, already classified by the provider.
pub struct SuggestionContext<'a, P> {
    /// Token under the cursor, if any.
    pub current: Option<LinkedToken<'a>>,
    pub position: Position,
    pub statement_position: P,
    pub resources: &'a dyn Resources,
    /// Region for region-scoped catalog lookups.
    pub region: &'a str,
}

/// A query language, expressed as a policy value the shared
/// [`CompletionItemProvider`] is generic over.
///
/// `classify` and `kinds` are pure and total; only `suggest` may await (it is
/// the one phase allowed to hit the catalog).
#[async_trait]
pub trait Language: Send + Sync + 'static {
    /// Grammar location of the cursor.
    type StatementPosition: Copy + Debug + Display + PartialEq + Send + Sync;
    /// Category of completion to generate.
    type SuggestionKind: Copy + Debug + Display + PartialEq + Send + Sync;

    /// Language id the editor registers (`cloudwatch-sql`, ...).
    const ID: &'static str;

    fn token_types(&self) -> &'static TokenTypes;

    fn tokenizer(&self) -> &dyn Tokenizer;

    fn classify(&self, current: Option<LinkedToken<'_>>) -> Self::StatementPosition;

    /// Ordered; generation follows this order. Unknown positions map to nothing.
    fn kinds(&self, position: Self::StatementPosition) -> Vec<Self::SuggestionKind>;

    async fn suggest(
        &self,
        kind: Self::SuggestionKind,
        context: &SuggestionContext<'_, Self::StatementPosition>,
        items: &mut CompletionItems,
    ) -> Result;
}
