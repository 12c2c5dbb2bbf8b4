use crate::*;
use async_trait::async_trait;
use std::{
    collections::BTreeMap,
    sync::{Arc, LazyLock},
};
use tokio::sync::RwLock;

/// Characters that make the editor re-run completion.
pub const TRIGGER_CHARACTERS: [char; 6] = [' ', '$', ',', '(', '\'', '"'];

/// A provider with its language type erased, as stored by the registry.
#[async_trait]
pub trait LanguageCompletion: Send + Sync {
    fn id(&self) -> &'static str;

    fn token_types(&self) -> &'static TokenTypes;

    async fn complete(&self, text: &str, position: Position) -> Vec<CompletionItem>;

    /// Rendered statement position, for diagnostics.
    fn describe_position(&self, text: &str, position: Position) -> String;
}

#[async_trait]
impl<L: Language> LanguageCompletion for CompletionItemProvider<L> {
    fn id(&self) -> &'static str {
        L::ID
    }

    fn token_types(&self) -> &'static TokenTypes {
        self.language().token_types()
    }

    async fn complete(&self, text: &str, position: Position) -> Vec<CompletionItem> {
        self.provide(text, position).await
    }

    fn describe_position(&self, text: &str, position: Position) -> String {
        self.statement_position(text, position).to_string()
    }
}

#[derive(Clone)]
pub struct RegisteredLanguage {
    pub trigger_characters: &'static [char],
    pub provider: Arc<dyn LanguageCompletion>,
}

/// Language id -> provider. Registration happens once per id; later
/// registrations of the same id are ignored.
#[derive(Default)]
pub struct LanguageRegistry {
    languages: RwLock<BTreeMap<&'static str, RegisteredLanguage>>,
}

static REGISTRY: LazyLock<LanguageRegistry> = LazyLock::new(LanguageRegistry::new);

/// The process-wide registry.
pub fn registry() -> &'static LanguageRegistry {
    &REGISTRY
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` (and keeps the existing entry) if `L::ID` is already registered.
    pub async fn register<L: Language>(&self, provider: CompletionItemProvider<L>) -> bool {
        let mut languages = self.languages.write().await;
        if languages.contains_key(L::ID) {
            debug!(language = L::ID, "Language already registered");
            return false;
        }
        languages.insert(
            L::ID,
            RegisteredLanguage {
                trigger_characters: &TRIGGER_CHARACTERS,
                provider: Arc::new(provider),
            },
        );
        info!(language = L::ID, "Registered language");
        true
    }

    /// Register all four languages over one catalog and variable store.
    /// Returns how many were newly registered.
    pub async fn register_defaults(
        &self,
        resources: Arc<dyn Resources>,
        variables: Arc<dyn TemplateVariables>,
    ) -> usize {
        let mut added = 0;
        added += self
            .register(CompletionItemProvider::new(Sql, resources.clone(), variables.clone()))
            .await as usize;
        added += self
            .register(CompletionItemProvider::new(Logs, resources.clone(), variables.clone()))
            .await as usize;
        added += self
            .register(CompletionItemProvider::new(MetricMath, resources.clone(), variables.clone()))
            .await as usize;
        added += self
            .register(CompletionItemProvider::new(DynamicLabels, resources, variables))
            .await as usize;
        added
    }

    pub async fn is_registered(&self, id: &str) -> bool {
        self.languages.read().await.contains_key(id)
    }

    pub async fn ids(&self) -> Vec<&'static str> {
        self.languages.read().await.keys().copied().collect()
    }

    pub async fn get(&self, id: &str) -> Result<RegisteredLanguage> {
        self.languages
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| Error::UnknownLanguage(id.to_string()))
    }

    pub async fn complete(&self, id: &str, text: &str, position: Position) -> Result<Vec<CompletionItem>> {
        let language = self.get(id).await?;
        Ok(language.provider.complete(text, position).await)
    }
}
