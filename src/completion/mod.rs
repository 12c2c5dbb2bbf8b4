//! Completion model and the language-generic pipeline.
//!
//! - `item`     : `CompletionItem` and its enums (kind, priority, snippet rule, command).
//! - `items`    : `CompletionItems`, the per-request accumulator.
//! - `language` : the `Language` policy trait every query language implements.
//! - `provider` : `CompletionItemProvider<L>`, the entry point the editor calls.
//! - `registry` : `LanguageRegistry`, id -> registered provider.
crate::reexport!(item);
crate::reexport!(items);
crate::reexport!(language);
crate::reexport!(provider);
crate::reexport!(registry);
crate::reexport!(provider_tests, test);
