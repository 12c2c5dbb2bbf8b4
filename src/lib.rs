//! Context-aware autocomplete for the small query languages of a metrics and
//! logs monitoring console.
//!
//! Every completion request runs the same pipeline:
//! tokenize -> link tokens -> classify the cursor's statement position ->
//! map it to suggestion kinds -> generate completion items. Only the last
//! phase is asynchronous; it may consult the catalog ([`Resources`]).
//!
//! ```no_run
//! use qcomplete::*;
//! use std::sync::Arc;
//!
//! # async fn demo() {
//! let provider = CompletionItemProvider::new(
//!     Sql,
//!     Arc::new(Catalog::new()),
//!     Arc::new(StaticVariables::default()),
//! );
//! let items = provider.provide("SELECT ", Position::new(1, 8)).await;
//! assert!(items.iter().any(|i| i.insert_text == "AVG($0)"));
//! # }
//! ```

reexport!(testing, test);
reexport!(error);
reexport!(config);
reexport!(token);
reexport!(linked_token);
reexport!(catalog);
reexport!(completion);
reexport!(languages);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
