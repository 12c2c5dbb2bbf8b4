//! The four query languages of the console.
//!
//! Each language is a unit struct implementing [`crate::Language`] plus a
//! module holding its vocabulary, tokenizer dialect, statement-position
//! classifier, suggestion-kind mapping and generator. Only the structs are
//! lifted to the crate root; the per-language enums share names
//! (`StatementPosition`, `SuggestionKind`) and stay behind their module path.
pub mod dynamic_labels;
pub mod logs;
pub mod metric_math;
pub mod sql;

pub use dynamic_labels::DynamicLabels;
pub use logs::Logs;
pub use metric_math::MetricMath;
pub use sql::Sql;

/// Strip one pair of surrounding double quotes, if present.
pub(crate) fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
