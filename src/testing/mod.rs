#![cfg(test)]
crate::reexport!(context);
use crate::*;
pub use rstest::*;

pub(in crate::testing) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer()
            .init();
    });
}

/// Cursor position right after the last character of `text`.
pub fn end_of(text: &str) -> Position {
    let lines = split_lines(text);
    let last = lines.last().copied().unwrap_or_default();
    Position::new(lines.len(), utf16_len(last) + 1)
}

mod fixture_tests {
    use super::*;

    #[test]
    fn end_of_counts_lines_and_utf16_columns() {
        assert_eq!(end_of(""), Position::new(1, 1));
        assert_eq!(end_of("SELECT "), Position::new(1, 8));
        assert_eq!(end_of("a\nbc"), Position::new(2, 3));
        assert_eq!(end_of("a\n"), Position::new(2, 1));
        assert_eq!(end_of("'😀'"), Position::new(1, 5));
    }

    #[test_context(SeededCatalog)]
    #[tokio::test]
    async fn seeded_catalog_lists_namespaces(ctx: &mut SeededCatalog) -> Result {
        let namespaces: Vec<_> = ctx
            .catalog
            .get_namespaces()
            .await?
            .into_iter()
            .map(|v| v.value)
            .collect();
        assert_eq!(namespaces, vec!["AWS/EC2", "AWS/Lambda"]);
        Ok(())
    }

    #[test_context(SeededCatalog)]
    #[tokio::test]
    async fn failing_resources_fail_every_lookup(ctx: &mut SeededCatalog) {
        let failing = FailingResources;
        assert!(failing.get_namespaces().await.is_err());
        assert!(failing.get_all_metrics(&ctx.region).await.is_err());
    }
}
