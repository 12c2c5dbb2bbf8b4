#![cfg(test)]
use crate::testing::end_of;
use crate::*;
use futures::future::join_all;
use rstest::rstest;
use std::sync::Arc;
use test_context::test_context;

fn labels(items: &[CompletionItem]) -> Vec<&str> {
    items.iter().map(|i| i.label.as_str()).collect()
}

fn variables(items: &[CompletionItem]) -> Vec<&CompletionItem> {
    items.iter().filter(|i| i.kind == CompletionItemKind::Variable).collect()
}

#[rstest]
#[case(Sql::ID, "SELECT")]
#[case(Logs::ID, "fields")]
#[case(MetricMath::ID, "FILL")]
#[case(DynamicLabels::ID, "${LABEL}")]
#[tokio::test]
async fn empty_document_offers_the_starting_vocabulary(#[case] id: &str, #[case] expected: &str) -> Result {
    let registry = LanguageRegistry::new();
    registry
        .register_defaults(Arc::new(Catalog::new()), Arc::new(StaticVariables::default()))
        .await;
    let items = registry.complete(id, "", Position::new(1, 1)).await?;
    assert!(labels(&items).contains(&expected), "{id}: {:?}", labels(&items));
    Ok(())
}

#[test_context(SeededCatalog)]
#[tokio::test]
async fn sql_select_offers_statistic_snippets(ctx: &mut SeededCatalog) {
    let provider = ctx.provider(Sql);
    let items = provider.provide("SELECT ", end_of("SELECT ")).await;
    let avg: Vec<_> = items.iter().filter(|i| i.insert_text == "AVG($0)").collect();
    assert_eq!(avg.len(), 1);
    assert!(avg[0].is_snippet());
    assert!(items.iter().any(|i| i.insert_text == "AVG() "));
}

#[test_context(SeededCatalog)]
#[tokio::test]
async fn sql_metrics_without_namespace_are_deduplicated(ctx: &mut SeededCatalog) {
    let provider = ctx.bare_provider(Sql);
    let text = "SELECT AVG(";
    let items = provider.provide(text, end_of(text)).await;
    let mut names = labels(&items);
    names.sort();
    assert_eq!(names, vec!["CPUUtilization", "Invocations", "NetworkIn"]);
}

#[test_context(SeededCatalog)]
#[tokio::test]
async fn sql_metrics_with_namespace_are_scoped(ctx: &mut SeededCatalog) {
    let provider = ctx.bare_provider(Sql);
    // Cursor on the `C` typed inside the parentheses.
    let text = "SELECT AVG(C) FROM \"AWS/Lambda\"";
    let items = provider.provide(text, Position::new(1, 12)).await;
    let mut names = labels(&items);
    names.sort();
    assert_eq!(names, vec!["CPUUtilization", "Invocations"]);
}

#[test_context(SeededCatalog)]
#[tokio::test]
async fn sql_where_value_lists_dimension_values(ctx: &mut SeededCatalog) {
    let provider = ctx.bare_provider(Sql);
    let text = "SELECT AVG(CPUUtilization) FROM SCHEMA(\"AWS/EC2\") WHERE InstanceType = ";
    let items = provider.provide(text, end_of(text)).await;
    let mut values = labels(&items);
    values.sort();
    assert_eq!(values, vec!["m5.large", "t3.micro"]);
    assert!(items.iter().all(|i| i.insert_text.starts_with('\'')));
}

#[test_context(SeededCatalog)]
#[tokio::test]
async fn logs_new_command_lists_every_command(ctx: &mut SeededCatalog) {
    let provider = ctx.bare_provider(Logs);
    for text in ["", "fields @message | "] {
        let items = provider.provide(text, end_of(text)).await;
        assert_eq!(labels(&items), logs::COMMANDS.to_vec(), "{text:?}");
        assert!(items.iter().all(|i| i.sort_text == CompletionItemPriority::High));
    }
}

#[test_context(SeededCatalog)]
#[tokio::test]
async fn leading_indentation_and_comments_still_start_a_statement(ctx: &mut SeededCatalog) {
    let sql_provider = ctx.bare_provider(Sql);
    for text in ["  SEL", "\n  SEL", "-- note\nSEL"] {
        assert_eq!(labels(&sql_provider.provide(text, end_of(text)).await), vec![sql::SELECT], "{text:?}");
    }
    let logs_provider = ctx.bare_provider(Logs);
    for text in ["# note\nfie", "# note\n"] {
        assert_eq!(labels(&logs_provider.provide(text, end_of(text)).await), logs::COMMANDS.to_vec(), "{text:?}");
    }
}

#[test_context(SeededCatalog)]
#[tokio::test]
async fn metric_math_search_statistic(ctx: &mut SeededCatalog) {
    let provider = ctx.bare_provider(MetricMath);
    let text = "SEARCH('{AWS/EC2} CPUUtilization', ";
    let items = provider.provide(text, end_of(text)).await;
    assert!(items.iter().any(|i| i.insert_text == "'Average', "));
}

#[test_context(SeededCatalog)]
#[tokio::test]
async fn dynamic_labels_inside_an_open_pattern_offer_nothing(ctx: &mut SeededCatalog) {
    let provider = ctx.provider(DynamicLabels);
    let text = "${PROP('";
    assert!(provider.provide(text, end_of(text)).await.is_empty());
}

#[test_context(SeededCatalog)]
#[tokio::test]
async fn dynamic_labels_after_a_pattern_offer_all_patterns(ctx: &mut SeededCatalog) {
    let provider = ctx.bare_provider(DynamicLabels);
    let text = "${LABEL} ";
    let items = provider.provide(text, end_of(text)).await;
    assert_eq!(items.len(), dynamic_labels::PATTERNS.len() + 1);
    let high: Vec<_> = items
        .iter()
        .filter(|i| i.sort_text == CompletionItemPriority::High)
        .collect();
    assert_eq!(high.len(), 1);
    assert_eq!(high[0].label, dynamic_labels::DIMENSION_PROPERTY);
}

#[test_context(SeededCatalog)]
#[tokio::test]
async fn template_variables_are_appended_once_at_low_priority(ctx: &mut SeededCatalog) {
    // Two kinds at this position; variables still show up once.
    let provider = ctx.provider(Sql);
    let items = provider.provide("SELECT ", end_of("SELECT ")).await;
    let variables = variables(&items);
    assert_eq!(
        variables.iter().map(|i| i.label.as_str()).collect::<Vec<_>>(),
        vec!["$region", "$instance"]
    );
    assert!(variables.iter().all(|i| i.sort_text == CompletionItemPriority::Low));
    assert_eq!(items.last().map(|i| i.kind), Some(CompletionItemKind::Variable));
}

#[test_context(SeededCatalog)]
#[tokio::test]
async fn positions_without_kinds_offer_no_variables(ctx: &mut SeededCatalog) {
    let provider = ctx.provider(Sql);
    let text = "SELECT AVG(CPUUtilization ";
    assert!(provider.suggestion_kinds(text, end_of(text)).is_empty());
    assert!(provider.provide(text, end_of(text)).await.is_empty());
}

#[tokio::test]
async fn failing_catalog_does_not_hide_static_kinds() {
    let provider = CompletionItemProvider::new(
        Sql,
        Arc::new(FailingResources),
        Arc::new(StaticVariables::with_variables(["env"])),
    );
    let text = "SELECT AVG(CPUUtilization) FROM ";
    let items = provider.provide(text, end_of(text)).await;
    assert_eq!(labels(&items), vec![sql::SCHEMA, "$env"]);
}

#[test_context(SeededCatalog)]
#[tokio::test]
async fn cached_catalog_gives_the_same_answers(ctx: &mut SeededCatalog) {
    let direct = ctx.bare_provider(Sql);
    let cached = CompletionItemProvider::new(
        Sql,
        Arc::new(CachedResources::new(ctx.catalog.clone())),
        Arc::new(StaticVariables::default()),
    )
    .with_region(ctx.region.clone());
    let text = "SELECT AVG(CPUUtilization) FROM ";
    let expected = direct.provide(text, end_of(text)).await;
    assert_eq!(cached.provide(text, end_of(text)).await, expected);
    assert_eq!(cached.provide(text, end_of(text)).await, expected);
}

#[test_context(SeededCatalog)]
#[tokio::test]
async fn provide_is_deterministic(ctx: &mut SeededCatalog) {
    let provider = ctx.provider(Sql);
    let text = "SELECT AVG(CPUUtilization) FROM SCHEMA(\"AWS/EC2\", ";
    let first = provider.provide(text, end_of(text)).await;
    let second = provider.provide(text, end_of(text)).await;
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test_context(SeededCatalog)]
#[tokio::test]
async fn only_the_latest_generation_is_current(ctx: &mut SeededCatalog) {
    let provider = ctx.provider(Sql);
    let requests = ["SEL", "SELECT ", "SELECT AVG("].map(|text| provider.provide_tagged(text, end_of(text)));
    let tagged = join_all(requests).await;

    let mut generations: Vec<_> = tagged.iter().map(|t| t.generation).collect();
    generations.sort();
    assert_eq!(generations, vec![1, 2, 3]);
    let latest: Vec<_> = tagged.iter().filter(|t| provider.is_latest(t.generation)).collect();
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].generation, 3);
}

#[tokio::test]
async fn registry_registers_each_language_once() {
    let registry = LanguageRegistry::new();
    let resources: Arc<dyn Resources> = Arc::new(Catalog::new());
    let variables: Arc<dyn TemplateVariables> = Arc::new(StaticVariables::default());

    assert_eq!(registry.register_defaults(resources.clone(), variables.clone()).await, 4);
    assert_eq!(registry.register_defaults(resources.clone(), variables).await, 0);
    assert!(
        !registry
            .register(CompletionItemProvider::new(
                Sql,
                resources,
                Arc::new(StaticVariables::default())
            ))
            .await
    );
    assert_eq!(
        registry.ids().await,
        vec![
            "cloudwatch-MetricMath",
            "cloudwatch-dynamicLabels",
            "cloudwatch-logs",
            "cloudwatch-sql"
        ]
    );
}

#[tokio::test]
async fn registry_rejects_unknown_languages() {
    let registry = LanguageRegistry::new();
    let err = registry
        .complete("promql", "", Position::new(1, 1))
        .await
        .expect_err("nothing registered");
    assert!(matches!(err, Error::UnknownLanguage(id) if id == "promql"));
}

#[tokio::test]
async fn registered_language_exposes_its_surface() -> Result {
    let registry = LanguageRegistry::new();
    registry
        .register_defaults(Arc::new(Catalog::new()), Arc::new(StaticVariables::default()))
        .await;
    let sql = registry.get(Sql::ID).await?;
    assert!(sql.trigger_characters.contains(&'$'));
    assert_eq!(sql.provider.id(), Sql::ID);
    assert_eq!(sql.provider.token_types().keyword, "keyword.sql");
    assert_eq!(sql.provider.describe_position("SELECT ", Position::new(1, 8)), "AfterSelectKeyword");
    Ok(())
}
