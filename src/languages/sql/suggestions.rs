use super::*;
use itertools::Itertools;
use CompletionItemKind as Kind;
use CompletionItemPriority as Priority;

/// Generate the items of one suggestion kind. Catalog-backed kinds quietly
/// produce nothing when the query does not name enough scope yet (no
/// namespace, no metric); catalog errors propagate to the provider.
pub async fn suggest(kind: SuggestionKind, context: &SuggestionContext<'_, StatementPosition>, items: &mut CompletionItems) -> Result {
    use SuggestionKind::*;

    match kind {
        SelectKeyword => keyword(items, SELECT, Priority::High),
        FromKeyword => keyword(items, FROM, Priority::High),
        WhereKeyword => keyword(items, WHERE, Priority::High),
        GroupByKeywords => keyword(items, GROUP_BY, Priority::MediumHigh),
        OrderByKeywords => keyword(items, ORDER_BY, Priority::Medium),
        LimitKeyword => keyword(items, LIMIT, Priority::MediumLow),
        SchemaKeyword => {
            let item = items
                .item(SCHEMA)
                .kind(Kind::Keyword)
                .priority(Priority::High)
                .snippet(format!("{SCHEMA}($0)"))
                .retrigger();
            items.push(item);
        }
        FunctionsWithArguments => {
            for statistic in STATISTICS {
                let item = items
                    .item(statistic)
                    .kind(Kind::Function)
                    .snippet(format!("{statistic}($0)"))
                    .retrigger();
                items.push(item);
            }
        }
        FunctionsWithoutArguments => {
            for statistic in STATISTICS {
                let item = items
                    .item(statistic)
                    .kind(Kind::Function)
                    .insert_text(format!("{statistic}() "))
                    .retrigger();
                items.push(item);
            }
        }
        ComparisonOperators => {
            for operator in COMPARISON_OPERATORS {
                operator_item(items, operator);
            }
        }
        LogicalOperators => {
            for operator in LOGICAL_OPERATORS {
                operator_item(items, operator);
            }
        }
        SortOrderDirectionKeyword => {
            for direction in SORT_DIRECTIONS {
                let item = items
                    .item(direction)
                    .kind(Kind::Keyword)
                    .priority(Priority::MediumHigh)
                    .insert_text(format!("{direction} "))
                    .retrigger();
                items.push(item);
            }
        }
        Metrics => metrics(context, items).await?,
        Namespaces => namespaces(context, items).await?,
        LabelKeys => label_keys(context, items).await?,
        LabelValues => label_values(context, items).await?,
    }
    Ok(())
}

fn keyword(items: &mut CompletionItems, keyword: &str, priority: Priority) {
    let item = items
        .item(keyword)
        .kind(Kind::Keyword)
        .priority(priority)
        .snippet(format!("{keyword} $0"))
        .retrigger();
    items.push(item);
}

fn operator_item(items: &mut CompletionItems, operator: &str) {
    let item = items
        .item(operator)
        .kind(Kind::Operator)
        .insert_text(format!("{operator} "))
        .retrigger();
    items.push(item);
}

/// Names with anything but word characters need double quotes.
fn quote_if_needed(name: &str) -> String {
    if name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        name.to_string()
    } else {
        format!("\"{name}\"")
    }
}

async fn metrics(context: &SuggestionContext<'_, StatementPosition>, items: &mut CompletionItems) -> Result {
    let namespace = context.current.and_then(namespace);
    let names: Vec<String> = match namespace {
        Some(namespace) => {
            let query = MetricsQuery {
                namespace,
                region: context.region.to_string(),
            };
            context
                .resources
                .get_metrics(&query)
                .await?
                .into_iter()
                .map(|m| m.value)
                .collect()
        }
        None => context
            .resources
            .get_all_metrics(context.region)
            .await?
            .into_iter()
            .map(|m| m.metric_name)
            .unique()
            .collect(),
    };
    for name in names {
        let item = items.item(&name).kind(Kind::Value).insert_text(quote_if_needed(&name));
        items.push(item);
    }
    Ok(())
}

async fn namespaces(context: &SuggestionContext<'_, StatementPosition>, items: &mut CompletionItems) -> Result {
    for namespace in context.resources.get_namespaces().await? {
        let item = items
            .item(&namespace.value)
            .kind(Kind::Module)
            .insert_text(format!("\"{}\"", namespace.value));
        items.push(item);
    }
    Ok(())
}

async fn label_keys(context: &SuggestionContext<'_, StatementPosition>, items: &mut CompletionItems) -> Result {
    let Some(current) = context.current else {
        return Ok(());
    };
    let Some(namespace) = namespace(current) else {
        return Ok(());
    };
    // Keys already spelled out in the governing clause narrow the lookup.
    let dimension_filters = match context.statement_position {
        StatementPosition::SchemaFuncExtraArgument => schema_label_keys(current)
            .into_iter()
            .map(|key| (key, vec![]))
            .collect(),
        StatementPosition::AfterGroupByKeywords => group_by_keys(current)
            .into_iter()
            .map(|key| (key, vec![]))
            .collect(),
        _ => where_filters(current),
    };
    let query = DimensionKeysQuery {
        namespace,
        region: context.region.to_string(),
        metric_name: metric_name(current),
        dimension_filters,
    };
    for key in context.resources.get_dimension_keys(&query).await? {
        let item = items
            .item(&key.value)
            .kind(Kind::Field)
            .insert_text(quote_if_needed(&key.value));
        items.push(item);
    }
    Ok(())
}

async fn label_values(context: &SuggestionContext<'_, StatementPosition>, items: &mut CompletionItems) -> Result {
    let Some(current) = context.current else {
        return Ok(());
    };
    let (Some(namespace), Some(metric_name), Some(dimension_key)) =
        (namespace(current), metric_name(current), compared_key(current))
    else {
        return Ok(());
    };
    let query = DimensionValuesQuery {
        region: context.region.to_string(),
        namespace,
        metric_name,
        dimension_key,
    };
    for value in context.resources.get_dimension_values(&query).await? {
        let item = items
            .item(&value.value)
            .kind(Kind::Value)
            .insert_text(format!("'{}' ", value.value))
            .retrigger();
        items.push(item);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::end_of;

    #[test]
    fn quoting_only_when_needed() {
        assert_eq!(quote_if_needed("InstanceId"), "InstanceId");
        assert_eq!(quote_if_needed("Instance Type"), "\"Instance Type\"");
        assert_eq!(quote_if_needed("aws.region"), "\"aws.region\"");
        assert_eq!(quote_if_needed("x-ray"), "\"x-ray\"");
    }

    async fn generate(kind: SuggestionKind, text: &str, catalog: &Catalog) -> Vec<CompletionItem> {
        let position = end_of(text);
        let chain = TokenChain::build(Sql.tokenizer(), text, position);
        let context = SuggestionContext {
            current: chain.current(),
            position,
            statement_position: statement_position(chain.current()),
            resources: catalog,
            region: "us-east-1",
        };
        let mut items = CompletionItems::new(chain.current(), position);
        suggest(kind, &context, &mut items).await.expect("in-memory catalog");
        items.into_vec()
    }

    #[tokio::test]
    async fn statistics_with_arguments_are_retriggering_snippets() {
        let items = generate(SuggestionKind::FunctionsWithArguments, "SELECT ", &Catalog::new()).await;
        assert_eq!(items.len(), STATISTICS.len());
        assert!(items.iter().all(|i| i.is_snippet() && i.insert_text.ends_with("($0)")));
        assert!(items.iter().all(|i| i.command == Some(EditorCommand::TriggerSuggest)));
    }

    #[tokio::test]
    async fn label_values_need_namespace_and_metric() {
        let catalog = Catalog::new();
        catalog
            .insert_dimension("AWS/EC2", "CPUUtilization", Dimension::new("InstanceId", ["i-1", "i-2"]))
            .await;

        let items = generate(
            SuggestionKind::LabelValues,
            "SELECT AVG(CPUUtilization) FROM \"AWS/EC2\" WHERE InstanceId = ",
            &catalog,
        )
        .await;
        let inserts: Vec<_> = items.iter().map(|i| i.insert_text.as_str()).collect();
        assert_eq!(inserts, vec!["'i-1' ", "'i-2' "]);

        let items = generate(SuggestionKind::LabelValues, "SELECT AVG(CPUUtilization) WHERE InstanceId = ", &catalog).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn schema_keys_are_not_suggested_twice() {
        let catalog = Catalog::new();
        catalog
            .insert_metric(
                "AWS/EC2",
                Metric::new_with(
                    "CPUUtilization",
                    [
                        Dimension::new("InstanceId", ["i-1"]),
                        Dimension::new("InstanceType", ["t3.micro"]),
                    ],
                ),
            )
            .await;
        let items = generate(
            SuggestionKind::LabelKeys,
            "SELECT AVG(CPUUtilization) FROM SCHEMA(\"AWS/EC2\", InstanceId, ",
            &catalog,
        )
        .await;
        let labels: Vec<_> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["InstanceType"]);
    }

    #[tokio::test]
    async fn group_by_keys_are_not_suggested_twice() {
        let catalog = Catalog::new();
        catalog
            .insert_metric(
                "AWS/EC2",
                Metric::new_with(
                    "CPUUtilization",
                    [
                        Dimension::new("InstanceId", ["i-1"]),
                        Dimension::new("InstanceType", ["t3.micro"]),
                    ],
                ),
            )
            .await;
        let items = generate(
            SuggestionKind::LabelKeys,
            "SELECT AVG(CPUUtilization) FROM \"AWS/EC2\" GROUP BY InstanceType, ",
            &catalog,
        )
        .await;
        let labels: Vec<_> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["InstanceId"]);
    }
}
