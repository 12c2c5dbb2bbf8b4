use super::*;
use async_trait::async_trait;
use itertools::Itertools;

/// In-memory catalog: namespaces -> metrics -> dimensions.
///
/// Serves every region identically. Useful for hosts without a backend and
/// as the fixture behind the completion tests. Listings come back sorted.
#[derive(Debug, Default)]
pub struct Catalog {
    pub namespaces: Data<Namespace>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a metric, creating its namespace on demand.
    pub async fn insert_metric(&self, namespace: impl Into<String>, metric: Metric) {
        let namespace = namespace.into();
        self.namespaces
            .write()
            .await
            .entry(namespace.clone())
            .or_insert_with(|| Namespace::new(namespace))
            .metrics
            .write()
            .await
            .insert(metric.name.clone(), metric);
    }

    /// Add (or replace) a dimension on an existing or new metric.
    pub async fn insert_dimension(
        &self,
        namespace: impl Into<String>,
        metric_name: impl Into<String>,
        dimension: Dimension,
    ) {
        let namespace = namespace.into();
        let metric_name = metric_name.into();
        self.namespaces
            .write()
            .await
            .entry(namespace.clone())
            .or_insert_with(|| Namespace::new(namespace))
            .metrics
            .write()
            .await
            .entry(metric_name.clone())
            .or_insert_with(|| Metric::new(metric_name))
            .dimensions
            .write()
            .await
            .insert(dimension.key.clone(), dimension);
    }
}

#[async_trait]
impl Resources for Catalog {
    async fn get_all_metrics(&self, _region: &str) -> Result<Vec<MetricDescriptor>> {
        let namespaces = self.namespaces.read().await;
        let mut out = Vec::new();
        for namespace in namespaces.values() {
            for name in namespace.metrics.read().await.keys() {
                out.push(MetricDescriptor::new(name.clone(), namespace.name.clone()));
            }
        }
        Ok(out)
    }

    async fn get_metrics(&self, query: &MetricsQuery) -> Result<Vec<SelectableValue>> {
        let namespaces = self.namespaces.read().await;
        let Some(namespace) = namespaces.get(&query.namespace) else {
            return Ok(vec![]);
        };
        Ok(namespace
            .metrics
            .read()
            .await
            .keys()
            .cloned()
            .map(SelectableValue::new)
            .collect())
    }

    async fn get_namespaces(&self) -> Result<Vec<SelectableValue>> {
        Ok(self
            .namespaces
            .read()
            .await
            .keys()
            .cloned()
            .map(SelectableValue::new)
            .collect())
    }

    /// Keys of every eligible metric, minus the keys already filtered on.
    async fn get_dimension_keys(&self, query: &DimensionKeysQuery) -> Result<Vec<SelectableValue>> {
        let namespaces = self.namespaces.read().await;
        let Some(namespace) = namespaces.get(&query.namespace) else {
            return Ok(vec![]);
        };
        let metrics = namespace.metrics.read().await;
        let mut keys = Vec::new();
        for metric in metrics.values() {
            if query.metric_name.as_ref().is_some_and(|name| *name != metric.name) {
                continue;
            }
            if metric.matches(&query.dimension_filters).await {
                keys.extend(metric.keys().await);
            }
        }
        Ok(keys
            .into_iter()
            .filter(|key| !query.dimension_filters.contains_key(key))
            .sorted()
            .dedup()
            .map(SelectableValue::new)
            .collect())
    }

    async fn get_dimension_values(&self, query: &DimensionValuesQuery) -> Result<Vec<SelectableValue>> {
        let namespaces = self.namespaces.read().await;
        let Some(namespace) = namespaces.get(&query.namespace) else {
            return Ok(vec![]);
        };
        let metrics = namespace.metrics.read().await;
        let Some(metric) = metrics.get(&query.metric_name) else {
            return Ok(vec![]);
        };
        let dimensions = metric.dimensions.read().await;
        Ok(dimensions
            .get(&query.dimension_key)
            .map(|d| d.values.iter().cloned().map(SelectableValue::new).collect())
            .unwrap_or_default())
    }
}
