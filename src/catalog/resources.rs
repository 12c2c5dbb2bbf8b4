//! The catalog collaborator: everything completion needs to know about the
//! monitored account (metrics, namespaces, dimensions) comes through
//! [`Resources`]. Implementations talk to a backend; [`crate::Catalog`] is the
//! in-memory one and [`crate::CachedResources`] memoizes any of them.
use crate::*;
use async_trait::async_trait;
use std::{collections::BTreeMap, sync::Arc};

/// A metric and the namespace it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetricDescriptor {
    pub metric_name: String,
    pub namespace: String,
}

impl MetricDescriptor {
    pub fn new(metric_name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            metric_name: metric_name.into(),
            namespace: namespace.into(),
        }
    }
}

/// One selectable catalog entry (namespace, metric name, dimension key or value).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("{value}")]
pub struct SelectableValue {
    pub value: String,
}

impl SelectableValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

/// Dimension key -> accepted values. An empty value list means "the key must
/// be present, any value".
pub type DimensionFilters = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetricsQuery {
    pub namespace: String,
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DimensionKeysQuery {
    pub namespace: String,
    pub region: String,
    pub metric_name: Option<String>,
    pub dimension_filters: DimensionFilters,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DimensionValuesQuery {
    pub region: String,
    pub namespace: String,
    pub metric_name: String,
    pub dimension_key: String,
}

#[async_trait]
pub trait Resources: Send + Sync {
    async fn get_all_metrics(&self, region: &str) -> Result<Vec<MetricDescriptor>>;

    async fn get_metrics(&self, query: &MetricsQuery) -> Result<Vec<SelectableValue>>;

    async fn get_namespaces(&self) -> Result<Vec<SelectableValue>>;

    async fn get_dimension_keys(&self, query: &DimensionKeysQuery) -> Result<Vec<SelectableValue>>;

    async fn get_dimension_values(&self, query: &DimensionValuesQuery) -> Result<Vec<SelectableValue>>;
}

#[async_trait]
impl<R: Resources + ?Sized> Resources for Arc<R> {
    async fn get_all_metrics(&self, region: &str) -> Result<Vec<MetricDescriptor>> {
        (**self).get_all_metrics(region).await
    }

    async fn get_metrics(&self, query: &MetricsQuery) -> Result<Vec<SelectableValue>> {
        (**self).get_metrics(query).await
    }

    async fn get_namespaces(&self) -> Result<Vec<SelectableValue>> {
        (**self).get_namespaces().await
    }

    async fn get_dimension_keys(&self, query: &DimensionKeysQuery) -> Result<Vec<SelectableValue>> {
        (**self).get_dimension_keys(query).await
    }

    async fn get_dimension_values(&self, query: &DimensionValuesQuery) -> Result<Vec<SelectableValue>> {
        (**self).get_dimension_values(query).await
    }
}
