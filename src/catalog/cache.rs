use super::*;
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;

/// Memoizes another [`Resources`] per query.
///
/// Entries expire after `catalog_ttl_secs` and each lookup kind keeps at most
/// `catalog_capacity` answers (see [`Config`]). Failed lookups are not cached,
/// so the next request retries the backend. Concurrent misses for the same
/// query share one backend call.
pub struct CachedResources<R> {
    inner: R,
    all_metrics: Cache<String, Vec<MetricDescriptor>>,
    metrics: Cache<MetricsQuery, Vec<SelectableValue>>,
    namespaces: Cache<(), Vec<SelectableValue>>,
    dimension_keys: Cache<DimensionKeysQuery, Vec<SelectableValue>>,
    dimension_values: Cache<DimensionValuesQuery, Vec<SelectableValue>>,
}

impl<R: Resources> CachedResources<R> {
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, config())
    }

    pub fn with_config(inner: R, config: &Config) -> Self {
        fn cache<K, V>(config: &Config) -> Cache<K, V>
        where
            K: std::hash::Hash + Eq + Send + Sync + 'static,
            V: Clone + Send + Sync + 'static,
        {
            Cache::builder()
                .max_capacity(config.catalog_capacity)
                .time_to_live(config.catalog_ttl())
                .build()
        }

        Self {
            inner,
            all_metrics: cache(config),
            metrics: cache(config),
            namespaces: cache(config),
            dimension_keys: cache(config),
            dimension_values: cache(config),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Drop every memoized answer.
    pub fn invalidate_all(&self) {
        self.all_metrics.invalidate_all();
        self.metrics.invalidate_all();
        self.namespaces.invalidate_all();
        self.dimension_keys.invalidate_all();
        self.dimension_values.invalidate_all();
    }
}

fn unshare(err: Arc<Error>) -> Error {
    (*err).clone()
}

#[async_trait]
impl<R: Resources> Resources for CachedResources<R> {
    async fn get_all_metrics(&self, region: &str) -> Result<Vec<MetricDescriptor>> {
        self.all_metrics
            .try_get_with(region.to_string(), self.inner.get_all_metrics(region))
            .await
            .map_err(unshare)
    }

    async fn get_metrics(&self, query: &MetricsQuery) -> Result<Vec<SelectableValue>> {
        self.metrics
            .try_get_with(query.clone(), self.inner.get_metrics(query))
            .await
            .map_err(unshare)
    }

    async fn get_namespaces(&self) -> Result<Vec<SelectableValue>> {
        self.namespaces
            .try_get_with((), self.inner.get_namespaces())
            .await
            .map_err(unshare)
    }

    async fn get_dimension_keys(&self, query: &DimensionKeysQuery) -> Result<Vec<SelectableValue>> {
        self.dimension_keys
            .try_get_with(query.clone(), self.inner.get_dimension_keys(query))
            .await
            .map_err(unshare)
    }

    async fn get_dimension_values(&self, query: &DimensionValuesQuery) -> Result<Vec<SelectableValue>> {
        self.dimension_values
            .try_get_with(query.clone(), self.inner.get_dimension_values(query))
            .await
            .map_err(unshare)
    }
}
