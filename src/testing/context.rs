use crate::*;
use async_trait::async_trait;
use std::sync::Arc;
use test_context::AsyncTestContext;
pub use test_context::test_context;

/// A catalog seeded with a couple of EC2 and Lambda metrics, plus template
/// variables, for end-to-end completion tests.
pub struct SeededCatalog {
    pub catalog: Arc<Catalog>,
    pub variables: Arc<StaticVariables>,
    pub region: String,
}

impl SeededCatalog {
    pub fn provider<L: Language>(&self, language: L) -> CompletionItemProvider<L> {
        CompletionItemProvider::new(language, self.catalog.clone(), self.variables.clone())
            .with_region(self.region.clone())
    }

    /// Same provider, without template variables.
    pub fn bare_provider<L: Language>(&self, language: L) -> CompletionItemProvider<L> {
        CompletionItemProvider::new(language, self.catalog.clone(), Arc::new(StaticVariables::default()))
            .with_region(self.region.clone())
    }
}

impl AsyncTestContext for SeededCatalog {
    async fn setup() -> Self {
        crate::testing::common_init();
        let catalog = Catalog::new();
        catalog
            .insert_metric(
                "AWS/EC2",
                Metric::new_with(
                    "CPUUtilization",
                    [
                        Dimension::new("InstanceId", ["i-123", "i-456"]),
                        Dimension::new("InstanceType", ["t3.micro", "m5.large"]),
                    ],
                ),
            )
            .await;
        catalog
            .insert_metric(
                "AWS/EC2",
                Metric::new_with("NetworkIn", [Dimension::new("InstanceId", ["i-123"])]),
            )
            .await;
        catalog
            .insert_metric(
                "AWS/Lambda",
                Metric::new_with(
                    "Invocations",
                    [Dimension::new("FunctionName", ["checkout", "search"])],
                ),
            )
            .await;
        catalog
            .insert_metric(
                "AWS/Lambda",
                Metric::new_with("CPUUtilization", [Dimension::new("FunctionName", ["checkout"])]),
            )
            .await;

        Self {
            catalog: Arc::new(catalog),
            variables: Arc::new(StaticVariables::with_variables(["region", "instance"])),
            region: "us-east-1".to_string(),
        }
    }

    async fn teardown(self) {}
}

/// Resources whose every lookup fails, for error isolation tests.
pub struct FailingResources;

#[async_trait]
impl Resources for FailingResources {
    async fn get_all_metrics(&self, _region: &str) -> Result<Vec<MetricDescriptor>> {
        Err(Error::catalog("get_all_metrics", "backend unavailable"))
    }

    async fn get_metrics(&self, _query: &MetricsQuery) -> Result<Vec<SelectableValue>> {
        Err(Error::catalog("get_metrics", "backend unavailable"))
    }

    async fn get_namespaces(&self) -> Result<Vec<SelectableValue>> {
        Err(Error::catalog("get_namespaces", "backend unavailable"))
    }

    async fn get_dimension_keys(&self, _query: &DimensionKeysQuery) -> Result<Vec<SelectableValue>> {
        Err(Error::catalog("get_dimension_keys", "backend unavailable"))
    }

    async fn get_dimension_values(&self, _query: &DimensionValuesQuery) -> Result<Vec<SelectableValue>> {
        Err(Error::catalog("get_dimension_values", "backend unavailable"))
    }
}
