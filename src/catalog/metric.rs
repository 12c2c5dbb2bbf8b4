use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dimension {
    pub key: String,
    pub values: Vec<String>,
}

impl Dimension {
    pub fn new<V: Into<String>>(key: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self {
            key: key.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Metric {
    pub name: String,
    pub dimensions: Data<Dimension>,
}

impl Metric {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dimensions: Data::default(),
        }
    }

    /// Construct a metric with its dimensions in one go.
    pub fn new_with(name: impl Into<String>, dimensions: impl IntoIterator<Item = Dimension>) -> Self {
        Self {
            name: name.into(),
            dimensions: Data::new(dimensions.into_iter().map(|d| (d.key.clone(), d)).collect()),
        }
    }

    /// True if the metric carries every filtered key and, where the filter
    /// lists values, at least one of them.
    pub async fn matches(&self, filters: &DimensionFilters) -> bool {
        let dimensions = self.dimensions.read().await;
        filters.iter().all(|(key, accepted)| {
            dimensions.get(key).is_some_and(|dimension| {
                accepted.is_empty() || accepted.iter().any(|v| dimension.values.contains(v))
            })
        })
    }

    pub async fn keys(&self) -> Vec<String> {
        self.dimensions.read().await.keys().cloned().collect()
    }
}
