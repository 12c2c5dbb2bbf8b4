/// Source of dashboard template variables (`$region`, `$instance`, ...).
///
/// Names come back bare (`region`, not `$region`); completion renders them
/// as `$name`.
pub trait TemplateVariables: Send + Sync {
    fn variables(&self) -> Vec<String>;
}

/// A fixed set of template variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticVariables {
    names: Vec<String>,
}

impl StaticVariables {
    /// Accepts names with or without the leading `$`.
    pub fn with_variables<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            names: names
                .into_iter()
                .map(|name| {
                    let name = name.as_ref();
                    name.strip_prefix('$').unwrap_or(name).to_string()
                })
                .collect(),
        }
    }
}

impl TemplateVariables for StaticVariables {
    fn variables(&self) -> Vec<String> {
        self.names.clone()
    }
}
