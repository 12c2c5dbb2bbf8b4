use super::*;

#[derive(Debug)]
pub struct Namespace {
    pub name: String,
    pub metrics: Data<Metric>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metrics: Data::default(),
        }
    }
}
