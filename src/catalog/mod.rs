use crate::*;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Ordered, async-shared name -> entry map. Ordered so listings are stable.
pub type Data<T> = RwLock<BTreeMap<String, T>>;

crate::reexport!(resources);
crate::reexport!(metric);
crate::reexport!(namespace);
crate::reexport!(memory);
crate::reexport!(cache);
crate::reexport!(variables);
