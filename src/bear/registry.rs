//! Bear registry: name to bear lookup.

use super::builtin::{KeywordBear, LineLengthBear, SpaceConsistencyBear};
use super::Bear;
use crate::error::LintError;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registered bears, keyed by name.
#[derive(Default, Clone)]
pub struct BearRegistry {
    bears: BTreeMap<String, Arc<dyn Bear>>,
}

impl BearRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the bears shipped with bearlint
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(KeywordBear);
        registry.register(LineLengthBear);
        registry.register(SpaceConsistencyBear);
        registry
    }

    /// Register a bear, replacing any bear of the same name
    pub fn register<B: Bear + 'static>(&mut self, bear: B) {
        let name = bear.name().to_string();
        if self.bears.insert(name.clone(), Arc::new(bear)).is_some() {
            tracing::debug!(bear = %name, "Replaced registered bear");
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Bear>> {
        self.bears.get(name).cloned()
    }

    pub fn get_or_error(&self, name: &str) -> Result<Arc<dyn Bear>, LintError> {
        self.get(name)
            .ok_or_else(|| LintError::UnknownBear(name.to_string()))
    }

    /// Look up bears in the given order, failing on the first unknown name
    pub fn instantiate(&self, names: &[String]) -> Result<Vec<Arc<dyn Bear>>, LintError> {
        names.iter().map(|name| self.get_or_error(name)).collect()
    }

    /// All bears, in name order
    pub fn list_all(&self) -> Vec<Arc<dyn Bear>> {
        self.bears.values().cloned().collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.bears.keys().map(String::as_str).collect()
    }
}
