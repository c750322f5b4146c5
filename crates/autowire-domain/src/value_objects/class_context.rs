//! Static context for resolving symbolic names

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Namespace, alias table and self-binding of the class being resolved
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassContext {
    /// Current namespace; empty for the global namespace
    pub namespace: String,
    /// Lower-cased alias to fully-qualified name
    aliases: BTreeMap<String, String>,
    /// Fully-qualified name bound to `self`
    pub self_name: String,
}

impl ClassContext {
    pub fn new(namespace: impl Into<String>, self_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            aliases: BTreeMap::new(),
            self_name: self_name.into(),
        }
    }

    /// Register an alias; lookups are case-insensitive
    pub fn with_alias(mut self, alias: &str, target: impl Into<String>) -> Self {
        self.aliases.insert(alias.to_lowercase(), target.into());
        self
    }

    /// Target of `alias`, compared case-insensitively
    pub fn alias(&self, alias: &str) -> Option<&str> {
        self.aliases.get(&alias.to_lowercase()).map(String::as_str)
    }

    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
