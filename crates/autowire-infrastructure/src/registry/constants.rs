//! Constant table
//!
//! A fixed set of host constants addressed by qualified name
//! (`Owner::NAME`, or a bare `NAME` for globals).

use autowire_domain::error::{Error, Result};
use autowire_domain::ports::ConstantResolver;
use autowire_domain::value_objects::ConfigValue;
use std::collections::HashMap;

/// In-memory [`ConstantResolver`]
#[derive(Debug, Clone, Default)]
pub struct ConstantTable {
    constants: HashMap<String, ConfigValue>,
}

impl ConstantTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Self::define`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.define(name, value);
        self
    }

    /// Define or redefine a constant
    pub fn define(&mut self, name: impl Into<String>, value: impl Into<ConfigValue>) -> Option<ConfigValue> {
        self.constants.insert(name.into(), value.into())
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}

impl ConstantResolver for ConstantTable {
    fn resolve_constant(&self, qualified_name: &str) -> Result<ConfigValue> {
        self.constants
            .get(qualified_name)
            .cloned()
            .ok_or_else(|| Error::undefined_constant(qualified_name))
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for ConstantTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, value) in iter {
            table.define(name, value);
        }
        table
    }
}
