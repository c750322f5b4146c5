//! Caller-supplied argument pool
//!
//! Every supplied argument is addressed either by parameter name or by
//! position. Both keys of one parameter address the same argument, so consuming
//! it by name also drops whatever was supplied at its position. Whatever is
//! left after resolution is reported back to the caller as unusable.

use crate::value_objects::config_value::{CallArguments, ConfigValue, MapKey};
use std::collections::BTreeMap;
use std::fmt;

/// Key of an argument pool entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArgumentKey {
    Position(usize),
    Name(String),
}

impl fmt::Display for ArgumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(position) => write!(f, "#{position}"),
            Self::Name(name) => write!(f, "${name}"),
        }
    }
}

/// Call-scoped working set of supplied arguments
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArgumentPool {
    named: BTreeMap<String, ConfigValue>,
    positional: BTreeMap<usize, ConfigValue>,
}

impl ArgumentPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style named insert
    pub fn with_named(mut self, name: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.insert_named(name, value.into());
        self
    }

    /// Builder-style positional insert
    pub fn with_positional(mut self, position: usize, value: impl Into<ConfigValue>) -> Self {
        self.insert_positional(position, value.into());
        self
    }

    pub fn insert_named(&mut self, name: impl Into<String>, value: ConfigValue) -> Option<ConfigValue> {
        self.named.insert(name.into(), value)
    }

    pub fn insert_positional(&mut self, position: usize, value: ConfigValue) -> Option<ConfigValue> {
        self.positional.insert(position, value)
    }

    /// Consume the entry supplied under `name`
    pub fn take_named(&mut self, name: &str) -> Option<ConfigValue> {
        self.named.remove(name)
    }

    /// Consume the entry supplied under `name` for the parameter at `position`
    ///
    /// The named value wins; a value supplied at the same position is dropped.
    pub fn take_named_at(&mut self, name: &str, position: usize) -> Option<ConfigValue> {
        let value = self.named.remove(name)?;
        self.positional.remove(&position);
        Some(value)
    }

    /// Consume the entry supplied at `position`
    pub fn take_positional(&mut self, position: usize) -> Option<ConfigValue> {
        self.positional.remove(&position)
    }

    pub fn contains_named(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    pub fn contains_positional(&self, position: usize) -> bool {
        self.positional.contains_key(&position)
    }

    pub fn len(&self) -> usize {
        self.named.len() + self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.positional.is_empty()
    }

    /// Keys still present, positions first in index order, then names
    pub fn remaining_keys(&self) -> Vec<ArgumentKey> {
        self.positional
            .keys()
            .map(|position| ArgumentKey::Position(*position))
            .chain(self.named.keys().map(|name| ArgumentKey::Name(name.clone())))
            .collect()
    }
}

impl From<CallArguments> for ArgumentPool {
    fn from(arguments: CallArguments) -> Self {
        let mut pool = Self::new();
        match arguments {
            CallArguments::Sequence(items) => {
                for (position, value) in items.into_iter().enumerate() {
                    pool.insert_positional(position, value);
                }
            }
            CallArguments::Mapping(map) => {
                for (key, value) in map {
                    match key {
                        MapKey::Index(position) => pool.insert_positional(position, value),
                        MapKey::Name(name) => pool.insert_named(name, value),
                    };
                }
            }
        }
        pool
    }
}
