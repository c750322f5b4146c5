//! Parameter tree used for placeholder lookup

use crate::constants::PARAMETER_PATH_SEPARATOR;
use crate::error::{Error, Result};
use crate::value_objects::config_value::{ConfigMap, ConfigValue, MapKey};

/// Immutable nested mapping addressed by dotted paths such as `db.host`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterTree {
    root: ConfigMap,
}

impl ParameterTree {
    pub fn new(root: ConfigMap) -> Self {
        Self { root }
    }

    /// Build a tree from a JSON object
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        match ConfigValue::from(value) {
            ConfigValue::Mapping(root) => Ok(Self { root }),
            other => Err(Error::invalid_argument(format!(
                "parameter tree root must be a mapping, got {}",
                other.kind()
            ))),
        }
    }

    /// Resolve a dotted path
    ///
    /// Segments index into mappings by key and into sequences by position.
    /// Walking into a scalar, code literal or deferred call yields `None`.
    pub fn get(&self, path: &str) -> Option<&ConfigValue> {
        let mut segments = path.split(PARAMETER_PATH_SEPARATOR);
        let first = segments.next()?;
        let mut current = self.root.get_segment(first)?;
        for segment in segments {
            current = match current {
                ConfigValue::Mapping(map) => map.get_segment(segment)?,
                ConfigValue::Sequence(items) => match MapKey::parse(segment) {
                    MapKey::Index(index) => items.get(index)?,
                    MapKey::Name(_) => return None,
                },
                ConfigValue::Scalar(_) | ConfigValue::Deferred(_) | ConfigValue::Code(_) => {
                    return None;
                }
            };
        }
        Some(current)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn root(&self) -> &ConfigMap {
        &self.root
    }
}

impl From<ConfigMap> for ParameterTree {
    fn from(root: ConfigMap) -> Self {
        Self::new(root)
    }
}
