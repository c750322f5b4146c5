//! Autowiring output values

use crate::constants::REFERENCE_SIGIL;
use crate::value_objects::config_value::ConfigValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a service held by a registry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceReference(String);

impl ServiceReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a registry hands out services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Live container: services are passed directly
    #[default]
    Runtime,
    /// Container under construction: services are referenced by name
    Deferred,
}

/// One entry of a resolved argument list
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedArgument {
    /// Supplied or defaulted value
    Value(ConfigValue),
    /// Service inlined from a runtime registry
    Service(ServiceReference),
    /// Back-reference marker to a service of a registry still being built
    BackReference(ServiceReference),
}

impl ResolvedArgument {
    pub fn as_value(&self) -> Option<&ConfigValue> {
        match self {
            Self::Value(value) => Some(value),
            Self::Service(_) | Self::BackReference(_) => None,
        }
    }

    /// Referenced service, inlined or not
    pub fn service(&self) -> Option<&ServiceReference> {
        match self {
            Self::Service(reference) | Self::BackReference(reference) => Some(reference),
            Self::Value(_) => None,
        }
    }

    pub fn is_back_reference(&self) -> bool {
        matches!(self, Self::BackReference(_))
    }
}

impl fmt::Display for ResolvedArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value:?}"),
            Self::Service(reference) => write!(f, "{reference}"),
            Self::BackReference(reference) => write!(f, "{REFERENCE_SIGIL}{reference}"),
        }
    }
}

impl From<ConfigValue> for ResolvedArgument {
    fn from(value: ConfigValue) -> Self {
        Self::Value(value)
    }
}
