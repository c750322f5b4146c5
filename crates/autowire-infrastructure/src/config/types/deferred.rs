//! Deferred-call configuration types

use autowire_application::DeferredCallOptions;
use autowire_domain::constants::{DEFAULT_ELLIPSIS_MARKER, DEFAULT_EXTENSION_PREFIX};
use serde::{Deserialize, Serialize};

/// Deferred-call processing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeferredConfig {
    /// Argument value meaning "leave this argument out"
    pub ellipsis: String,
    /// Reference prefix rewritten to the extension namespace
    pub extension_prefix: String,
}

impl Default for DeferredConfig {
    fn default() -> Self {
        Self {
            ellipsis: DEFAULT_ELLIPSIS_MARKER.to_string(),
            extension_prefix: DEFAULT_EXTENSION_PREFIX.to_string(),
        }
    }
}

impl From<&DeferredConfig> for DeferredCallOptions {
    fn from(config: &DeferredConfig) -> Self {
        Self {
            ellipsis: config.ellipsis.clone(),
            extension_prefix: config.extension_prefix.clone(),
        }
    }
}
