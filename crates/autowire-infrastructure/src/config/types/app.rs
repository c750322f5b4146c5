//! Main application configuration

use super::{DeferredConfig, ExpansionConfig, LoggingConfig, NamingConfig};
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Symbolic-name resolution settings
    pub naming: NamingConfig,
    /// Placeholder expansion settings
    pub expansion: ExpansionConfig,
    /// Deferred-call processing settings
    pub deferred: DeferredConfig,
}
