//! Symbolic-name configuration types

use autowire_domain::constants::DEFAULT_NAMESPACE_SEPARATOR;
use serde::{Deserialize, Serialize};

/// Name resolution configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Namespace separator, a single character
    pub separator: String,
}

impl NamingConfig {
    /// Separator as a character, falling back to the default when unset
    pub fn separator_char(&self) -> char {
        self.separator.chars().next().unwrap_or(DEFAULT_NAMESPACE_SEPARATOR)
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_NAMESPACE_SEPARATOR.to_string(),
        }
    }
}
