//! Placeholder expansion configuration types

use autowire_application::ExpansionOptions;
use autowire_domain::constants::DEFAULT_CONCAT_OPERATOR;
use serde::{Deserialize, Serialize};

/// Placeholder expansion configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Re-expand looked-up parameter values by default
    pub recursive: bool,
    /// Operator joining fragments of generated code
    pub concat_operator: String,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            recursive: false,
            concat_operator: DEFAULT_CONCAT_OPERATOR.to_string(),
        }
    }
}

impl From<&ExpansionConfig> for ExpansionOptions {
    fn from(config: &ExpansionConfig) -> Self {
        Self {
            recursive: config.recursive,
            concat_operator: config.concat_operator.clone(),
        }
    }
}
