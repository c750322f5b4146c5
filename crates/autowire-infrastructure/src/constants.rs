//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Engine-level constants are defined in `autowire_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "autowire.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "autowire";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "AUTOWIRE";

/// Separator between the prefix and nested keys of configuration variables
///
/// `AUTOWIRE__EXPANSION__RECURSIVE=true` sets `expansion.recursive`.
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "AUTOWIRE_LOG";

/// File stem used when the configured log file has none
pub const DEFAULT_LOG_FILE_STEM: &str = "autowire";
