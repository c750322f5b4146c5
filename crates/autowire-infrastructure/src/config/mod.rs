//! Configuration
//!
//! Layered configuration for the wiring engines: defaults, then an optional
//! TOML file, then `AUTOWIRE__*` environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
