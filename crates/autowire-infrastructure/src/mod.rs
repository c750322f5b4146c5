//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the wiring engines.
//!
//! ## Module Categories
//!
//! ### Configuration & Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML and environment configuration |
//! | [`di`] | `WiringContext` composition root |
//! | [`constants`] | Centralized infrastructure constants |
//!
//! ### Adapters
//! | Module | Description |
//! |--------|-------------|
//! | [`registry`] | In-memory service registry and constant table |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension for foreign errors |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod registry;

// Re-export commonly used types
pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use di::{WiringContext, init_wiring};
pub use error_ext::ErrorContext;
pub use registry::{ConstantTable, InMemoryServiceRegistry};
