//! # Autowire
//!
//! The resolution core of a dependency-injection container: argument
//! autowiring, `%placeholder%` expansion, symbolic-name resolution and
//! deferred-call rewriting.
//!
//! This crate is a facade over the layered workspace crates.
//!
//! ## Example
//!
//! ```
//! use autowire::{
//!     ArgumentPool, CallableSignature, ConfigValue, InMemoryServiceRegistry, ParameterSpec,
//!     ParameterTree, PlaceholderExpander, ResolvedArgument,
//! };
//! use autowire::application::ArgumentAutowirer;
//!
//! let params = ParameterTree::from_json(serde_json::json!({ "retries": 3 })).unwrap();
//! let retries = PlaceholderExpander::new(&params)
//!     .expand(&ConfigValue::from("%retries%"))
//!     .unwrap();
//!
//! let registry = InMemoryServiceRegistry::new();
//! registry.register("mailer", ["App.Mailer"]);
//!
//! let signature = CallableSignature::new("Newsletter::__construct")
//!     .with_parameter(ParameterSpec::new("mailer").typed("App.Mailer"))
//!     .with_parameter(ParameterSpec::new("retries").with_default(1i64));
//!
//! let resolved = ArgumentAutowirer::new(&registry)
//!     .resolve(&signature, ArgumentPool::new().with_named("retries", retries))
//!     .unwrap();
//! assert_eq!(resolved.len(), 2);
//! assert!(matches!(resolved[0], ResolvedArgument::Service(_)));
//! ```
//!
//! ## Architecture
//!
//! - `domain` - value model, errors and collaborator ports
//! - `application` - the wiring engines
//! - `infrastructure` - configuration, logging, adapters and composition root

/// Domain layer - value model, errors and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use autowire_domain::*;
}

/// Application layer - the wiring engines
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use autowire_application::*;
}

/// Infrastructure layer - configuration, logging and adapters
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use autowire_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the engines at the crate root
pub use application::{
    ArgumentAutowirer, DeferredCallProcessor, NameResolver, PlaceholderExpander,
};

// Re-export infrastructure entry points
pub use infrastructure::{
    AppConfig, ConfigLoader, ConstantTable, InMemoryServiceRegistry, WiringContext, init_wiring,
};
