//! Domain Port Interfaces
//!
//! Contracts of the external collaborators the engines consult. The domain
//! defines them; infrastructure adapters (or the embedding container)
//! implement them.
//!
//! - **registry** - type-directed service lookup used by autowiring
//! - **constants** - host constant lookup used by deferred-call processing

/// Host constant lookup port
pub mod constants;
/// Service registry port
pub mod registry;

pub use constants::ConstantResolver;
pub use registry::ServiceRegistry;
