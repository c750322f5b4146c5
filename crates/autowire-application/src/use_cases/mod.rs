//! Use Cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`NameResolver`] | Symbolic-name resolution against a class context |
//! | [`PlaceholderExpander`] | `%name%` substitution over configuration trees |
//! | [`ArgumentAutowirer`] | Parameter binding with registry lookups |
//! | [`DeferredCallProcessor`] | Structural rewrites of deferred-call trees |

/// Argument autowiring
pub mod argument_autowiring;
/// Deferred-call tree utilities
pub mod deferred_calls;
/// Symbolic-name resolution
pub mod name_resolution;
/// Placeholder expansion
pub mod placeholder_expansion;

pub use argument_autowiring::ArgumentAutowirer;
pub use deferred_calls::{DeferredCallOptions, DeferredCallProcessor, is_constant_reference};
pub use name_resolution::NameResolver;
pub use placeholder_expansion::{ExpansionOptions, PlaceholderExpander, RecursionGuard};
