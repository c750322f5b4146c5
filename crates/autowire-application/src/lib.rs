//! Application Layer - Autowire
//!
//! The wiring engines, each a pure synchronous transformation over the
//! domain value model:
//!
//! - [`NameResolver`]: expands short or partially-qualified symbolic names
//!   against a class context (namespace, alias table, `self`)
//! - [`PlaceholderExpander`]: substitutes `%name%` placeholders in
//!   configuration trees, detects cycles and emits code literals when dynamic
//!   parameters are spliced into strings
//! - [`ArgumentAutowirer`]: binds formal parameters to supplied arguments,
//!   registry services or defaults, trimming trailing defaults
//! - [`DeferredCallProcessor`]: ellipsis filtering, constant resolution and
//!   namespace prefixing of deferred-call trees
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `autowire-domain`: value model, errors and the collaborator ports
//! - `tracing` for structured diagnostics and `regex` for token scanning

pub mod templates;
pub mod use_cases;

pub use templates::{Segment, Template};
pub use use_cases::*;
