//! Domain Value Objects
//!
//! Immutable (or call-scoped) values flowing through the wiring engines.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ConfigValue`] | Tagged configuration tree node |
//! | [`ParameterTree`] | Dotted-path lookup table for placeholders |
//! | [`ParameterSpec`] | Normalized description of a formal parameter |
//! | [`ArgumentPool`] | Supplied arguments keyed by name or position |
//! | [`ClassContext`] | Namespace, alias table and self-binding |
//! | [`ResolvedArgument`] | Entry of an autowired argument list |

/// Argument pool for autowiring
pub mod argument_pool;
/// Class context for name resolution
pub mod class_context;
/// Configuration value tree
pub mod config_value;
/// Parameter specs and callable signatures
pub mod parameter;
/// Parameter tree for placeholder lookup
pub mod parameter_tree;
/// Autowiring output values
pub mod resolved;

pub use argument_pool::{ArgumentKey, ArgumentPool};
pub use class_context::ClassContext;
pub use config_value::{
    CallArguments, CodeLiteral, ConfigMap, ConfigValue, DeferredCall, MapKey, Scalar,
};
pub use parameter::{CallableSignature, DeclaredType, ParameterSpec, TypeName, is_builtin_type};
pub use parameter_tree::ParameterTree;
pub use resolved::{BuildMode, ResolvedArgument, ServiceReference};
