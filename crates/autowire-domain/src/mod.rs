//! # Autowire Domain Layer
//!
//! Core types shared by every engine of the wiring pipeline. This crate has no
//! knowledge of how configuration is loaded or how services are stored; it only
//! describes the values flowing through the engines and the contracts of the
//! collaborators they consult.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | `ConfigValue` tree, parameter tree, parameter specs, argument pool, class context |
//! | [`ports`] | `ServiceRegistry` and `ConstantResolver` collaborator contracts |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Reserved keywords, markers and patterns |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, MissingServiceReason, Result};
pub use ports::{ConstantResolver, ServiceRegistry};
pub use value_objects::{
    ArgumentKey, ArgumentPool, BuildMode, CallArguments, CallableSignature, ClassContext,
    CodeLiteral, ConfigMap, ConfigValue, DeclaredType, DeferredCall, MapKey, ParameterSpec,
    ParameterTree, ResolvedArgument, Scalar, ServiceReference, TypeName,
};
