//! Service Registry Port
//!
//! The autowirer sees the registry only through this narrow contract. Storage,
//! lifecycle and uniqueness enforcement belong to the implementation.

use crate::error::Result;
use crate::value_objects::{BuildMode, ServiceReference, TypeName};

/// Type-directed service lookup
///
/// Implementations must be safe for concurrent reads; independent resolutions
/// may share one registry.
///
/// # Example
///
/// ```ignore
/// use autowire_domain::ports::ServiceRegistry;
///
/// fn logger_for(registry: &dyn ServiceRegistry) -> autowire_domain::Result<bool> {
///     Ok(registry.find_unique_by_type(&"Psr.Log.LoggerInterface".into())?.is_some())
/// }
/// ```
pub trait ServiceRegistry: Send + Sync {
    /// The single service of `type_name`
    ///
    /// Returns `Ok(None)` when no service matches. Implementations that detect
    /// several matches fail here instead of picking one.
    fn find_unique_by_type(&self, type_name: &TypeName) -> Result<Option<ServiceReference>>;

    /// Whether `type_name` names a known class or interface
    ///
    /// Only consulted after a lookup miss, to pick the error message.
    fn is_known_type(&self, type_name: &TypeName) -> bool;

    /// Whether found services are inlined or referenced by name
    fn build_mode(&self) -> BuildMode {
        BuildMode::Runtime
    }
}
