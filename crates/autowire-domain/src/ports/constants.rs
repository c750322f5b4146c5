//! Constant Resolver Port

use crate::error::Result;
use crate::value_objects::ConfigValue;

/// Lookup of constants defined by the host environment
pub trait ConstantResolver: Send + Sync {
    /// Value of the constant `qualified_name` (e.g. `App.Mailer::DEFAULT_PORT`)
    ///
    /// Fails with [`crate::Error::UndefinedConstant`] when it is not defined.
    fn resolve_constant(&self, qualified_name: &str) -> Result<ConfigValue>;
}
