//! Callable parameter descriptions
//!
//! The wiring core never introspects callables itself. Callers describe each
//! formal parameter with a [`ParameterSpec`] and group them in a
//! [`CallableSignature`].

use crate::constants::BUILTIN_TYPES;
use crate::value_objects::config_value::ConfigValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a declared parameter type
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a built-in type keyword (case-insensitive)
    pub fn is_builtin(&self) -> bool {
        is_builtin_type(&self.0)
    }
}

/// Whether `name` is a built-in type keyword (case-insensitive)
pub fn is_builtin_type(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    BUILTIN_TYPES.contains(&lower.as_str())
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Declared type of a parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredType {
    pub name: TypeName,
    pub nullable: bool,
}

/// Normalized description of one formal parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    /// Zero-based position in the parameter list
    pub position: usize,
    pub declared_type: Option<DeclaredType>,
    /// The callable may be invoked without this argument
    pub is_optional: bool,
    /// Literal default, when one is available
    pub default_value: Option<ConfigValue>,
    pub is_variadic: bool,
}

impl ParameterSpec {
    /// Create a required, untyped parameter at position 0
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: 0,
            declared_type: None,
            is_optional: false,
            default_value: None,
            is_variadic: false,
        }
    }

    pub fn at(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Declare a non-nullable type
    pub fn typed(mut self, type_name: impl Into<TypeName>) -> Self {
        self.declared_type = Some(DeclaredType {
            name: type_name.into(),
            nullable: false,
        });
        self
    }

    /// Declare a nullable type
    pub fn nullable(mut self, type_name: impl Into<TypeName>) -> Self {
        self.declared_type = Some(DeclaredType {
            name: type_name.into(),
            nullable: true,
        });
        self
    }

    /// Attach a literal default (implies optional)
    pub fn with_default(mut self, value: impl Into<ConfigValue>) -> Self {
        self.default_value = Some(value.into());
        self.is_optional = true;
        self
    }

    /// Mark optional without a literal default
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    /// Mark variadic (implies optional)
    pub fn variadic(mut self) -> Self {
        self.is_variadic = true;
        self.is_optional = true;
        self
    }

    pub fn has_default(&self) -> bool {
        self.default_value.is_some()
    }

    pub fn is_nullable(&self) -> bool {
        self.declared_type.as_ref().is_some_and(|t| t.nullable)
    }

    /// Declared type eligible for registry lookup (non-builtin)
    pub fn service_type(&self) -> Option<&TypeName> {
        self.declared_type
            .as_ref()
            .map(|t| &t.name)
            .filter(|name| !name.is_builtin())
    }

    /// Whether the callable can do without an explicitly supplied value
    pub fn accepts_default(&self) -> bool {
        self.is_nullable() || self.is_optional || self.has_default()
    }

    /// Value used when the parameter falls back to its default
    pub fn default_or_null(&self) -> ConfigValue {
        self.default_value.clone().unwrap_or_else(ConfigValue::null)
    }
}

/// A callable's name plus its formal parameters, in declaration order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CallableSignature {
    /// Name used in error messages, e.g. `Mailer::__construct`
    pub name: String,
    pub parameters: Vec<ParameterSpec>,
}

impl CallableSignature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Append a parameter, assigning it the next position
    pub fn with_parameter(mut self, parameter: ParameterSpec) -> Self {
        let position = self.parameters.len();
        self.parameters.push(parameter.at(position));
        self
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}
