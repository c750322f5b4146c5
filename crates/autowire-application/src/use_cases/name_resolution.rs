//! Symbolic-Name Resolution Use Case
//!
//! Expands a short or partially-qualified name to a fully-qualified one using
//! the static context of the class it appears in.

use autowire_domain::constants::{DEFAULT_NAMESPACE_SEPARATOR, SELF_KEYWORDS};
use autowire_domain::error::{Error, Result};
use autowire_domain::value_objects::{ClassContext, is_builtin_type};
use tracing::trace;

/// Resolver of symbolic names against a [`ClassContext`]
///
/// # Example
///
/// ```
/// use autowire_application::NameResolver;
/// use autowire_domain::ClassContext;
///
/// let context = ClassContext::new("Test.Space", "Test.Space.Foo").with_alias("B", "BBB");
/// let resolver = NameResolver::new().with_separator('.');
///
/// assert_eq!(resolver.expand("B.Foo", &context).unwrap(), "BBB.Foo");
/// assert_eq!(resolver.expand("Notdef", &context).unwrap(), "Test.Space.Notdef");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameResolver {
    separator: char,
}

impl NameResolver {
    pub fn new() -> Self {
        Self {
            separator: DEFAULT_NAMESPACE_SEPARATOR,
        }
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Resolve `name` to a fully-qualified name
    ///
    /// Resolution order:
    /// 1. built-in type keywords come back lower-cased
    /// 2. `self` / `static` yield the context's self name
    /// 3. a leading separator marks an absolute name, returned without it
    /// 4. an aliased first segment is replaced by the alias target
    /// 5. anything else is qualified with the current namespace
    pub fn expand(&self, name: &str, context: &ClassContext) -> Result<String> {
        if name.is_empty() {
            return Err(Error::InvalidReference);
        }

        let lower = name.to_lowercase();
        if is_builtin_type(&lower) {
            return Ok(lower);
        }
        if SELF_KEYWORDS.contains(&lower.as_str()) {
            return Ok(context.self_name.clone());
        }
        if let Some(absolute) = name.strip_prefix(self.separator) {
            return Ok(absolute.to_string());
        }

        let (head, rest) = match name.split_once(self.separator) {
            Some((head, rest)) => (head, rest),
            None => (name, ""),
        };

        let resolved = match context.alias(head) {
            Some(target) if rest.is_empty() => target.to_string(),
            Some(target) => format!("{target}{}{rest}", self.separator),
            None if context.namespace.is_empty() => name.to_string(),
            None => format!("{}{}{name}", context.namespace, self.separator),
        };
        trace!(name, resolved = %resolved, "Resolved symbolic name");
        Ok(resolved)
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new()
    }
}
