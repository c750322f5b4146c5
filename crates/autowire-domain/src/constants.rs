//! Domain constants
//!
//! Reserved keywords, markers and default syntax pieces used by the engines.
//! Infrastructure configuration may override the separators and markers; the
//! values here are the defaults.

// ============================================================================
// SYMBOLIC NAMES
// ============================================================================

/// Default namespace separator for qualified names
pub const DEFAULT_NAMESPACE_SEPARATOR: char = '\\';

/// Keywords that resolve to the class currently being resolved
pub const SELF_KEYWORDS: &[&str] = &["self", "static"];

/// Built-in type keywords (lower-case)
///
/// Parameters declared with one of these types are never autowired, and the
/// name resolver returns them without namespace qualification.
pub const BUILTIN_TYPES: &[&str] = &[
    "array", "bool", "callable", "false", "float", "int", "iterable", "mixed", "never", "null",
    "object", "string", "true", "void",
];

// ============================================================================
// PLACEHOLDERS
// ============================================================================

/// Delimiter wrapping placeholder names
pub const PLACEHOLDER_DELIMITER: char = '%';

/// Pattern of a placeholder token; group 1 captures the (possibly empty) name
pub const PLACEHOLDER_PATTERN: &str = r"%([\w.-]*)%";

/// Separator of path segments inside a placeholder name
pub const PARAMETER_PATH_SEPARATOR: char = '.';

/// Default operator joining code fragments in code-mode output
pub const DEFAULT_CONCAT_OPERATOR: &str = " . ";

// ============================================================================
// DEFERRED CALLS
// ============================================================================

/// Reserved argument value that is dropped from argument lists
pub const DEFAULT_ELLIPSIS_MARKER: &str = "...";

/// Prefix of references to services of the extension being configured
pub const DEFAULT_EXTENSION_PREFIX: &str = "@extension";

/// Sigil introducing a service reference
pub const REFERENCE_SIGIL: char = '@';

/// Separator between the namespace and the service name of a reference
pub const REFERENCE_SEPARATOR: char = '.';

/// Separator between a class part and a constant name
pub const CONSTANT_SEPARATOR: &str = "::";
