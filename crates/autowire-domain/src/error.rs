//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Why an autowired service could not be found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingServiceReason {
    /// The declared type is not a known class or interface
    UnknownType,
    /// The type is known but no service of that type is registered
    NoInstance,
}

/// Main error type for the wiring engines
#[derive(Error, Debug)]
pub enum Error {
    /// Empty symbolic name passed to the name resolver
    #[error("Invalid reference: symbolic name must not be empty")]
    InvalidReference,

    /// Placeholder substitution cycle
    #[error("Circular reference detected for parameters: {}", .chain.join(", "))]
    CircularReference {
        /// Parameter names visited, ending with the repeated one
        chain: Vec<String>,
    },

    /// Dotted path absent from the parameter tree
    #[error("Missing parameter '{name}'")]
    MissingParameter {
        /// The placeholder name that could not be found
        name: String,
    },

    /// Non-scalar value spliced into a larger string
    #[error("Unable to concatenate non-scalar parameter '{name}' into '{template}'")]
    NonScalarInterpolation {
        /// The placeholder name
        name: String,
        /// The string the placeholder appeared in
        template: String,
    },

    /// Declared service type could not be autowired
    #[error("{}", missing_service_message(.reason, .type_name, .parameter, .callable))]
    ServiceNotFound {
        /// The declared parameter type
        type_name: String,
        /// The parameter requiring the service
        parameter: String,
        /// The callable owning the parameter
        callable: String,
        /// Whether the type itself is unknown or just has no instance
        reason: MissingServiceReason,
    },

    /// Parameter with no supplied value, no autowirable type and no default
    #[error(
        "Parameter ${parameter} in {callable}() has no class type or default value, so its value must be specified"
    )]
    UnresolvableParameter {
        /// The parameter name
        parameter: String,
        /// The callable owning the parameter
        callable: String,
    },

    /// Supplied arguments left over after resolution
    #[error("Unable to pass specified arguments to {callable}(): {}", .leftovers.join(", "))]
    ExtraArguments {
        /// The callable being resolved
        callable: String,
        /// Keys of the unconsumed arguments
        leftovers: Vec<String>,
    },

    /// Variadic parameter supplied by name with a non-sequence value
    #[error("Variadic parameter ${parameter} in {callable}() expects a sequence of arguments")]
    InvalidVariadic {
        /// The parameter name
        parameter: String,
        /// The callable owning the parameter
        callable: String,
    },

    /// Several services match a type that must be unique
    #[error("Multiple services of type {type_name} found: {}", .candidates.join(", "))]
    AmbiguousService {
        /// The requested type
        type_name: String,
        /// Names of all matching services
        candidates: Vec<String>,
    },

    /// Constant reference that the host environment does not define
    #[error("Undefined constant '{name}'")]
    UndefinedConstant {
        /// The qualified constant name
        name: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

fn missing_service_message(
    reason: &MissingServiceReason,
    type_name: &str,
    parameter: &str,
    callable: &str,
) -> String {
    match reason {
        MissingServiceReason::NoInstance => format!(
            "Service of type {type_name} required by ${parameter} in {callable}() not found. \
             Did you add it to configuration file?"
        ),
        MissingServiceReason::UnknownType => format!(
            "Class '{type_name}' required by ${parameter} in {callable}() not found. \
             Check the parameter type and 'use' statements."
        ),
    }
}

// Expansion error creation methods
impl Error {
    /// Create a circular reference error from the visited chain
    pub fn circular_reference<I, S>(chain: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::CircularReference {
            chain: chain.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a missing parameter error
    pub fn missing_parameter<S: Into<String>>(name: S) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Create a non-scalar interpolation error
    pub fn non_scalar_interpolation<N: Into<String>, T: Into<String>>(name: N, template: T) -> Self {
        Self::NonScalarInterpolation {
            name: name.into(),
            template: template.into(),
        }
    }
}

// Autowiring error creation methods
impl Error {
    /// Create a service-not-found error
    pub fn service_not_found<T, P, C>(
        type_name: T,
        parameter: P,
        callable: C,
        reason: MissingServiceReason,
    ) -> Self
    where
        T: Into<String>,
        P: Into<String>,
        C: Into<String>,
    {
        Self::ServiceNotFound {
            type_name: type_name.into(),
            parameter: parameter.into(),
            callable: callable.into(),
            reason,
        }
    }

    /// Create an unresolvable parameter error
    pub fn unresolvable_parameter<P: Into<String>, C: Into<String>>(parameter: P, callable: C) -> Self {
        Self::UnresolvableParameter {
            parameter: parameter.into(),
            callable: callable.into(),
        }
    }

    /// Create an extra arguments error
    pub fn extra_arguments<C: Into<String>>(callable: C, leftovers: Vec<String>) -> Self {
        Self::ExtraArguments {
            callable: callable.into(),
            leftovers,
        }
    }

    /// Create an invalid variadic argument error
    pub fn invalid_variadic<P: Into<String>, C: Into<String>>(parameter: P, callable: C) -> Self {
        Self::InvalidVariadic {
            parameter: parameter.into(),
            callable: callable.into(),
        }
    }

    /// Create an ambiguous service error
    pub fn ambiguous_service<T: Into<String>>(type_name: T, candidates: Vec<String>) -> Self {
        Self::AmbiguousService {
            type_name: type_name.into(),
            candidates,
        }
    }
}

// Collaborator and ambient error creation methods
impl Error {
    /// Create an undefined constant error
    pub fn undefined_constant<S: Into<String>>(name: S) -> Self {
        Self::UndefinedConstant { name: name.into() }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
