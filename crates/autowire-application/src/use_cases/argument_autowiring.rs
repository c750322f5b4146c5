//! Argument Autowiring Use Case
//!
//! Binds the formal parameters of a callable to caller-supplied arguments,
//! registry services or defaults, in declaration order.
//!
//! Each parameter is filled from the first source that applies:
//!
//! 1. a pool entry under its name, which discards any entry at its position
//! 2. a pool entry at its position
//! 3. a registry service of its declared non-builtin type
//! 4. its default (literal, or `null` for nullable and optional parameters)
//!
//! Defaults that end up at the tail of the list are trimmed off again so the
//! callable's own defaults apply.

use autowire_domain::error::{Error, MissingServiceReason, Result};
use autowire_domain::ports::ServiceRegistry;
use autowire_domain::value_objects::{
    ArgumentPool, BuildMode, CallableSignature, ConfigValue, ParameterSpec, ResolvedArgument,
    TypeName,
};
use tracing::{debug, trace};

/// Autowiring resolver over one service registry
pub struct ArgumentAutowirer<'r> {
    registry: &'r dyn ServiceRegistry,
}

impl<'r> ArgumentAutowirer<'r> {
    pub fn new(registry: &'r dyn ServiceRegistry) -> Self {
        Self { registry }
    }

    /// Resolve the argument list for `signature`, consuming `pool`
    ///
    /// # Errors
    ///
    /// - `ServiceNotFound` when a non-nullable typed parameter misses the registry
    /// - `UnresolvableParameter` when nothing can fill a required parameter
    /// - `InvalidVariadic` when a variadic parameter is supplied a non-sequence
    /// - `ExtraArguments` when pool entries are left over
    pub fn resolve(
        &self,
        signature: &CallableSignature,
        mut pool: ArgumentPool,
    ) -> Result<Vec<ResolvedArgument>> {
        debug!(
            callable = %signature.name,
            parameters = signature.len(),
            supplied = pool.len(),
            "Autowiring arguments"
        );

        let mut resolved = Vec::with_capacity(signature.len());
        let mut optional_tail = 0usize;

        for param in &signature.parameters {
            if param.is_variadic {
                if let Some(value) = pool.take_named_at(&param.name, param.position) {
                    let ConfigValue::Sequence(items) = value else {
                        return Err(Error::invalid_variadic(&param.name, &signature.name));
                    };
                    resolved.extend(items.into_iter().map(ResolvedArgument::Value));
                    optional_tail = 0;
                    continue;
                }
            } else if let Some(value) = pool.take_named_at(&param.name, param.position) {
                resolved.push(ResolvedArgument::Value(value));
                optional_tail = 0;
                continue;
            }

            if let Some(value) = pool.take_positional(param.position) {
                resolved.push(ResolvedArgument::Value(value));
                optional_tail = 0;
                continue;
            }

            // An unfilled variadic contributes nothing.
            if param.is_variadic {
                continue;
            }

            if let Some(type_name) = param.service_type() {
                match self.find_service(type_name)? {
                    Some(argument) => {
                        trace!(parameter = %param.name, service = %argument, "Autowired service");
                        resolved.push(argument);
                        optional_tail = 0;
                    }
                    None if param.is_nullable() => {
                        resolved.push(ResolvedArgument::Value(ConfigValue::null()));
                        optional_tail += 1;
                    }
                    None => return Err(self.missing_service(type_name, param, signature)),
                }
                continue;
            }

            if param.accepts_default() {
                resolved.push(ResolvedArgument::Value(param.default_or_null()));
                optional_tail += 1;
                continue;
            }

            return Err(Error::unresolvable_parameter(&param.name, &signature.name));
        }

        let mut position = signature.len();
        while let Some(value) = pool.take_positional(position) {
            resolved.push(ResolvedArgument::Value(value));
            optional_tail = 0;
            position += 1;
        }

        if !pool.is_empty() {
            let leftovers = pool
                .remaining_keys()
                .iter()
                .map(ToString::to_string)
                .collect();
            return Err(Error::extra_arguments(&signature.name, leftovers));
        }

        if optional_tail > 0 {
            trace!(trimmed = optional_tail, "Trimming trailing defaults");
            resolved.truncate(resolved.len() - optional_tail);
        }
        Ok(resolved)
    }

    fn find_service(&self, type_name: &TypeName) -> Result<Option<ResolvedArgument>> {
        let found = self.registry.find_unique_by_type(type_name)?;
        Ok(found.map(|reference| match self.registry.build_mode() {
            BuildMode::Runtime => ResolvedArgument::Service(reference),
            BuildMode::Deferred => ResolvedArgument::BackReference(reference),
        }))
    }

    fn missing_service(
        &self,
        type_name: &TypeName,
        param: &ParameterSpec,
        signature: &CallableSignature,
    ) -> Error {
        let reason = if self.registry.is_known_type(type_name) {
            MissingServiceReason::NoInstance
        } else {
            MissingServiceReason::UnknownType
        };
        Error::service_not_found(type_name.as_str(), &param.name, &signature.name, reason)
    }
}
