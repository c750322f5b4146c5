//! Deferred-Call Tree Utilities
//!
//! Structural rewrites applied to deferred-call argument trees before they are
//! autowired:
//!
//! - ellipsis filtering drops the `...` marker ("skip this argument")
//! - constant resolution replaces `Class::NAME` strings with constant values
//! - namespace prefixing rewrites `@extension.` references to `@<namespace>.`
//!
//! All passes rebuild the tree; inputs are never mutated.

use autowire_domain::constants::{
    DEFAULT_ELLIPSIS_MARKER, DEFAULT_EXTENSION_PREFIX, REFERENCE_SEPARATOR, REFERENCE_SIGIL,
};
use autowire_domain::error::Result;
use autowire_domain::ports::ConstantResolver;
use autowire_domain::value_objects::{
    CallArguments, ConfigMap, ConfigValue, DeferredCall, MapKey, Scalar,
};
use regex::Regex;
use std::convert::Infallible;
use std::sync::LazyLock;
use tracing::trace;

static CONSTANT_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w\\.]*::[A-Z][A-Z0-9_]*$").expect("Invalid constant reference regex")
});

/// Whether `text` has the shape of a constant reference (`Owner::NAME`)
///
/// A leading `::` with no owner addresses a global constant.
pub fn is_constant_reference(text: &str) -> bool {
    CONSTANT_REFERENCE.is_match(text)
}

/// Markers recognized by the deferred-call passes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredCallOptions {
    /// Argument value meaning "leave this argument out"
    pub ellipsis: String,
    /// Reference prefix rewritten by [`DeferredCallProcessor::prefix_namespace`]
    pub extension_prefix: String,
}

impl Default for DeferredCallOptions {
    fn default() -> Self {
        Self {
            ellipsis: DEFAULT_ELLIPSIS_MARKER.to_string(),
            extension_prefix: DEFAULT_EXTENSION_PREFIX.to_string(),
        }
    }
}

type Rewrite<'f, E> = &'f dyn Fn(&str) -> std::result::Result<Option<ConfigValue>, E>;

/// One traversal: optional ellipsis removal plus a string rewrite
struct Pass<'f, E> {
    drop_ellipsis: bool,
    rewrite: Rewrite<'f, E>,
}

/// Processor of deferred-call trees
pub struct DeferredCallProcessor<'c> {
    constants: &'c dyn ConstantResolver,
    options: DeferredCallOptions,
}

impl<'c> DeferredCallProcessor<'c> {
    pub fn new(constants: &'c dyn ConstantResolver) -> Self {
        Self {
            constants,
            options: DeferredCallOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DeferredCallOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &DeferredCallOptions {
        &self.options
    }

    /// Remove every ellipsis marker from `arguments`, recursively
    ///
    /// Positions of the remaining entries are kept: a sequence with a marker
    /// before its last element becomes a mapping keyed by index.
    pub fn filter_ellipsis(&self, arguments: &CallArguments) -> CallArguments {
        let keep = |_: &str| Ok::<Option<ConfigValue>, Infallible>(None);
        let pass = Pass {
            drop_ellipsis: true,
            rewrite: &keep,
        };
        let Ok(filtered) = self.walk_arguments(arguments, &pass);
        filtered
    }

    /// Replace every constant reference in `value` by the constant's value
    pub fn resolve_constants(&self, value: &ConfigValue) -> Result<ConfigValue> {
        let resolve = |text: &str| self.resolve_constant(text);
        let pass = Pass {
            drop_ellipsis: false,
            rewrite: &resolve,
        };
        self.walk_value(value, &pass)
    }

    /// Ellipsis removal and constant resolution in one pass
    pub fn filter_arguments(&self, arguments: &CallArguments) -> Result<CallArguments> {
        let resolve = |text: &str| self.resolve_constant(text);
        let pass = Pass {
            drop_ellipsis: true,
            rewrite: &resolve,
        };
        self.walk_arguments(arguments, &pass)
    }

    /// Rewrite extension references in `value` to point into `namespace`
    ///
    /// With the default prefix, `@extension.mailer` under namespace `mail`
    /// becomes `@mail.mailer`.
    pub fn prefix_namespace(&self, value: &ConfigValue, namespace: &str) -> ConfigValue {
        let prefix = self.options.extension_prefix.as_str();
        let sigil = if prefix.starts_with(REFERENCE_SIGIL) && !namespace.starts_with(REFERENCE_SIGIL) {
            REFERENCE_SIGIL.to_string()
        } else {
            String::new()
        };
        let rewrite = |text: &str| {
            let rewritten = text
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix(REFERENCE_SEPARATOR))
                .map(|rest| {
                    ConfigValue::string(format!("{sigil}{namespace}{REFERENCE_SEPARATOR}{rest}"))
                });
            Ok::<_, Infallible>(rewritten)
        };
        let pass = Pass {
            drop_ellipsis: false,
            rewrite: &rewrite,
        };
        let Ok(prefixed) = self.walk_value(value, &pass);
        prefixed
    }

    fn resolve_constant(&self, text: &str) -> Result<Option<ConfigValue>> {
        if !is_constant_reference(text) {
            return Ok(None);
        }
        let name = text.trim_start_matches(':');
        trace!(constant = name, "Resolving constant reference");
        self.constants.resolve_constant(name).map(Some)
    }

    fn is_ellipsis<E>(&self, value: &ConfigValue, pass: &Pass<'_, E>) -> bool {
        pass.drop_ellipsis && value.as_str() == Some(self.options.ellipsis.as_str())
    }

    fn walk_value<E>(&self, value: &ConfigValue, pass: &Pass<'_, E>) -> std::result::Result<ConfigValue, E> {
        match value {
            ConfigValue::Scalar(Scalar::String(text)) => {
                Ok((pass.rewrite)(text)?.unwrap_or_else(|| value.clone()))
            }
            ConfigValue::Sequence(items) => Ok(self.walk_sequence(items, pass)?.into_value()),
            ConfigValue::Mapping(map) => Ok(ConfigValue::Mapping(self.walk_map(map, pass)?)),
            ConfigValue::Deferred(call) => {
                let entity = self.walk_value(&call.entity, pass)?;
                let arguments = self.walk_arguments(&call.arguments, pass)?;
                Ok(ConfigValue::from(DeferredCall { entity, arguments }))
            }
            ConfigValue::Scalar(_) | ConfigValue::Code(_) => Ok(value.clone()),
        }
    }

    fn walk_arguments<E>(
        &self,
        arguments: &CallArguments,
        pass: &Pass<'_, E>,
    ) -> std::result::Result<CallArguments, E> {
        match arguments {
            CallArguments::Sequence(items) => self.walk_sequence(items, pass),
            CallArguments::Mapping(map) => Ok(CallArguments::Mapping(self.walk_map(map, pass)?)),
        }
    }

    fn walk_sequence<E>(
        &self,
        items: &[ConfigValue],
        pass: &Pass<'_, E>,
    ) -> std::result::Result<CallArguments, E> {
        let mut kept = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if !self.is_ellipsis(item, pass) {
                kept.push((index, self.walk_value(item, pass)?));
            }
        }

        let contiguous = kept.iter().enumerate().all(|(slot, (index, _))| slot == *index);
        if contiguous {
            Ok(CallArguments::Sequence(
                kept.into_iter().map(|(_, value)| value).collect(),
            ))
        } else {
            Ok(CallArguments::Mapping(
                kept.into_iter()
                    .map(|(index, value)| (MapKey::Index(index), value))
                    .collect(),
            ))
        }
    }

    fn walk_map<E>(&self, map: &ConfigMap, pass: &Pass<'_, E>) -> std::result::Result<ConfigMap, E> {
        let mut walked = ConfigMap::new();
        for (key, value) in map.iter() {
            if !self.is_ellipsis(value, pass) {
                walked.insert(key.clone(), self.walk_value(value, pass)?);
            }
        }
        Ok(walked)
    }
}
