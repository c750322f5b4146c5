//! Placeholder Expansion Use Case
//!
//! Walks a configuration tree and substitutes `%name%` placeholders found in
//! scalar strings with values from a [`ParameterTree`].
//!
//! ## Substitution rules
//!
//! ```text
//! "%port%"          port = 8080         → 8080          (full match keeps the type)
//! "v=%port%"        port = 8080         → "v=8080"
//! "100%%"                               → "100%"
//! "a%dir%b"         dir  = <code foo()> → <code 'a' . foo() . 'b'>
//! "x%list%"         list = [1, 2]       → NonScalarInterpolation
//! ```
//!
//! With a recursion guard active, looked-up values are expanded again and a
//! name seen twice along one substitution chain is a `CircularReference`.

use crate::templates::{Fragment, Segment, Template, render_code, render_text};
use autowire_domain::constants::{DEFAULT_CONCAT_OPERATOR, PLACEHOLDER_DELIMITER};
use autowire_domain::error::{Error, Result};
use autowire_domain::value_objects::{
    CallArguments, ConfigMap, ConfigValue, DeferredCall, ParameterTree, Scalar,
};
use tracing::{debug, trace};

/// Expansion settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionOptions {
    /// Whether [`PlaceholderExpander::expand`] re-expands looked-up values
    pub recursive: bool,
    /// Operator joining fragments of code-mode output
    pub concat_operator: String,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            concat_operator: DEFAULT_CONCAT_OPERATOR.to_string(),
        }
    }
}

/// Parameter names currently being substituted, outermost first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecursionGuard {
    chain: Vec<String>,
}

impl RecursionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.chain.iter().any(|visited| visited == name)
    }

    /// Guard extended with `name`
    pub fn with(&self, name: &str) -> Self {
        let mut chain = self.chain.clone();
        chain.push(name.to_string());
        Self { chain }
    }

    pub fn chain(&self) -> &[String] {
        &self.chain
    }
}

/// Placeholder expander bound to one parameter tree
pub struct PlaceholderExpander<'p> {
    params: &'p ParameterTree,
    options: ExpansionOptions,
}

impl<'p> PlaceholderExpander<'p> {
    pub fn new(params: &'p ParameterTree) -> Self {
        Self {
            params,
            options: ExpansionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExpansionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ExpansionOptions {
        &self.options
    }

    /// Expand `value`, recursing into looked-up values if configured to
    pub fn expand(&self, value: &ConfigValue) -> Result<ConfigValue> {
        debug!(recursive = self.options.recursive, kind = value.kind(), "Expanding placeholders");
        if self.options.recursive {
            self.expand_with(value, Some(&RecursionGuard::new()))
        } else {
            self.expand_with(value, None)
        }
    }

    /// Expand `value`, re-expanding every looked-up value
    pub fn expand_recursive(&self, value: &ConfigValue) -> Result<ConfigValue> {
        self.expand_with(value, Some(&RecursionGuard::new()))
    }

    /// Expand `value` under an explicit guard
    ///
    /// `None` substitutes looked-up values verbatim. `Some(guard)` expands them
    /// again with their name added to the guard.
    pub fn expand_with(
        &self,
        value: &ConfigValue,
        guard: Option<&RecursionGuard>,
    ) -> Result<ConfigValue> {
        match value {
            ConfigValue::Scalar(Scalar::String(text)) => self.expand_string(text, guard),
            ConfigValue::Sequence(items) => Ok(ConfigValue::Sequence(self.expand_items(items, guard)?)),
            ConfigValue::Mapping(map) => Ok(ConfigValue::Mapping(self.expand_map(map, guard)?)),
            ConfigValue::Deferred(call) => Ok(ConfigValue::from(self.expand_call(call, guard)?)),
            ConfigValue::Scalar(_) | ConfigValue::Code(_) => Ok(value.clone()),
        }
    }

    fn expand_items(
        &self,
        items: &[ConfigValue],
        guard: Option<&RecursionGuard>,
    ) -> Result<Vec<ConfigValue>> {
        items.iter().map(|item| self.expand_with(item, guard)).collect()
    }

    fn expand_map(&self, map: &ConfigMap, guard: Option<&RecursionGuard>) -> Result<ConfigMap> {
        map.iter()
            .map(|(key, value)| Ok((key.clone(), self.expand_with(value, guard)?)))
            .collect()
    }

    fn expand_call(&self, call: &DeferredCall, guard: Option<&RecursionGuard>) -> Result<DeferredCall> {
        let entity = self.expand_with(&call.entity, guard)?;
        let arguments = match &call.arguments {
            CallArguments::Sequence(items) => CallArguments::Sequence(self.expand_items(items, guard)?),
            CallArguments::Mapping(map) => CallArguments::Mapping(self.expand_map(map, guard)?),
        };
        Ok(DeferredCall { entity, arguments })
    }

    fn expand_string(&self, text: &str, guard: Option<&RecursionGuard>) -> Result<ConfigValue> {
        let template = Template::parse(text);
        if !template.has_placeholders() {
            return Ok(ConfigValue::string(text));
        }
        if let Some(name) = template.full_match() {
            return self.lookup(name, guard);
        }

        let mut fragments = Vec::with_capacity(template.segments().len());
        let mut code_mode = false;
        for segment in template.segments() {
            match *segment {
                Segment::Literal(literal) => fragments.push(Fragment::Text(literal.to_string())),
                Segment::Placeholder("") => {
                    fragments.push(Fragment::Text(PLACEHOLDER_DELIMITER.to_string()));
                }
                Segment::Placeholder(name) => match self.lookup(name, guard)? {
                    ConfigValue::Scalar(scalar) => fragments.push(Fragment::Text(scalar.to_text())),
                    ConfigValue::Code(code) => {
                        code_mode = true;
                        fragments.push(Fragment::Code(code));
                    }
                    ConfigValue::Sequence(_) | ConfigValue::Mapping(_) | ConfigValue::Deferred(_) => {
                        return Err(Error::non_scalar_interpolation(name, text));
                    }
                },
            }
        }

        if code_mode {
            trace!(template = text, "Dynamic parameter spliced, emitting code");
            Ok(ConfigValue::Code(render_code(fragments, &self.options.concat_operator)))
        } else {
            Ok(ConfigValue::string(render_text(fragments)))
        }
    }

    fn lookup(&self, name: &str, guard: Option<&RecursionGuard>) -> Result<ConfigValue> {
        if let Some(guard) = guard {
            if guard.contains(name) {
                let chain = guard.chain().iter().map(String::as_str).chain([name]);
                return Err(Error::circular_reference(chain));
            }
        }

        let value = self
            .params
            .get(name)
            .ok_or_else(|| Error::missing_parameter(name))?;
        trace!(name, kind = value.kind(), "Substituting parameter");

        match guard {
            Some(guard) => self.expand_with(value, Some(&guard.with(name))),
            None => Ok(value.clone()),
        }
    }
}
