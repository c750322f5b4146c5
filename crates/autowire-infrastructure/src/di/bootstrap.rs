//! Wiring Context Bootstrap
//!
//! ```text
//! AppConfig ─┬─> NameResolver          (naming.separator)
//!            ├─> PlaceholderExpander   (expansion.*)
//!            └─> DeferredCallProcessor (deferred.*) ──> ConstantResolver
//!  ServiceRegistry ──> ArgumentAutowirer
//! ```
//!
//! The context owns the configuration and the shared collaborators; engines
//! are cheap views built on demand and borrow from it.

use crate::config::AppConfig;
use crate::config::loader::validate_app_config;
use crate::registry::{ConstantTable, InMemoryServiceRegistry};
use autowire_application::{
    ArgumentAutowirer, DeferredCallProcessor, NameResolver, PlaceholderExpander,
};
use autowire_domain::error::Result;
use autowire_domain::ports::{ConstantResolver, ServiceRegistry};
use autowire_domain::value_objects::ParameterTree;
use std::sync::Arc;
use tracing::info;

/// Configuration plus collaborators shared by every resolution
#[derive(Clone)]
pub struct WiringContext {
    config: Arc<AppConfig>,
    registry: Arc<dyn ServiceRegistry>,
    constants: Arc<dyn ConstantResolver>,
}

impl WiringContext {
    /// Context over explicit collaborators
    pub fn new(
        config: AppConfig,
        registry: Arc<dyn ServiceRegistry>,
        constants: Arc<dyn ConstantResolver>,
    ) -> Result<Self> {
        validate_app_config(&config)?;
        Ok(Self {
            config: Arc::new(config),
            registry,
            constants,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn registry(&self) -> &dyn ServiceRegistry {
        self.registry.as_ref()
    }

    pub fn constants(&self) -> &dyn ConstantResolver {
        self.constants.as_ref()
    }

    /// Name resolver using the configured separator
    pub fn name_resolver(&self) -> NameResolver {
        NameResolver::new().with_separator(self.config.naming.separator_char())
    }

    /// Placeholder expander over `params` using the configured options
    pub fn expander<'p>(&self, params: &'p ParameterTree) -> PlaceholderExpander<'p> {
        PlaceholderExpander::new(params).with_options((&self.config.expansion).into())
    }

    /// Autowirer over the shared registry
    pub fn autowirer(&self) -> ArgumentAutowirer<'_> {
        ArgumentAutowirer::new(self.registry.as_ref())
    }

    /// Deferred-call processor over the shared constant resolver
    pub fn deferred_calls(&self) -> DeferredCallProcessor<'_> {
        DeferredCallProcessor::new(self.constants.as_ref()).with_options((&self.config.deferred).into())
    }
}

impl std::fmt::Debug for WiringContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WiringContext")
            .field("config", &self.config)
            .field("build_mode", &self.registry.build_mode())
            .finish_non_exhaustive()
    }
}

/// Initialize a wiring context with empty in-memory collaborators
pub fn init_wiring(config: AppConfig) -> Result<WiringContext> {
    info!(
        separator = %config.naming.separator,
        recursive = config.expansion.recursive,
        "Initializing wiring context"
    );
    WiringContext::new(
        config,
        Arc::new(InMemoryServiceRegistry::new()),
        Arc::new(ConstantTable::new()),
    )
}
