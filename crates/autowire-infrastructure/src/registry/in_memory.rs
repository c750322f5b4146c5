//! In-memory service registry
//!
//! Services are registered under a name together with every type they can be
//! autowired as (class, parents, interfaces). Lookups by type succeed only when
//! exactly one service was registered for it.

use autowire_domain::error::{Error, Result};
use autowire_domain::ports::ServiceRegistry;
use autowire_domain::value_objects::{BuildMode, ServiceReference, TypeName};
use dashmap::{DashMap, DashSet};
use tracing::debug;

/// Concurrent in-memory [`ServiceRegistry`]
///
/// # Example
///
/// ```
/// use autowire_domain::{ServiceRegistry, TypeName};
/// use autowire_infrastructure::InMemoryServiceRegistry;
///
/// let registry = InMemoryServiceRegistry::new();
/// registry.register("mailer", ["App.Mailer", "App.MailerInterface"]);
///
/// let found = registry.find_unique_by_type(&TypeName::new("App.MailerInterface")).unwrap();
/// assert_eq!(found.unwrap().name(), "mailer");
/// ```
#[derive(Debug, Default)]
pub struct InMemoryServiceRegistry {
    by_type: DashMap<TypeName, Vec<ServiceReference>>,
    known_types: DashSet<TypeName>,
    mode: BuildMode,
}

impl InMemoryServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry of a container still being built
    ///
    /// Autowired services come back as back-references instead of inline values.
    pub fn deferred() -> Self {
        Self {
            mode: BuildMode::Deferred,
            ..Self::default()
        }
    }

    pub fn with_build_mode(mut self, mode: BuildMode) -> Self {
        self.mode = mode;
        self
    }

    /// Register service `name` as autowirable by each of `types`
    pub fn register<N, I, T>(&self, name: N, types: I)
    where
        N: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        let reference = ServiceReference::new(name);
        for type_name in types {
            let type_name = type_name.into();
            debug!(service = %reference, type_name = %type_name, "Registering service");
            self.known_types.insert(type_name.clone());
            let mut services = self.by_type.entry(type_name).or_default();
            if !services.contains(&reference) {
                services.push(reference.clone());
            }
        }
    }

    /// Declare a type as known without registering a service for it
    pub fn declare_type(&self, type_name: impl Into<TypeName>) {
        self.known_types.insert(type_name.into());
    }

    /// Services registered for `type_name`, in registration order
    pub fn services_of(&self, type_name: &TypeName) -> Vec<ServiceReference> {
        self.by_type
            .get(type_name)
            .map(|services| services.clone())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

impl ServiceRegistry for InMemoryServiceRegistry {
    fn find_unique_by_type(&self, type_name: &TypeName) -> Result<Option<ServiceReference>> {
        let Some(services) = self.by_type.get(type_name) else {
            return Ok(None);
        };
        match services.as_slice() {
            [] => Ok(None),
            [service] => Ok(Some(service.clone())),
            candidates => Err(Error::ambiguous_service(
                type_name.as_str(),
                candidates.iter().map(ToString::to_string).collect(),
            )),
        }
    }

    fn is_known_type(&self, type_name: &TypeName) -> bool {
        self.known_types.contains(type_name)
    }

    fn build_mode(&self) -> BuildMode {
        self.mode
    }
}
