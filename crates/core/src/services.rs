//! Name-keyed service container and the resolved collaborator handles.
//!
//! The container is a minimal type-erased registry: services register under
//! a well-known name and come back out through a typed downcast.
//! [`DiscoveryServices`] resolves the discovery collaborators out of it
//! exactly once and then hands out immutable `Arc` clones, so there is no
//! process-wide mutable state and a second resolution yields the same
//! instances.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::model::ViewHighlightConfiguration;
use crate::registry::{ConfigurationRegistry, PropertySource};

/// Container name of the search service.
pub const SEARCH_SERVICE: &str = "search-service";
/// Container name of the configuration registry.
pub const CONFIGURATION_REGISTRY: &str = "configuration-registry";
/// Container name of the property source.
pub const PROPERTY_SOURCE: &str = "property-source";

/// The search backend. Opaque at this layer; the only contract is that the
/// container hands back the one registered instance.
pub trait SearchService: Send + Sync {
    fn endpoint(&self) -> &str;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("no service registered under '{name}' with the requested type")]
    NotRegistered { name: &'static str },
}

/// Name-keyed, type-erased service registry.
#[derive(Default)]
pub struct ServiceContainer {
    services: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl ServiceContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service under a name, replacing any previous entry.
    pub fn register<S: Any + Send + Sync>(&mut self, name: impl Into<String>, service: S) {
        self.services.insert(name.into(), Box::new(service));
    }

    /// Typed lookup. `None` when the name is unregistered or holds a
    /// different type.
    pub fn service_by_name<S: Any + Send + Sync + Clone>(&self, name: &str) -> Option<S> {
        self.services
            .get(name)
            .and_then(|service| service.downcast_ref::<S>())
            .cloned()
    }
}

/// View-and-highlight settings registered under an arbitrary name.
pub fn view_highlight_configuration(
    container: &ServiceContainer,
    name: &str,
) -> Option<Arc<ViewHighlightConfiguration>> {
    container.service_by_name::<Arc<ViewHighlightConfiguration>>(name)
}

/// The discovery collaborators, resolved once and held immutably.
#[derive(Clone)]
pub struct DiscoveryServices {
    search: Arc<dyn SearchService>,
    registry: Arc<dyn ConfigurationRegistry>,
    properties: Arc<dyn PropertySource>,
}

impl std::fmt::Debug for DiscoveryServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveryServices").finish_non_exhaustive()
    }
}

impl DiscoveryServices {
    pub fn new(
        search: Arc<dyn SearchService>,
        registry: Arc<dyn ConfigurationRegistry>,
        properties: Arc<dyn PropertySource>,
    ) -> Self {
        Self {
            search,
            registry,
            properties,
        }
    }

    /// Resolve the three discovery collaborators from the container.
    pub fn from_container(container: &ServiceContainer) -> Result<Self, ServiceError> {
        let search = container
            .service_by_name::<Arc<dyn SearchService>>(SEARCH_SERVICE)
            .ok_or(ServiceError::NotRegistered {
                name: SEARCH_SERVICE,
            })?;
        let registry = container
            .service_by_name::<Arc<dyn ConfigurationRegistry>>(CONFIGURATION_REGISTRY)
            .ok_or(ServiceError::NotRegistered {
                name: CONFIGURATION_REGISTRY,
            })?;
        let properties = container
            .service_by_name::<Arc<dyn PropertySource>>(PROPERTY_SOURCE)
            .ok_or(ServiceError::NotRegistered {
                name: PROPERTY_SOURCE,
            })?;

        Ok(Self::new(search, registry, properties))
    }

    pub fn search(&self) -> &Arc<dyn SearchService> {
        &self.search
    }

    pub fn registry(&self) -> &Arc<dyn ConfigurationRegistry> {
        &self.registry
    }

    pub fn properties(&self) -> &Arc<dyn PropertySource> {
        &self.properties
    }
}
