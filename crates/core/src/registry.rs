//! Collaborator contracts for configuration lookup.
//!
//! The registry owns every named configuration plus the site-wide default.
//! Lookups return `Option` on purpose: a missing name is not an error, and
//! the caller decides where the fallback applies instead of the registry
//! hiding it.

use crate::model::DiscoveryConfiguration;

/// Registry of named discovery configurations.
pub trait ConfigurationRegistry: Send + Sync {
    /// Exact lookup. `None` means the name is not registered.
    fn configuration(&self, name: &str) -> Option<DiscoveryConfiguration>;

    /// The site-wide default returned when a name is absent.
    fn default_configuration(&self) -> DiscoveryConfiguration;

    /// Metadata fields excluded from discovery for an object-type code.
    fn ignored_metadata_fields(&self, object_type: i32) -> Vec<String>;
}

/// Module-scoped key/value site configuration, the source of the
/// system-entity override payloads.
pub trait PropertySource: Send + Sync {
    fn property(&self, module: &str, key: &str) -> Option<String>;
}
