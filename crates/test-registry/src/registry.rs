use std::collections::HashMap;

use vitrine_core::model::DiscoveryConfiguration;
use vitrine_core::registry::ConfigurationRegistry;

/// In-memory configuration registry for test scenarios.
///
/// Configurations are keyed by their id, which doubles as the lookup name.
pub struct InMemoryConfigurationRegistry {
    configurations: HashMap<String, DiscoveryConfiguration>,
    default: DiscoveryConfiguration,
    ignored_fields: HashMap<i32, Vec<String>>,
}

impl InMemoryConfigurationRegistry {
    pub fn new(default: DiscoveryConfiguration) -> Self {
        Self {
            configurations: HashMap::new(),
            default,
            ignored_fields: HashMap::new(),
        }
    }

    /// Register a configuration under its own id.
    pub fn with_configuration(mut self, configuration: DiscoveryConfiguration) -> Self {
        self.configurations
            .insert(configuration.id.clone(), configuration);
        self
    }

    pub fn with_ignored_fields(mut self, object_type: i32, fields: Vec<String>) -> Self {
        self.ignored_fields.insert(object_type, fields);
        self
    }
}

impl ConfigurationRegistry for InMemoryConfigurationRegistry {
    fn configuration(&self, name: &str) -> Option<DiscoveryConfiguration> {
        self.configurations.get(name).cloned()
    }

    fn default_configuration(&self) -> DiscoveryConfiguration {
        self.default.clone()
    }

    fn ignored_metadata_fields(&self, object_type: i32) -> Vec<String> {
        self.ignored_fields
            .get(&object_type)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::model::object::TYPE_ITEM;

    #[test]
    fn lookup_is_exact_and_default_is_separate() {
        let registry =
            InMemoryConfigurationRegistry::new(DiscoveryConfiguration::named("default"))
                .with_configuration(DiscoveryConfiguration::named("dspacebasic"));

        assert_eq!(
            registry.configuration("dspacebasic").unwrap().id,
            "dspacebasic"
        );
        assert!(registry.configuration("missing").is_none());
        assert_eq!(registry.default_configuration().id, "default");
    }

    #[test]
    fn ignored_fields_default_to_empty() {
        let registry =
            InMemoryConfigurationRegistry::new(DiscoveryConfiguration::named("default"))
                .with_ignored_fields(TYPE_ITEM, vec!["dc.description.provenance".to_string()]);

        assert_eq!(
            registry.ignored_metadata_fields(TYPE_ITEM),
            vec!["dc.description.provenance".to_string()]
        );
        assert!(registry.ignored_metadata_fields(99).is_empty());
    }
}
