use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use vitrine_core::model::DiscoveryConfiguration;

use crate::errors::FixtureError;
use crate::properties::InMemoryPropertySource;
use crate::registry::InMemoryConfigurationRegistry;

/// Declarative registry contents for a scenario: the default configuration,
/// the named entries, the site properties, and the per-type ignored fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryFixture {
    pub default: DiscoveryConfiguration,
    #[serde(default)]
    pub configurations: Vec<DiscoveryConfiguration>,
    /// module -> key -> value
    #[serde(default)]
    pub properties: HashMap<String, HashMap<String, String>>,
    #[serde(default)]
    pub ignored_metadata_fields: HashMap<i32, Vec<String>>,
}

impl RegistryFixture {
    /// Load and validate a fixture from a YAML file.
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fixture: Self =
            serde_yaml::from_str(&content).map_err(|source| FixtureError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        fixture.validate()?;
        Ok(fixture)
    }

    pub fn validate(&self) -> Result<(), FixtureError> {
        let mut seen = HashSet::new();
        for configuration in &self.configurations {
            if configuration.id.trim().is_empty() {
                return Err(FixtureError::Invalid {
                    message: "configuration with an empty id".to_string(),
                });
            }
            if !seen.insert(configuration.id.as_str()) {
                return Err(FixtureError::Invalid {
                    message: format!("duplicate configuration id '{}'", configuration.id),
                });
            }
        }
        Ok(())
    }

    /// Materialize the registry collaborator.
    pub fn registry(&self) -> InMemoryConfigurationRegistry {
        let mut registry = InMemoryConfigurationRegistry::new(self.default.clone());
        for configuration in &self.configurations {
            registry = registry.with_configuration(configuration.clone());
        }
        for (object_type, fields) in &self.ignored_metadata_fields {
            registry = registry.with_ignored_fields(*object_type, fields.clone());
        }
        registry
    }

    /// Materialize the property-source collaborator.
    pub fn property_source(&self) -> InMemoryPropertySource {
        let mut source = InMemoryPropertySource::new();
        for (module, entries) in &self.properties {
            for (key, value) in entries {
                source = source.with_property(module, key, value.clone());
            }
        }
        source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use vitrine_core::registry::{ConfigurationRegistry, PropertySource};

    const FIXTURE: &str = r#"
default:
  id: default
configurations:
  - id: dspacebasic
  - id: global
properties:
  cris:
    facet.type.Publication: "publication###publications"
ignored_metadata_fields:
  2:
    - dc.description.provenance
"#;

    #[test]
    fn load_materializes_both_collaborators() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("registry.yaml");
        fs::write(&path, FIXTURE).unwrap();

        let fixture = RegistryFixture::load(&path).unwrap();
        let registry = fixture.registry();
        let properties = fixture.property_source();

        assert_eq!(registry.configuration("global").unwrap().id, "global");
        assert!(registry.configuration("missing").is_none());
        assert_eq!(registry.default_configuration().id, "default");
        assert_eq!(
            registry.ignored_metadata_fields(2),
            vec!["dc.description.provenance".to_string()]
        );
        assert_eq!(
            properties
                .property("cris", "facet.type.Publication")
                .as_deref(),
            Some("publication###publications")
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let error = RegistryFixture::load(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(error, FixtureError::Io { .. }));
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let fixture: RegistryFixture = serde_yaml::from_str(
            "default: {id: default}\nconfigurations:\n  - id: a\n  - id: a\n",
        )
        .unwrap();
        let error = fixture.validate().unwrap_err();
        assert!(error.to_string().contains("duplicate configuration id"));
    }
}
