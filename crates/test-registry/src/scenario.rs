use std::path::Path;

use serde::{Deserialize, Serialize};
use vitrine_core::model::{Collection, Item};

use crate::errors::FixtureError;
use crate::fixture::RegistryFixture;

/// One resolution scenario: registry contents, a target, and the expected
/// ordered configuration ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionScenario {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub registry: RegistryFixture,
    pub target: ResolutionTarget,
    pub expected: Expectation,
}

/// What the scenario resolves for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionTarget {
    /// A published item; candidates come from all its collections.
    Item { item: Item },
    /// A workspace submission with its single collection and draft item.
    Workspace { collection: Collection, item: Item },
    /// A submission under workflow review.
    Workflow { collection: Collection, item: Item },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expectation {
    /// Ordered ids the cascade must produce.
    pub configuration_ids: Vec<String>,
    /// When set, whether an explicit global configuration must exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_defined: Option<bool>,
}

impl ResolutionScenario {
    /// Load and validate a scenario from a YAML file.
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario: Self =
            serde_yaml::from_str(&content).map_err(|source| FixtureError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<(), FixtureError> {
        if self.name.trim().is_empty() {
            return Err(FixtureError::Invalid {
                message: "scenario name must not be empty".to_string(),
            });
        }
        if self.expected.configuration_ids.is_empty() {
            return Err(FixtureError::Invalid {
                message: "expected.configuration_ids must not be empty".to_string(),
            });
        }
        self.registry.validate()
    }
}
