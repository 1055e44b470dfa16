use anyhow::{Context, Result};
use std::path::Path;
use test_registry::ResolutionScenario;

/// Parse a resolution scenario from a YAML file.
pub fn parse_scenario(path: &Path) -> Result<ResolutionScenario> {
    if !path.exists() {
        anyhow::bail!(
            "Scenario file not found: {}\nPlease check the file path and try again.",
            path.display()
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;

    // serde_path_to_error pins parse failures to the offending field
    let deserializer = serde_yaml::Deserializer::from_str(&content);
    let scenario: ResolutionScenario = serde_path_to_error::deserialize(deserializer)
        .with_context(|| {
            format!(
                "Failed to parse YAML from: {}\n\
                 This usually means there's a syntax error or missing required field.",
                path.display()
            )
        })?;

    scenario.validate().with_context(|| {
        format!(
            "Validation failed for scenario: {}\n\
             The YAML was parsed successfully but contains invalid data.",
            path.display()
        )
    })?;

    Ok(scenario)
}
