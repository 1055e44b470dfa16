use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use test_registry::{ResolutionScenario, ResolutionTarget};
use vitrine_core::model::{WorkflowItem, WorkspaceItem};
use vitrine_core::resolver::ResolutionReport;
use vitrine_core::ConfigurationResolver;
use walkdir::WalkDir;

use crate::harness::comparator::{compare_ids, IdMismatch};
use crate::harness::parser::parse_scenario;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Pass,
    Fail,
    Error,
}

/// Result of one executed scenario.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub scenario_name: String,
    pub status: CheckStatus,
    pub actual_ids: Vec<String>,
    pub mismatches: Vec<IdMismatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ResolutionReport>,
}

impl CheckOutcome {
    pub fn error(scenario_name: String, error: &anyhow::Error) -> Self {
        Self {
            scenario_name,
            status: CheckStatus::Error,
            actual_ids: Vec::new(),
            mismatches: Vec::new(),
            error: Some(format!("{error:#}")),
            report: None,
        }
    }
}

/// Aggregated suite counts plus the per-scenario outcomes.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteOutcome {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub results: Vec<CheckOutcome>,
}

/// Execute one parsed scenario against in-memory collaborators.
pub fn execute_scenario(scenario: &ResolutionScenario) -> Result<CheckOutcome> {
    let resolver = ConfigurationResolver::new(
        Arc::new(scenario.registry.registry()),
        Arc::new(scenario.registry.property_source()),
    );

    let outcome = match &scenario.target {
        ResolutionTarget::Item { item } => resolver.item_configurations(item),
        ResolutionTarget::Workspace { collection, item } => {
            resolver.workspace_configurations(&WorkspaceItem {
                collection: collection.clone(),
                item: item.clone(),
            })
        }
        ResolutionTarget::Workflow { collection, item } => {
            resolver.workflow_configurations(&WorkflowItem {
                collection: collection.clone(),
                item: item.clone(),
            })
        }
    }
    .context("resolution failed")?;

    let actual_ids: Vec<String> = outcome
        .configurations
        .iter()
        .map(|configuration| configuration.id.clone())
        .collect();

    let mut mismatches = compare_ids(&scenario.expected.configuration_ids, &actual_ids);
    if let Some(expected_global) = scenario.expected.global_defined {
        let actual_global = resolver.global_configuration().is_some();
        if expected_global != actual_global {
            mismatches.push(IdMismatch::Global {
                expected: expected_global,
                actual: actual_global,
            });
        }
    }

    let status = if mismatches.is_empty() {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail
    };

    Ok(CheckOutcome {
        scenario_name: scenario.name.clone(),
        status,
        actual_ids,
        mismatches,
        error: None,
        report: Some(outcome.report),
    })
}

/// Parse and execute every scenario file, folding parse and execution
/// failures into `Error` outcomes instead of aborting the suite.
pub fn execute_suite(paths: &[PathBuf]) -> SuiteOutcome {
    let mut results = Vec::with_capacity(paths.len());
    for path in paths {
        let result = match parse_scenario(path) {
            Ok(scenario) => match execute_scenario(&scenario) {
                Ok(outcome) => outcome,
                Err(error) => CheckOutcome::error(scenario.name.clone(), &error),
            },
            Err(error) => CheckOutcome::error(path.display().to_string(), &error),
        };
        results.push(result);
    }

    let passed = count(&results, CheckStatus::Pass);
    let failed = count(&results, CheckStatus::Fail);
    let errors = count(&results, CheckStatus::Error);
    SuiteOutcome {
        total: results.len(),
        passed,
        failed,
        errors,
        results,
    }
}

/// Find scenario files under a directory, sorted for stable suite order.
pub fn discover_scenarios(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        match entry.path().extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => paths.push(entry.into_path()),
            _ => {}
        }
    }
    paths.sort();
    Ok(paths)
}

fn count(results: &[CheckOutcome], status: CheckStatus) -> usize {
    results.iter().filter(|r| r.status == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const PASSING: &str = r#"
name: bare item
registry:
  default:
    id: default
  configurations:
    - id: dspacebasic
    - id: dspacePublication
    - id: global
target:
  kind: item
  item:
    handle: 123456789/7
    type_label: Publication
expected:
  configuration_ids: [default, dspacebasic, dspacePublication, global]
  global_defined: true
"#;

    #[test]
    fn passing_scenario_reports_pass() {
        let scenario: ResolutionScenario = serde_yaml::from_str(PASSING).unwrap();
        let outcome = execute_scenario(&scenario).unwrap();

        assert_eq!(outcome.status, CheckStatus::Pass);
        assert!(outcome.mismatches.is_empty());
        assert_eq!(outcome.report.unwrap().prefix, None);
    }

    #[test]
    fn wrong_expectation_reports_fail_with_mismatches() {
        let mut scenario: ResolutionScenario = serde_yaml::from_str(PASSING).unwrap();
        scenario.expected.configuration_ids = vec!["default".to_string()];
        scenario.expected.global_defined = Some(false);

        let outcome = execute_scenario(&scenario).unwrap();

        assert_eq!(outcome.status, CheckStatus::Fail);
        assert!(outcome
            .mismatches
            .iter()
            .any(|m| matches!(m, IdMismatch::Extra { .. })));
        assert!(outcome
            .mismatches
            .iter()
            .any(|m| matches!(m, IdMismatch::Global { .. })));
    }

    #[test]
    fn suite_folds_parse_failures_into_error_outcomes() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.yaml");
        let bad = dir.path().join("bad.yaml");
        fs::write(&good, PASSING).unwrap();
        fs::write(&bad, "name: [\n").unwrap();

        let paths = discover_scenarios(dir.path()).unwrap();
        assert_eq!(paths.len(), 2);

        let suite = execute_suite(&paths);
        assert_eq!(suite.total, 2);
        assert_eq!(suite.passed, 1);
        assert_eq!(suite.errors, 1);
    }

    #[test]
    fn discovery_ignores_non_yaml_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "not a scenario").unwrap();
        fs::write(dir.path().join("scenario.yml"), PASSING).unwrap();

        let paths = discover_scenarios(dir.path()).unwrap();
        assert_eq!(paths.len(), 1);
    }
}
