use anyhow::{bail, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::harness::{
    discover_scenarios, execute_scenario, execute_suite, parse_scenario, report_outcome,
    report_outcome_json, report_suite, report_suite_json, CheckOutcome, CheckStatus, OutputFormat,
};

const DEFAULT_SUITE_DIR: &str = "tests/scenarios";

enum ExecutionTarget<'a> {
    Suite(&'a Path),
    Single(&'a Path),
}

/// Execute resolution scenarios
#[derive(Debug, Parser)]
pub struct CheckCommand {
    /// Path to the scenario YAML file (for single scenario mode)
    #[arg(value_name = "SCENARIO")]
    pub scenario_path: Option<PathBuf>,

    /// Execute all scenarios in directory (suite mode)
    #[arg(long, value_name = "DIR")]
    pub suite: Option<PathBuf>,

    /// Show the per-candidate resolution trace
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (human, json)
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub output: String,
}

impl CheckCommand {
    pub fn execute(&self) -> Result<i32> {
        match self.execution_target() {
            ExecutionTarget::Suite(suite_path) => self.execute_suite(suite_path),
            ExecutionTarget::Single(scenario_path) => self.execute_single(scenario_path),
        }
    }

    fn execution_target(&self) -> ExecutionTarget<'_> {
        if let Some(suite_path) = &self.suite {
            ExecutionTarget::Suite(suite_path)
        } else if let Some(scenario_path) = &self.scenario_path {
            ExecutionTarget::Single(scenario_path)
        } else {
            ExecutionTarget::Suite(Path::new(DEFAULT_SUITE_DIR))
        }
    }

    fn execute_single(&self, scenario_path: &Path) -> Result<i32> {
        let output_format = self.output_format()?;

        let scenario = match parse_scenario(scenario_path) {
            Ok(scenario) => scenario,
            Err(error) => {
                let outcome =
                    CheckOutcome::error(scenario_path.display().to_string(), &error);
                self.report_single(&outcome, output_format)?;
                return Ok(2);
            }
        };

        let outcome = match execute_scenario(&scenario) {
            Ok(outcome) => outcome,
            Err(error) => {
                let outcome = CheckOutcome::error(scenario.name.clone(), &error);
                self.report_single(&outcome, output_format)?;
                return Ok(2);
            }
        };

        self.report_single(&outcome, output_format)?;

        Ok(match outcome.status {
            CheckStatus::Pass => 0,
            CheckStatus::Fail => 1,
            CheckStatus::Error => 2,
        })
    }

    fn execute_suite(&self, suite_path: &Path) -> Result<i32> {
        let output_format = self.output_format()?;

        let scenarios = discover_scenarios(suite_path)?;
        if scenarios.is_empty() {
            eprintln!("No scenarios found in: {}", suite_path.display());
            return Ok(2);
        }

        if output_format == OutputFormat::Human {
            println!(
                "Discovered {} scenarios in: {}",
                scenarios.len(),
                suite_path.display()
            );
            println!();
        }

        let suite = execute_suite(&scenarios);

        match output_format {
            OutputFormat::Human => report_suite(&suite, self.verbose),
            OutputFormat::Json => report_suite_json(&suite)?,
        }

        Ok(if suite.errors > 0 {
            2
        } else if suite.failed > 0 {
            1
        } else {
            0
        })
    }

    fn output_format(&self) -> Result<OutputFormat> {
        match self.output.to_ascii_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => bail!("Unsupported output format: {other}. Use human or json."),
        }
    }

    fn report_single(&self, outcome: &CheckOutcome, output_format: OutputFormat) -> Result<()> {
        match output_format {
            OutputFormat::Human => report_outcome(outcome, self.verbose),
            OutputFormat::Json => report_outcome_json(outcome)?,
        }
        Ok(())
    }
}
