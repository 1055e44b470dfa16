use anyhow::Result;

use crate::harness::comparator::IdMismatch;
use crate::harness::executor::{CheckOutcome, CheckStatus, SuiteOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Report one scenario result in human-readable form.
pub fn report_outcome(outcome: &CheckOutcome, verbose: bool) {
    println!("Scenario: {}", outcome.scenario_name);

    match outcome.status {
        CheckStatus::Pass => {
            println!("Status: PASS");
        }
        CheckStatus::Fail => {
            println!("Status: FAIL");
            println!();
            println!("Mismatches ({}):", outcome.mismatches.len());
            for mismatch in &outcome.mismatches {
                match mismatch {
                    IdMismatch::Missing { id } => println!("  ✗ Missing id: {id}"),
                    IdMismatch::Extra { id } => println!("  ✗ Extra id: {id}"),
                    IdMismatch::Order { expected, actual } => {
                        println!("  ✗ Order mismatch");
                        println!("      Expected: {expected:?}");
                        println!("      Actual:   {actual:?}");
                    }
                    IdMismatch::Global { expected, actual } => {
                        println!(
                            "  ✗ Global configuration: expected defined={expected}, got defined={actual}"
                        );
                    }
                }
            }
        }
        CheckStatus::Error => {
            println!("Status: ERROR");
            if let Some(error) = &outcome.error {
                println!("  {error}");
            }
        }
    }

    if verbose {
        if let Some(report) = &outcome.report {
            println!();
            println!("Candidates:");
            for candidate in &report.candidates {
                println!(
                    "  {:?} {} -> {} [{:?}]",
                    candidate.step,
                    candidate.name.as_deref().unwrap_or("<default>"),
                    candidate.resolved_id.as_deref().unwrap_or("-"),
                    candidate.disposition
                );
            }
        }
    }
    println!();
}

/// Report one scenario result as JSON on stdout.
pub fn report_outcome_json(outcome: &CheckOutcome) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}

/// Report a whole suite in human-readable form.
pub fn report_suite(suite: &SuiteOutcome, verbose: bool) {
    for outcome in &suite.results {
        report_outcome(outcome, verbose);
    }
    println!(
        "Suite: {} total, {} passed, {} failed, {} errors",
        suite.total, suite.passed, suite.failed, suite.errors
    );
}

/// Report a whole suite as JSON on stdout.
pub fn report_suite_json(suite: &SuiteOutcome) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(suite)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suite_outcome_serializes_for_json_reporting() {
        let suite = SuiteOutcome {
            total: 1,
            passed: 0,
            failed: 1,
            errors: 0,
            results: vec![CheckOutcome {
                scenario_name: "sample".to_string(),
                status: CheckStatus::Fail,
                actual_ids: vec!["default".to_string()],
                mismatches: vec![IdMismatch::Missing {
                    id: "global".to_string(),
                }],
                error: None,
                report: None,
            }],
        };

        let json = serde_json::to_value(&suite).unwrap();
        assert_eq!(json["results"][0]["status"], "fail");
        assert_eq!(json["results"][0]["mismatches"][0]["kind"], "missing");
    }
}
