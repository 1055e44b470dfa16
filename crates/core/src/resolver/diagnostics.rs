// Per-candidate diagnostics for a cascade run.

use serde::{Deserialize, Serialize};

/// Which step of the cascade produced a candidate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStep {
    OwningCollection,
    PrefixDefault,
    BasicView,
    EntityOverride,
    TypeOverride,
    Global,
}

/// What happened to a candidate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CandidateDisposition {
    /// The resolved configuration entered the result set.
    Added,
    /// The resolved id was already present; the earlier position wins.
    Duplicate,
    /// The step contributed nothing (no or malformed entity payload).
    Skipped,
}

/// One evaluated candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidateDiagnostic {
    pub step: CandidateStep,
    /// Candidate name consulted; `None` for the bare default lookup.
    pub name: Option<String>,
    pub resolved_id: Option<String>,
    /// The registry had no entry for the name and substituted its default.
    pub fallback: bool,
    pub disposition: CandidateDisposition,
}

impl CandidateDiagnostic {
    pub fn resolved(
        step: CandidateStep,
        name: Option<String>,
        resolved_id: String,
        fallback: bool,
        added: bool,
    ) -> Self {
        Self {
            step,
            name,
            resolved_id: Some(resolved_id),
            fallback,
            disposition: if added {
                CandidateDisposition::Added
            } else {
                CandidateDisposition::Duplicate
            },
        }
    }

    pub fn skipped(step: CandidateStep) -> Self {
        Self {
            step,
            name: None,
            resolved_id: None,
            fallback: false,
            disposition: CandidateDisposition::Skipped,
        }
    }
}

/// Trace of a full cascade run, in evaluation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolutionReport {
    pub prefix: Option<String>,
    pub candidates: Vec<CandidateDiagnostic>,
}

impl ResolutionReport {
    pub fn new(prefix: Option<&str>) -> Self {
        Self {
            prefix: prefix.map(str::to_string),
            candidates: Vec::new(),
        }
    }

    pub fn push(&mut self, candidate: CandidateDiagnostic) {
        self.candidates.push(candidate);
    }

    /// Number of candidates that entered the result set.
    pub fn added_count(&self) -> usize {
        self.candidates
            .iter()
            .filter(|candidate| candidate.disposition == CandidateDisposition::Added)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_maps_insertion_to_disposition() {
        let added = CandidateDiagnostic::resolved(
            CandidateStep::Global,
            Some("global".to_string()),
            "global".to_string(),
            false,
            true,
        );
        assert_eq!(added.disposition, CandidateDisposition::Added);

        let duplicate = CandidateDiagnostic::resolved(
            CandidateStep::BasicView,
            Some("dspacebasic".to_string()),
            "default".to_string(),
            true,
            false,
        );
        assert_eq!(duplicate.disposition, CandidateDisposition::Duplicate);
        assert!(duplicate.fallback);
    }

    #[test]
    fn added_count_ignores_duplicates_and_skips() {
        let mut report = ResolutionReport::new(Some("workspace"));
        report.push(CandidateDiagnostic::resolved(
            CandidateStep::OwningCollection,
            Some("workspace.123456789/2".to_string()),
            "default".to_string(),
            true,
            true,
        ));
        report.push(CandidateDiagnostic::resolved(
            CandidateStep::PrefixDefault,
            Some("workspace".to_string()),
            "default".to_string(),
            true,
            false,
        ));
        report.push(CandidateDiagnostic::skipped(CandidateStep::EntityOverride));

        assert_eq!(report.added_count(), 1);
        assert_eq!(report.prefix.as_deref(), Some("workspace"));
    }
}
