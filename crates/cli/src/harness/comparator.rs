// Ordered comparison of expected vs actual configuration ids.

use serde::Serialize;
use std::collections::HashSet;

/// One difference between the expected and actual resolution result.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IdMismatch {
    /// Expected id never showed up.
    Missing { id: String },
    /// Actual id was not expected.
    Extra { id: String },
    /// Same ids, wrong order.
    Order {
        expected: Vec<String>,
        actual: Vec<String>,
    },
    /// The global-configuration expectation did not hold.
    Global { expected: bool, actual: bool },
}

/// Compare two ordered id lists. Membership differences are reported per id;
/// an order difference is reported once with both full lists.
pub fn compare_ids(expected: &[String], actual: &[String]) -> Vec<IdMismatch> {
    let expected_set: HashSet<&str> = expected.iter().map(String::as_str).collect();
    let actual_set: HashSet<&str> = actual.iter().map(String::as_str).collect();

    let mut mismatches = Vec::new();
    for id in expected {
        if !actual_set.contains(id.as_str()) {
            mismatches.push(IdMismatch::Missing { id: id.clone() });
        }
    }
    for id in actual {
        if !expected_set.contains(id.as_str()) {
            mismatches.push(IdMismatch::Extra { id: id.clone() });
        }
    }

    if mismatches.is_empty() && expected != actual {
        mismatches.push(IdMismatch::Order {
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        });
    }

    mismatches
}
