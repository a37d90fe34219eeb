//! Errors reported by fixture checks.

use thiserror::Error;

/// A fixture check that did not hold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("expected label key '{key}' with value '{expected}' not found: labels = {labels:?}")]
    LabelMissing {
        key: String,
        expected: String,
        labels: Vec<(String, String)>,
    },

    #[error("label value for key '{key}' does not match: expected '{expected}', but found '{actual}'")]
    LabelMismatch {
        key: String,
        expected: String,
        actual: String,
    },

    #[error("expected initial_node_count {expected} but found {actual}")]
    NodeCount { expected: i64, actual: i64 },

    #[error("expected machine type '{expected}', found '{actual}'")]
    MachineType { expected: String, actual: String },

    #[error("tags not found: {missing:?}")]
    TagsMissing { missing: Vec<String> },
}
