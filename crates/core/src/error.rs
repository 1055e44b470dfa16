use thiserror::Error;

/// Fault raised by a persistence-backed collaborator while traversing
/// object relationships. The resolver propagates these unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataAccessError {
    #[error("failed to load owning collections for item '{handle}': {message}")]
    CollectionTraversal { handle: String, message: String },

    #[error("failed to load the {relation} of an in-progress submission: {message}")]
    SubmissionTraversal {
        relation: &'static str,
        message: String,
    },

    #[error("store operation failed: {message}")]
    OperationFailed { message: String },
}
