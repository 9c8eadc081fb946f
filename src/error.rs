//! Error Types
//!
//! Validation failures shown to the user and storage failures that are
//! only ever logged.

use thiserror::Error;

use crate::models::TodoId;

/// Rejected new-todo input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Todo cannot be empty")]
    Empty,
    #[error("Todo cannot be more than {max} characters (got {len})")]
    TooLong { len: usize, max: usize },
}

/// Store adapter failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// Browser storage missing, denied, or out of quota
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("stored todos are not valid JSON: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("failed to encode todos: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("stored todos contain duplicate id {0}")]
    DuplicateId(TodoId),
    /// Larger than a JS number can hold exactly
    #[error("stored todo id {0} is out of range")]
    IdOutOfRange(TodoId),
}

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::Empty.to_string(), "Todo cannot be empty");
        let err = ValidationError::TooLong { len: 501, max: 500 };
        assert_eq!(err.to_string(), "Todo cannot be more than 500 characters (got 501)");
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::DuplicateId(TodoId(7));
        assert_eq!(err.to_string(), "stored todos contain duplicate id 7");
    }
}
