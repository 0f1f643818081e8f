use thiserror::Error;

use crate::domain::query::QueryError;
use crate::domain::reference::errors::ReferenceError;

/// Error for RequestId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for request operations.
///
/// "Request not found" is a boolean/Option outcome, not an error; the one
/// domain rejection here is a status transition to a code the status
/// vocabulary does not know.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid request ID: {0}")]
    InvalidRequestId(#[from] RequestIdError),

    #[error("Unknown status code: {0}")]
    InvalidStatus(i32),

    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] QueryError),

    #[error("Status vocabulary error: {0}")]
    Reference(#[from] ReferenceError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
