use thiserror::Error;

/// Error for priority/status vocabulary operations.
#[derive(Debug, Clone, Error)]
pub enum ReferenceError {
    #[error("Code already exists: {0}")]
    AlreadyExists(i32),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
