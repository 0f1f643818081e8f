use thiserror::Error;

/// Error for role operations.
#[derive(Debug, Clone, Error)]
pub enum RoleError {
    #[error("Role already exists: {0}")]
    AlreadyExists(i32),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
