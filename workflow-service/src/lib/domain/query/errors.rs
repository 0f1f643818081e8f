use thiserror::Error;

/// Caller contract violations for paginated queries.
///
/// Rejected outright rather than silently clamped; a non-positive page or
/// page size means the caller built the request wrong.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Page number must be at least 1")]
    InvalidPageNumber,

    #[error("Page size must be at least 1")]
    InvalidPageSize,
}
