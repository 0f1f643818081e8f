use thiserror::Error;

/// Error type for password hashing and verification.
///
/// `VerificationFailed` means the stored digest could not be parsed or
/// compared, not that the password was wrong; a mismatch is a value, not
/// an error.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
