use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::SigningConfig;
use crate::jwt::TokenIssuer;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Credential coordinator combining password verification and token issuance.
///
/// The service layer owns the full login decision (account lookup,
/// activation gating, role resolution); this type covers the two
/// cryptographic steps of it.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator from signing configuration.
    ///
    /// # Errors
    /// * `WeakSecret` - Signing secret is unusable; treat as fatal at startup
    pub fn new(config: &SigningConfig) -> Result<Self, JwtError> {
        Ok(Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(config)?,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// # Errors
    /// * `PasswordError` - Stored digest is malformed
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue an access token in one step.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password digest
    /// * `subject` - Account identifier embedded as the token subject
    /// * `role_label` - Resolved role label (may be empty)
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Password verification failed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        role_label: String,
    ) -> Result<String, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_issuer.issue(subject, role_label)?)
    }

    /// Issue a token without password verification.
    ///
    /// For flows where the credentials were already checked by other means.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, subject: &str, role_label: String) -> Result<String, JwtError> {
        self.token_issuer.issue(subject, role_label)
    }

    /// Validate and decode an access token.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.token_issuer.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_authenticator() -> Authenticator {
        Authenticator::new(&SigningConfig {
            secret: "test_secret_key_at_least_32_bytes!".to_string(),
            issuer: "workflow-backend".to_string(),
            audience: "workflow-clients".to_string(),
            expiration_hours: 24,
        })
        .expect("Failed to build authenticator")
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = test_authenticator();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let token = authenticator
            .authenticate(password, &hash, "account-1", "admin".to_string())
            .expect("Authentication failed");
        assert!(!token.is_empty());

        let claims = authenticator
            .validate_token(&token)
            .expect("Token validation failed");
        assert_eq!(claims.sub, "account-1");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = test_authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result =
            authenticator.authenticate("wrong_password", &hash, "account-1", "admin".to_string());
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = test_authenticator();

        let result = authenticator.validate_token("invalid.token.here");
        assert!(result.is_err());
    }
}
