//! Authentication utilities library
//!
//! Provides the credential infrastructure for the workflow backend:
//! - Password hashing (Argon2id)
//! - Signed, expiring access tokens carrying identity and role claims
//! - Credential verification coordination
//!
//! The service crate defines its own login workflow (account lookup,
//! activation gating, role resolution) and adapts these primitives.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Issuing and Validating Tokens
//! ```
//! use auth::{SigningConfig, TokenIssuer, Claims};
//!
//! let config = SigningConfig {
//!     secret: "secret_key_at_least_32_bytes_long!".to_string(),
//!     issuer: "workflow-backend".to_string(),
//!     audience: "workflow-clients".to_string(),
//!     expiration_hours: 24,
//! };
//! let issuer = TokenIssuer::new(&config).unwrap();
//! let token = issuer.issue("account-1", "admin".to_string()).unwrap();
//! let claims: Claims = issuer.decode(&token).unwrap();
//! assert_eq!(claims.role, "admin");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::SigningConfig;
pub use jwt::TokenIssuer;
pub use password::PasswordError;
pub use password::PasswordHasher;
