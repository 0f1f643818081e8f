use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an issued access token.
///
/// Standard RFC 7519 registered claims plus the resolved role label of the
/// authenticated account. The role label may be empty when the account's
/// role identifier had no matching role at issuance time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (account identifier)
    pub sub: String,

    /// Resolved role label, empty when unresolved
    pub role: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for an authenticated account, stamped at `issued_at`
    /// and expiring `expiration_hours` later.
    pub fn for_account(
        subject: impl ToString,
        role: String,
        issuer: String,
        audience: String,
        issued_at: DateTime<Utc>,
        expiration_hours: i64,
    ) -> Self {
        let expiration = issued_at + Duration::hours(expiration_hours);

        Self {
            sub: subject.to_string(),
            role,
            iss: issuer,
            aud: audience,
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if the token is expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_account_stamps_expiry() {
        let now = Utc::now();
        let claims = Claims::for_account(
            "account-1",
            "admin".to_string(),
            "issuer".to_string(),
            "audience".to_string(),
            now,
            24,
        );

        assert_eq!(claims.sub, "account-1");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_is_expired() {
        let now = Utc::now();
        let claims = Claims::for_account(
            "account-1",
            String::new(),
            "issuer".to_string(),
            "audience".to_string(),
            now,
            1,
        );

        assert!(!claims.is_expired(claims.exp));
        assert!(claims.is_expired(claims.exp + 1));
    }
}
