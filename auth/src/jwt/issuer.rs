use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Token signing configuration.
///
/// Supplied once at startup; `TokenIssuer::new` validates it and a bad
/// secret aborts the process rather than failing per-request.
#[derive(Debug, Clone)]
pub struct SigningConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub expiration_hours: i64,
}

/// Issues and validates signed access tokens.
///
/// Uses HS256 (HMAC with SHA-256). Every issued token carries the
/// configured issuer and audience and a fixed expiry horizon.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    issuer: String,
    audience: String,
    expiration_hours: i64,
}

impl TokenIssuer {
    /// Minimum secret length for HS256 (256 bits).
    const MIN_SECRET_BYTES: usize = 32;

    /// Create a token issuer from signing configuration.
    ///
    /// # Errors
    /// * `WeakSecret` - Secret is shorter than 32 bytes
    pub fn new(config: &SigningConfig) -> Result<Self, JwtError> {
        let secret = config.secret.as_bytes();
        if secret.len() < Self::MIN_SECRET_BYTES {
            return Err(JwtError::WeakSecret {
                min: Self::MIN_SECRET_BYTES,
                actual: secret.len(),
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            expiration_hours: config.expiration_hours,
        })
    }

    /// Issue a signed token for an authenticated subject.
    ///
    /// Stamps the configured issuer/audience, the current time, and the
    /// configured expiry horizon.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str, role_label: String) -> Result<String, JwtError> {
        let claims = Claims::for_account(
            subject,
            role_label,
            self.issuer.clone(),
            self.audience.clone(),
            Utc::now(),
            self.expiration_hours,
        );

        self.encode(&claims)
    }

    /// Encode prepared claims into a signed token.
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// Checks signature, expiry, issuer, and audience.
    ///
    /// # Errors
    /// * `TokenExpired` - Token has expired
    /// * `DecodingFailed` - Signature invalid, wrong issuer/audience, or malformed
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                    _ => JwtError::DecodingFailed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
