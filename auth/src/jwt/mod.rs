pub mod claims;
pub mod errors;
pub mod issuer;

pub use claims::Claims;
pub use errors::JwtError;
pub use issuer::SigningConfig;
pub use issuer::TokenIssuer;
