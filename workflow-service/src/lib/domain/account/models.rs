use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::account::errors::AccountIdError;
use crate::domain::account::errors::EmailError;
use crate::domain::query::Queryable;
use crate::domain::query::SortAccessor;
use crate::domain::query::SortKey;
use crate::domain::role::models::RoleId;

/// Account aggregate entity.
///
/// Registered by a holder, inactive until approved by an administrator.
/// The login flow only ever reads this; activation is a separate
/// administrative mutation.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role_id: RoleId,
    pub active: bool,
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an account ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AccountIdError> {
        Uuid::parse_str(s)
            .map(AccountId)
            .map_err(|e| AccountIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Unique within
/// the system; uniqueness itself is enforced by the account store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new account with validated fields.
///
/// The plaintext password is hashed by the service; the activation flag is
/// not a parameter because new accounts always start inactive.
#[derive(Debug)]
pub struct CreateAccountCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub password: String,
    pub role_id: RoleId,
}

/// Outcome of one login attempt.
///
/// `Denied` covers both unknown email and wrong password; the two cases
/// are collapsed before they reach any caller so the API cannot be used to
/// probe which emails are registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials verified, account active: bearer token issued
    Granted(String),
    /// Credentials verified but the account awaits approval
    NotActivated,
    /// Invalid credentials
    Denied,
}

/// Transfer shape for account listings. Omits the password digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role_id: i32,
    pub active: bool,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.0,
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            email: account.email.as_str().to_string(),
            role_id: account.role_id.0,
            active: account.active,
        }
    }
}

impl Queryable for Account {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.first_name, &self.last_name, self.email.as_str()]
    }

    fn sort_accessor(field: &str) -> Option<SortAccessor<Self>> {
        match field {
            "first_name" => Some(|a| SortKey::text(&a.first_name)),
            "last_name" => Some(|a| SortKey::text(&a.last_name)),
            "email" => Some(|a| SortKey::text(a.email.as_str())),
            _ => None,
        }
    }
}
