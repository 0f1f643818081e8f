use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::account::errors::EmailError;
use crate::domain::account::models::Account;
use crate::domain::account::models::CreateAccountCommand;
use crate::domain::account::models::EmailAddress;
use crate::domain::role::models::RoleId;
use crate::inbound::http::router::AppState;

/// Register a new account. Public; the account stays inactive until an
/// administrator approves it.
pub async fn register_account(
    State(state): State<AppState>,
    Json(body): Json<RegisterAccountRequest>,
) -> Result<ApiSuccess<RegisterAccountResponseData>, ApiError> {
    state
        .account_service
        .create_account(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::CREATED, account.into()))
}

/// HTTP request body for account registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterAccountRequest {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    role_id: i32,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterAccountRequestError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl RegisterAccountRequest {
    fn try_into_command(self) -> Result<CreateAccountCommand, ParseRegisterAccountRequestError> {
        let email = EmailAddress::new(self.email)?;
        Ok(CreateAccountCommand {
            first_name: self.first_name,
            last_name: self.last_name,
            email,
            password: self.password,
            role_id: RoleId(self.role_id),
        })
    }
}

impl From<ParseRegisterAccountRequestError> for ApiError {
    fn from(err: ParseRegisterAccountRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterAccountResponseData {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role_id: i32,
    pub active: bool,
}

impl From<&Account> for RegisterAccountResponseData {
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
