use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::LoginOutcome;
use crate::inbound::http::router::AppState;

/// Authenticate an account holder and issue a bearer token.
///
/// Unknown email and wrong password produce the same response, so the
/// endpoint cannot be used to probe which addresses are registered. A
/// verified but unapproved account gets a distinct 403.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let outcome = state
        .account_service
        .login(&body.email, &body.password)
        .await
        .map_err(ApiError::from)?;

    match outcome {
        LoginOutcome::Granted(token) => Ok(ApiSuccess::new(
            StatusCode::OK,
            LoginResponseData { token },
        )),
        LoginOutcome::NotActivated => Err(ApiError::Forbidden(
            "Account is awaiting approval".to_string(),
        )),
        LoginOutcome::Denied => Err(ApiError::Unauthorized("Invalid credentials".to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
