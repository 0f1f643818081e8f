use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::account::models::AccountId;
use crate::inbound::http::router::AppState;

/// Approve an account so its holder may authenticate. Idempotent.
pub async fn approve_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<ApiSuccess<ApproveAccountResponseData>, ApiError> {
    let id = AccountId::from_string(&account_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let approved = state
        .account_service
        .set_active(&id)
        .await
        .map_err(ApiError::from)?;

    if approved {
        Ok(ApiSuccess::new(
            StatusCode::OK,
            ApproveAccountResponseData { active: true },
        ))
    } else {
        Err(ApiError::NotFound(format!(
            "Account not found: {}",
            account_id
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApproveAccountResponseData {
    pub active: bool,
}
