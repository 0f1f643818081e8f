use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::account::models::AccountId;
use crate::inbound::http::router::AppState;

pub async fn delete_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let id = AccountId::from_string(&account_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let deleted = state
        .account_service
        .delete_account(&id)
        .await
        .map_err(ApiError::from)?;

    if deleted {
        Ok(ApiSuccess::new(StatusCode::OK, ()))
    } else {
        Err(ApiError::NotFound(format!(
            "Account not found: {}",
            account_id
        )))
    }
}
