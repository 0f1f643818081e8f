use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::account::models::AccountId;
use crate::domain::role::models::RoleId;
use crate::inbound::http::router::AppState;

/// Assign a different role to an account.
pub async fn change_account_role(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    Json(body): Json<ChangeAccountRoleBody>,
) -> Result<ApiSuccess<ChangeAccountRoleResponseData>, ApiError> {
    let id = AccountId::from_string(&account_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let changed = state
        .account_service
        .change_role(&id, RoleId(body.role_id))
        .await
        .map_err(ApiError::from)?;

    if changed {
        Ok(ApiSuccess::new(
            StatusCode::OK,
            ChangeAccountRoleResponseData {
                role_id: body.role_id,
            },
        ))
    } else {
        Err(ApiError::NotFound(format!(
            "Account not found: {}",
            account_id
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangeAccountRoleBody {
    role_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeAccountRoleResponseData {
    pub role_id: i32,
}
