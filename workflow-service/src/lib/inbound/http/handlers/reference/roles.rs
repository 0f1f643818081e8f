use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::role::models::Role;
use crate::domain::role::models::RoleId;
use crate::domain::role::models::RoleView;
use crate::inbound::http::router::AppState;

pub async fn list_roles(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<RoleView>>, ApiError> {
    state
        .role_service
        .list_roles()
        .await
        .map_err(ApiError::from)
        .map(|roles| ApiSuccess::new(StatusCode::OK, roles))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateRoleRequest {
    id: i32,
    label: String,
}

pub async fn create_role(
    State(state): State<AppState>,
    Json(body): Json<CreateRoleRequest>,
) -> Result<ApiSuccess<RoleView>, ApiError> {
    let role = Role {
        id: RoleId(body.id),
        label: body.label,
    };

    state
        .role_service
        .add_role(role)
        .await
        .map_err(ApiError::from)
        .map(|view| ApiSuccess::new(StatusCode::CREATED, view))
}

pub async fn delete_role(
    State(state): State<AppState>,
    Path(role_id): Path<i32>,
) -> Result<ApiSuccess<()>, ApiError> {
    let deleted = state
        .role_service
        .delete_role(RoleId(role_id))
        .await
        .map_err(ApiError::from)?;

    if deleted {
        Ok(ApiSuccess::new(StatusCode::OK, ()))
    } else {
        Err(ApiError::NotFound(format!("Role not found: {}", role_id)))
    }
}
