use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::reference::models::CodeView;
use crate::domain::reference::models::Priority;
use crate::inbound::http::router::AppState;

pub async fn list_priorities(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CodeView>>, ApiError> {
    state
        .reference_service
        .list_priorities()
        .await
        .map_err(ApiError::from)
        .map(|priorities| ApiSuccess::new(StatusCode::OK, priorities))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePriorityRequest {
    code: i32,
    description: String,
}

pub async fn create_priority(
    State(state): State<AppState>,
    Json(body): Json<CreatePriorityRequest>,
) -> Result<ApiSuccess<CodeView>, ApiError> {
    let priority = Priority {
        code: body.code,
        description: body.description,
    };

    state
        .reference_service
        .add_priority(priority)
        .await
        .map_err(ApiError::from)
        .map(|view| ApiSuccess::new(StatusCode::CREATED, view))
}

pub async fn delete_priority(
    State(state): State<AppState>,
    Path(code): Path<i32>,
) -> Result<ApiSuccess<()>, ApiError> {
    let deleted = state
        .reference_service
        .delete_priority(code)
        .await
        .map_err(ApiError::from)?;

    if deleted {
        Ok(ApiSuccess::new(StatusCode::OK, ()))
    } else {
        Err(ApiError::NotFound(format!("Priority not found: {}", code)))
    }
}
