use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::reference::models::CodeView;
use crate::domain::reference::models::Status;
use crate::inbound::http::router::AppState;

pub async fn list_statuses(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CodeView>>, ApiError> {
    state
        .reference_service
        .list_statuses()
        .await
        .map_err(ApiError::from)
        .map(|statuses| ApiSuccess::new(StatusCode::OK, statuses))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateStatusRequest {
    code: i32,
    description: String,
}

pub async fn create_status(
    State(state): State<AppState>,
    Json(body): Json<CreateStatusRequest>,
) -> Result<ApiSuccess<CodeView>, ApiError> {
    let status = Status {
        code: body.code,
        description: body.description,
    };

    state
        .reference_service
        .add_status(status)
        .await
        .map_err(ApiError::from)
        .map(|view| ApiSuccess::new(StatusCode::CREATED, view))
}

pub async fn delete_status(
    State(state): State<AppState>,
    Path(code): Path<i32>,
) -> Result<ApiSuccess<()>, ApiError> {
    let deleted = state
        .reference_service
        .delete_status(code)
        .await
        .map_err(ApiError::from)?;

    if deleted {
        Ok(ApiSuccess::new(StatusCode::OK, ()))
    } else {
        Err(ApiError::NotFound(format!("Status not found: {}", code)))
    }
}
