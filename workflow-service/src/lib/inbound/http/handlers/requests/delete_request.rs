use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::request::models::RequestId;
use crate::inbound::http::router::AppState;

pub async fn delete_request(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let id = RequestId::from_string(&request_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let deleted = state
        .request_service
        .delete_request(&id)
        .await
        .map_err(ApiError::from)?;

    if deleted {
        Ok(ApiSuccess::new(StatusCode::OK, ()))
    } else {
        Err(ApiError::NotFound(format!(
            "Request not found: {}",
            request_id
        )))
    }
}
