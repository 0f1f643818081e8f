use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::request::models::RequestId;
use crate::domain::request::models::RequestView;
use crate::inbound::http::router::AppState;

pub async fn get_request(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
) -> Result<ApiSuccess<RequestView>, ApiError> {
    let id = RequestId::from_string(&request_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let request = state
        .request_service
        .get_request(&id)
        .await
        .map_err(ApiError::from)?;

    match request {
        Some(view) => Ok(ApiSuccess::new(StatusCode::OK, view)),
        None => Err(ApiError::NotFound(format!(
            "Request not found: {}",
            request_id
        ))),
    }
}
