use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::request::models::RequestId;
use crate::inbound::http::router::AppState;

/// Transition a request to a new status.
///
/// The new code must exist in the status vocabulary; an unknown code
/// comes back as a 422, a missing request as a 404.
pub async fn set_request_status(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
    Json(body): Json<SetRequestStatusBody>,
) -> Result<ApiSuccess<SetRequestStatusResponseData>, ApiError> {
    let id = RequestId::from_string(&request_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let updated = state
        .request_service
        .set_status(&id, body.status_code)
        .await
        .map_err(ApiError::from)?;

    if updated {
        Ok(ApiSuccess::new(
            StatusCode::OK,
            SetRequestStatusResponseData {
                status_code: body.status_code,
            },
        ))
    } else {
        Err(ApiError::NotFound(format!(
            "Request not found: {}",
            request_id
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SetRequestStatusBody {
    status_code: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetRequestStatusResponseData {
    pub status_code: i32,
}
