use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::super::ListQuery;
use crate::domain::query::PagedResult;
use crate::domain::request::models::RequestView;
use crate::inbound::http::router::AppState;

/// List all requests filtered, sorted, and paged through the query engine.
pub async fn list_requests(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<ApiSuccess<PagedResult<RequestView>>, ApiError> {
    state
        .request_service
        .list_requests(&query.into_params())
        .await
        .map_err(ApiError::from)
        .map(|page| ApiSuccess::new(StatusCode::OK, page))
}
