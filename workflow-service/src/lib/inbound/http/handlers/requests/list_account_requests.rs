use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::super::ListQuery;
use crate::domain::account::models::AccountId;
use crate::domain::query::PagedResult;
use crate::domain::request::models::RequestView;
use crate::inbound::http::router::AppState;

/// List one account's requests through the same query pipeline.
pub async fn list_account_requests(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<ApiSuccess<PagedResult<RequestView>>, ApiError> {
    let id = AccountId::from_string(&account_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .request_service
        .list_requests_by_account(&id, &query.into_params())
        .await
        .map_err(ApiError::from)
        .map(|page| ApiSuccess::new(StatusCode::OK, page))
}
