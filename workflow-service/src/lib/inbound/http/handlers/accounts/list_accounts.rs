use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::super::ListQuery;
use crate::domain::account::models::AccountView;
use crate::domain::query::PagedResult;
use crate::inbound::http::router::AppState;

/// List accounts filtered, sorted, and paged through the query engine.
pub async fn list_accounts(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<ApiSuccess<PagedResult<AccountView>>, ApiError> {
    state
        .account_service
        .list_accounts(&query.into_params())
        .await
        .map_err(ApiError::from)
        .map(|page| ApiSuccess::new(StatusCode::OK, page))
}
