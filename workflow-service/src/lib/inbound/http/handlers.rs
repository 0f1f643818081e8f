use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::account::errors::AccountError;
use crate::domain::query::QueryParams;
use crate::domain::query::SortDirection;
use crate::domain::reference::errors::ReferenceError;
use crate::domain::request::errors::RequestError;
use crate::domain::role::errors::RoleError;

pub mod accounts;
pub mod login;
pub mod reference;
pub mod requests;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            AccountError::InvalidAccountId(_) | AccountError::InvalidEmail(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            AccountError::InvalidQuery(_) => ApiError::BadRequest(err.to_string()),
            AccountError::Password(_)
            | AccountError::Token(_)
            | AccountError::Role(_)
            | AccountError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::InvalidRequestId(_) | RequestError::InvalidStatus(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            RequestError::InvalidQuery(_) => ApiError::BadRequest(err.to_string()),
            RequestError::Reference(_) | RequestError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<RoleError> for ApiError {
    fn from(err: RoleError) -> Self {
        match err {
            RoleError::AlreadyExists(_) => ApiError::Conflict(err.to_string()),
            RoleError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<ReferenceError> for ApiError {
    fn from(err: ReferenceError) -> Self {
        match err {
            ReferenceError::AlreadyExists(_) => ApiError::Conflict(err.to_string()),
            ReferenceError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Query-string shape shared by every paginated listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl ListQuery {
    pub fn into_params(self) -> QueryParams {
        QueryParams {
            search: self.q,
            page_number: self.page.unwrap_or(1),
            page_size: self.page_size.unwrap_or(QueryParams::DEFAULT_PAGE_SIZE),
            sort_field: self.sort,
            sort_direction: self
                .order
                .as_deref()
                .map(SortDirection::parse)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::QueryError;

    #[test]
    fn test_list_query_defaults() {
        let params = ListQuery::default().into_params();

        assert_eq!(params.page_number, 1);
        assert_eq!(params.page_size, QueryParams::DEFAULT_PAGE_SIZE);
        assert!(params.search.is_none());
        assert!(params.sort_field.is_none());
        assert_eq!(params.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn test_list_query_maps_all_fields() {
        let query = ListQuery {
            q: Some("smith".to_string()),
            page: Some(3),
            page_size: Some(25),
            sort: Some("last_name".to_string()),
            order: Some("desc".to_string()),
        };

        let params = query.into_params();

        assert_eq!(params.search.as_deref(), Some("smith"));
        assert_eq!(params.page_number, 3);
        assert_eq!(params.page_size, 25);
        assert_eq!(params.sort_field.as_deref(), Some("last_name"));
        assert_eq!(params.sort_direction, SortDirection::Descending);
    }

    #[test]
    fn test_invalid_query_maps_to_bad_request() {
        let err = AccountError::InvalidQuery(QueryError::InvalidPageNumber);

        assert!(matches!(ApiError::from(err), ApiError::BadRequest(_)));
    }

    #[test]
    fn test_duplicate_email_maps_to_conflict() {
        let err = AccountError::EmailAlreadyExists("a@b.com".to_string());

        assert!(matches!(ApiError::from(err), ApiError::Conflict(_)));
    }

    #[test]
    fn test_unknown_status_maps_to_unprocessable_entity() {
        let err = RequestError::InvalidStatus(99);

        assert!(matches!(
            ApiError::from(err),
            ApiError::UnprocessableEntity(_)
        ));
    }
}
