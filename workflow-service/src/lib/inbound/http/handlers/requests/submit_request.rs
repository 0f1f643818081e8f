use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::account::errors::AccountIdError;
use crate::domain::account::models::AccountId;
use crate::domain::request::models::CreateRequestCommand;
use crate::domain::request::models::RequestView;
use crate::inbound::http::router::AppState;

pub async fn submit_request(
    State(state): State<AppState>,
    Json(body): Json<SubmitRequestBody>,
) -> Result<ApiSuccess<RequestView>, ApiError> {
    state
        .request_service
        .create_request(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|view| ApiSuccess::new(StatusCode::CREATED, view))
}

/// HTTP request body for submitting a request (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmitRequestBody {
    account_id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    guardian_name: String,
    #[serde(default)]
    phone: String,
    priority_code: i32,
    status_code: i32,
    request_date: NaiveDate,
}

#[derive(Debug, Clone, Error)]
enum ParseSubmitRequestError {
    #[error("Invalid account ID: {0}")]
    AccountId(#[from] AccountIdError),
}

impl SubmitRequestBody {
    fn try_into_command(self) -> Result<CreateRequestCommand, ParseSubmitRequestError> {
        let account_id = AccountId::from_string(&self.account_id)?;
        Ok(CreateRequestCommand {
            account_id,
            title: self.title,
            description: self.description,
            guardian_name: self.guardian_name,
            phone: self.phone,
            priority_code: self.priority_code,
            status_code: self.status_code,
            request_date: self.request_date,
        })
    }
}

impl From<ParseSubmitRequestError> for ApiError {
    fn from(err: ParseSubmitRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
