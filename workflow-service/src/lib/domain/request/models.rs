use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::account::models::AccountId;
use crate::domain::query::Queryable;
use crate::domain::query::SortAccessor;
use crate::domain::query::SortKey;
use crate::domain::request::errors::RequestIdError;

/// Workflow request aggregate entity.
///
/// Created by an account holder; the status code is only ever mutated
/// through the explicit transition operation, never a general update.
/// Referential integrity of `account_id` is the store's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub id: RequestId,
    pub account_id: AccountId,
    pub title: String,
    pub description: String,
    pub guardian_name: String,
    pub phone: String,
    pub priority_code: i32,
    pub status_code: i32,
    pub request_date: NaiveDate,
}

/// Request unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a request ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, RequestIdError> {
        Uuid::parse_str(s)
            .map(RequestId)
            .map_err(|e| RequestIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to submit a new request.
#[derive(Debug)]
pub struct CreateRequestCommand {
    pub account_id: AccountId,
    pub title: String,
    pub description: String,
    pub guardian_name: String,
    pub phone: String,
    pub priority_code: i32,
    pub status_code: i32,
    pub request_date: NaiveDate,
}

/// Transfer shape for request listings and lookups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestView {
    pub id: Uuid,
    pub account_id: Uuid,
    pub title: String,
    pub description: String,
    pub guardian_name: String,
    pub phone: String,
    pub priority_code: i32,
    pub status_code: i32,
    pub request_date: NaiveDate,
}

impl From<&Request> for RequestView {
    fn from(request: &Request) -> Self {
        Self {
            id: request.id.0,
            account_id: request.account_id.0,
            title: request.title.clone(),
            description: request.description.clone(),
            guardian_name: request.guardian_name.clone(),
            phone: request.phone.clone(),
            priority_code: request.priority_code,
            status_code: request.status_code,
            request_date: request.request_date,
        }
    }
}

impl Queryable for Request {
    fn search_text(&self) -> Vec<&str> {
        vec![
            &self.title,
            &self.description,
            &self.guardian_name,
            &self.phone,
        ]
    }

    fn sort_accessor(field: &str) -> Option<SortAccessor<Self>> {
        match field {
            "title" => Some(|r| SortKey::text(&r.title)),
            "guardian_name" => Some(|r| SortKey::text(&r.guardian_name)),
            "request_date" => Some(|r| SortKey::Date(r.request_date)),
            "priority" => Some(|r| SortKey::Int(i64::from(r.priority_code))),
            "status" => Some(|r| SortKey::Int(i64::from(r.status_code))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_round_trip() {
        let id = RequestId::new();
        let parsed = RequestId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_sortable_field_names() {
        for field in ["title", "guardian_name", "request_date", "priority", "status"] {
            assert!(Request::sort_accessor(field).is_some(), "missing {field}");
        }
        assert!(Request::sort_accessor("account_id").is_none());
    }
}
