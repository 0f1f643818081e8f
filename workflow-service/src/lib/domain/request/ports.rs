use async_trait::async_trait;

use crate::domain::account::models::AccountId;
use crate::domain::request::errors::RequestError;
use crate::domain::request::models::Request;
use crate::domain::request::models::RequestId;

/// Persistence operations for the request aggregate.
#[async_trait]
pub trait RequestRepository: Send + Sync + 'static {
    /// Persist a new request.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed, including a missing
    ///   owning account (foreign key)
    async fn create(&self, request: Request) -> Result<Request, RequestError>;

    /// Retrieve a request by identifier.
    ///
    /// # Returns
    /// Optional request entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &RequestId) -> Result<Option<Request>, RequestError>;

    /// Retrieve all requests in a stable insertion order.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Request>, RequestError>;

    /// Retrieve all requests owned by one account, in a stable insertion
    /// order.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_account(&self, account_id: &AccountId) -> Result<Vec<Request>, RequestError>;

    /// Update an existing request.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, request: Request) -> Result<Request, RequestError>;

    /// Remove a request.
    ///
    /// # Returns
    /// True when the request existed and was deleted
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &RequestId) -> Result<bool, RequestError>;
}
