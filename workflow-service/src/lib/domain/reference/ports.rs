use async_trait::async_trait;

use crate::domain::reference::errors::ReferenceError;
use crate::domain::reference::models::Priority;
use crate::domain::reference::models::Status;

/// Persistence operations for the priority vocabulary.
#[async_trait]
pub trait PriorityRepository: Send + Sync + 'static {
    async fn find_by_code(&self, code: i32) -> Result<Option<Priority>, ReferenceError>;

    async fn list_all(&self) -> Result<Vec<Priority>, ReferenceError>;

    async fn create(&self, priority: Priority) -> Result<Priority, ReferenceError>;

    /// Returns true when the code existed and was deleted.
    async fn delete(&self, code: i32) -> Result<bool, ReferenceError>;
}

/// Persistence operations for the status vocabulary.
#[async_trait]
pub trait StatusRepository: Send + Sync + 'static {
    async fn find_by_code(&self, code: i32) -> Result<Option<Status>, ReferenceError>;

    async fn list_all(&self) -> Result<Vec<Status>, ReferenceError>;

    async fn create(&self, status: Status) -> Result<Status, ReferenceError>;

    /// Returns true when the code existed and was deleted.
    async fn delete(&self, code: i32) -> Result<bool, ReferenceError>;
}
