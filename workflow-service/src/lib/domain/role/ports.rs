use async_trait::async_trait;

use crate::domain::role::errors::RoleError;
use crate::domain::role::models::Role;
use crate::domain::role::models::RoleId;

/// Persistence operations for the role vocabulary.
#[async_trait]
pub trait RoleRepository: Send + Sync + 'static {
    /// Retrieve a role by identifier.
    ///
    /// # Returns
    /// Optional role entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: RoleId) -> Result<Option<Role>, RoleError>;

    /// Retrieve all roles.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Role>, RoleError>;

    /// Persist a new role.
    ///
    /// # Errors
    /// * `AlreadyExists` - Role id is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, role: Role) -> Result<Role, RoleError>;

    /// Remove a role.
    ///
    /// # Returns
    /// True when the role existed and was deleted
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: RoleId) -> Result<bool, RoleError>;
}
