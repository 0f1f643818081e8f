use std::sync::Arc;

use crate::domain::role::errors::RoleError;
use crate::domain::role::models::Role;
use crate::domain::role::models::RoleId;
use crate::domain::role::models::RoleView;
use crate::domain::role::ports::RoleRepository;

/// Domain service for the role vocabulary.
///
/// Mostly CRUD passthrough; the one piece of logic is `label_for`, which
/// the login flow uses to resolve the role claim.
pub struct RoleService<R>
where
    R: RoleRepository,
{
    repository: Arc<R>,
}

impl<R> RoleService<R>
where
    R: RoleRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolve a role identifier to its label.
    ///
    /// An unknown identifier yields the empty string, not an error:
    /// callers treat "no label available" as data, and token issuance
    /// proceeds with an empty role claim.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    pub async fn label_for(&self, id: RoleId) -> Result<String, RoleError> {
        let role = self.repository.find_by_id(id).await?;
        Ok(role.map(|r| r.label).unwrap_or_default())
    }

    /// List all roles.
    pub async fn list_roles(&self) -> Result<Vec<RoleView>, RoleError> {
        let roles = self.repository.list_all().await?;
        Ok(roles.iter().map(RoleView::from).collect())
    }

    /// Add a role to the vocabulary.
    pub async fn add_role(&self, role: Role) -> Result<RoleView, RoleError> {
        let created = self.repository.create(role).await?;
        Ok(RoleView::from(&created))
    }

    /// Remove a role. Returns false when the id was unknown.
    pub async fn delete_role(&self, id: RoleId) -> Result<bool, RoleError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;

    use super::*;

    mock! {
        pub TestRoleRepository {}

        #[async_trait]
        impl RoleRepository for TestRoleRepository {
            async fn find_by_id(&self, id: RoleId) -> Result<Option<Role>, RoleError>;
            async fn list_all(&self) -> Result<Vec<Role>, RoleError>;
            async fn create(&self, role: Role) -> Result<Role, RoleError>;
            async fn delete(&self, id: RoleId) -> Result<bool, RoleError>;
        }
    }

    #[tokio::test]
    async fn test_label_for_known_role() {
        let mut repository = MockTestRoleRepository::new();
        repository
            .expect_find_by_id()
            .withf(|id| id.0 == 1)
            .times(1)
            .returning(|id| {
                Ok(Some(Role {
                    id,
                    label: "admin".to_string(),
                }))
            });

        let service = RoleService::new(Arc::new(repository));
        let label = service.label_for(RoleId(1)).await.unwrap();
        assert_eq!(label, "admin");
    }

    #[tokio::test]
    async fn test_label_for_unknown_role_is_empty_not_error() {
        let mut repository = MockTestRoleRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = RoleService::new(Arc::new(repository));
        let label = service.label_for(RoleId(42)).await.unwrap();
        assert_eq!(label, "");
    }

    #[tokio::test]
    async fn test_list_roles() {
        let mut repository = MockTestRoleRepository::new();
        repository.expect_list_all().times(1).returning(|| {
            Ok(vec![
                Role {
                    id: RoleId(1),
                    label: "admin".to_string(),
                },
                Role {
                    id: RoleId(2),
                    label: "user".to_string(),
                },
            ])
        });

        let service = RoleService::new(Arc::new(repository));
        let roles = service.list_roles().await.unwrap();
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[0].label, "admin");
    }

    #[tokio::test]
    async fn test_delete_unknown_role_returns_false() {
        let mut repository = MockTestRoleRepository::new();
        repository.expect_delete().times(1).returning(|_| Ok(false));

        let service = RoleService::new(Arc::new(repository));
        assert!(!service.delete_role(RoleId(9)).await.unwrap());
    }
}
