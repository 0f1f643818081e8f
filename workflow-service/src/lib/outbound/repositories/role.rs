use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::role::errors::RoleError;
use crate::domain::role::models::Role;
use crate::domain::role::models::RoleId;
use crate::domain::role::ports::RoleRepository;

pub struct PostgresRoleRepository {
    pool: PgPool,
}

impl PostgresRoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct RoleRow {
    id: i32,
    label: String,
}

impl From<RoleRow> for Role {
    fn from(row: RoleRow) -> Self {
        Role {
            id: RoleId(row.id),
            label: row.label,
        }
    }
}

#[async_trait]
impl RoleRepository for PostgresRoleRepository {
    async fn find_by_id(&self, id: RoleId) -> Result<Option<Role>, RoleError> {
        let row = sqlx::query_as::<_, RoleRow>("SELECT id, label FROM roles WHERE id = $1")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RoleError::DatabaseError(e.to_string()))?;

        Ok(row.map(Role::from))
    }

    async fn list_all(&self) -> Result<Vec<Role>, RoleError> {
        let rows = sqlx::query_as::<_, RoleRow>("SELECT id, label FROM roles ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RoleError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Role::from).collect())
    }

    async fn create(&self, role: Role) -> Result<Role, RoleError> {
        sqlx::query("INSERT INTO roles (id, label) VALUES ($1, $2)")
            .bind(role.id.0)
            .bind(&role.label)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return RoleError::AlreadyExists(role.id.0);
                    }
                }
                RoleError::DatabaseError(e.to_string())
            })?;

        Ok(role)
    }

    async fn delete(&self, id: RoleId) -> Result<bool, RoleError> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| RoleError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
