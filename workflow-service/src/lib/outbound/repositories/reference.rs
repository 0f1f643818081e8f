use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::reference::errors::ReferenceError;
use crate::domain::reference::models::Priority;
use crate::domain::reference::models::Status;
use crate::domain::reference::ports::PriorityRepository;
use crate::domain::reference::ports::StatusRepository;

#[derive(FromRow)]
struct CodeRow {
    code: i32,
    description: String,
}

pub struct PostgresPriorityRepository {
    pool: PgPool,
}

impl PostgresPriorityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PriorityRepository for PostgresPriorityRepository {
    async fn find_by_code(&self, code: i32) -> Result<Option<Priority>, ReferenceError> {
        let row = sqlx::query_as::<_, CodeRow>(
            "SELECT code, description FROM priorities WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ReferenceError::DatabaseError(e.to_string()))?;

        Ok(row.map(|r| Priority {
            code: r.code,
            description: r.description,
        }))
    }

    async fn list_all(&self) -> Result<Vec<Priority>, ReferenceError> {
        let rows = sqlx::query_as::<_, CodeRow>(
            "SELECT code, description FROM priorities ORDER BY code",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ReferenceError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|r| Priority {
                code: r.code,
                description: r.description,
            })
            .collect())
    }

    async fn create(&self, priority: Priority) -> Result<Priority, ReferenceError> {
        sqlx::query("INSERT INTO priorities (code, description) VALUES ($1, $2)")
            .bind(priority.code)
            .bind(&priority.description)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return ReferenceError::AlreadyExists(priority.code);
                    }
                }
                ReferenceError::DatabaseError(e.to_string())
            })?;

        Ok(priority)
    }

    async fn delete(&self, code: i32) -> Result<bool, ReferenceError> {
        let result = sqlx::query("DELETE FROM priorities WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await
            .map_err(|e| ReferenceError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

pub struct PostgresStatusRepository {
    pool: PgPool,
}

impl PostgresStatusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusRepository for PostgresStatusRepository {
    async fn find_by_code(&self, code: i32) -> Result<Option<Status>, ReferenceError> {
        let row = sqlx::query_as::<_, CodeRow>(
            "SELECT code, description FROM statuses WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ReferenceError::DatabaseError(e.to_string()))?;

        Ok(row.map(|r| Status {
            code: r.code,
            description: r.description,
        }))
    }

    async fn list_all(&self) -> Result<Vec<Status>, ReferenceError> {
        let rows = sqlx::query_as::<_, CodeRow>(
            "SELECT code, description FROM statuses ORDER BY code",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ReferenceError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|r| Status {
                code: r.code,
                description: r.description,
            })
            .collect())
    }

    async fn create(&self, status: Status) -> Result<Status, ReferenceError> {
        sqlx::query("INSERT INTO statuses (code, description) VALUES ($1, $2)")
            .bind(status.code)
            .bind(&status.description)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return ReferenceError::AlreadyExists(status.code);
                    }
                }
                ReferenceError::DatabaseError(e.to_string())
            })?;

        Ok(status)
    }

    async fn delete(&self, code: i32) -> Result<bool, ReferenceError> {
        let result = sqlx::query("DELETE FROM statuses WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await
            .map_err(|e| ReferenceError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
