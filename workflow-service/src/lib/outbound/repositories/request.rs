use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::models::AccountId;
use crate::domain::request::errors::RequestError;
use crate::domain::request::models::Request;
use crate::domain::request::models::RequestId;
use crate::domain::request::ports::RequestRepository;

pub struct PostgresRequestRepository {
    pool: PgPool,
}

impl PostgresRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct RequestRow {
    id: Uuid,
    account_id: Uuid,
    title: String,
    description: String,
    guardian_name: String,
    phone: String,
    priority_code: i32,
    status_code: i32,
    request_date: NaiveDate,
}

impl From<RequestRow> for Request {
    fn from(row: RequestRow) -> Self {
        Request {
            id: RequestId(row.id),
            account_id: AccountId(row.account_id),
            title: row.title,
            description: row.description,
            guardian_name: row.guardian_name,
            phone: row.phone,
            priority_code: row.priority_code,
            status_code: row.status_code,
            request_date: row.request_date,
        }
    }
}

const REQUEST_COLUMNS: &str = "id, account_id, title, description, guardian_name, phone, \
                               priority_code, status_code, request_date";

#[async_trait]
impl RequestRepository for PostgresRequestRepository {
    async fn create(&self, request: Request) -> Result<Request, RequestError> {
        sqlx::query(
            r#"
            INSERT INTO requests
                (id, account_id, title, description, guardian_name, phone,
                 priority_code, status_code, request_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(request.id.0)
        .bind(request.account_id.0)
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.guardian_name)
        .bind(&request.phone)
        .bind(request.priority_code)
        .bind(request.status_code)
        .bind(request.request_date)
        .execute(&self.pool)
        .await
        .map_err(|e| RequestError::DatabaseError(e.to_string()))?;

        Ok(request)
    }

    async fn find_by_id(&self, id: &RequestId) -> Result<Option<Request>, RequestError> {
        let row = sqlx::query_as::<_, RequestRow>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM requests WHERE id = $1"
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RequestError::DatabaseError(e.to_string()))?;

        Ok(row.map(Request::from))
    }

    async fn list_all(&self) -> Result<Vec<Request>, RequestError> {
        let rows = sqlx::query_as::<_, RequestRow>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM requests ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RequestError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Request::from).collect())
    }

    async fn list_by_account(&self, account_id: &AccountId) -> Result<Vec<Request>, RequestError> {
        let rows = sqlx::query_as::<_, RequestRow>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM requests WHERE account_id = $1 ORDER BY created_at, id"
        ))
        .bind(account_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RequestError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Request::from).collect())
    }

    async fn update(&self, request: Request) -> Result<Request, RequestError> {
        sqlx::query(
            r#"
            UPDATE requests
            SET title = $2, description = $3, guardian_name = $4, phone = $5,
                priority_code = $6, status_code = $7, request_date = $8
            WHERE id = $1
            "#,
        )
        .bind(request.id.0)
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.guardian_name)
        .bind(&request.phone)
        .bind(request.priority_code)
        .bind(request.status_code)
        .bind(request.request_date)
        .execute(&self.pool)
        .await
        .map_err(|e| RequestError::DatabaseError(e.to_string()))?;

        Ok(request)
    }

    async fn delete(&self, id: &RequestId) -> Result<bool, RequestError> {
        let result = sqlx::query("DELETE FROM requests WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| RequestError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
