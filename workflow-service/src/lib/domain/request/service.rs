use std::sync::Arc;

use crate::domain::account::models::AccountId;
use crate::domain::query::paginate;
use crate::domain::query::PagedResult;
use crate::domain::query::QueryParams;
use crate::domain::reference::ports::StatusRepository;
use crate::domain::request::errors::RequestError;
use crate::domain::request::models::CreateRequestCommand;
use crate::domain::request::models::Request;
use crate::domain::request::models::RequestId;
use crate::domain::request::models::RequestView;
use crate::domain::request::ports::RequestRepository;

/// Domain service for workflow requests.
pub struct RequestService<RR, SR>
where
    RR: RequestRepository,
    SR: StatusRepository,
{
    repository: Arc<RR>,
    statuses: Arc<SR>,
}

impl<RR, SR> RequestService<RR, SR>
where
    RR: RequestRepository,
    SR: StatusRepository,
{
    pub fn new(repository: Arc<RR>, statuses: Arc<SR>) -> Self {
        Self {
            repository,
            statuses,
        }
    }

    /// List all requests filtered, sorted, and paged by the query engine.
    ///
    /// Searchable fields: title, description, guardian name, phone.
    /// Sortable fields: "title", "guardian_name", "request_date",
    /// "priority", "status".
    ///
    /// # Errors
    /// * `InvalidQuery` - Non-positive page number or page size
    /// * `DatabaseError` - Database operation failed
    pub async fn list_requests(
        &self,
        params: &QueryParams,
    ) -> Result<PagedResult<RequestView>, RequestError> {
        let requests = self.repository.list_all().await?;
        Ok(Self::to_view_page(paginate(&requests, params)?))
    }

    /// List one account's requests through the same query pipeline.
    ///
    /// # Errors
    /// * `InvalidQuery` - Non-positive page number or page size
    /// * `DatabaseError` - Database operation failed
    pub async fn list_requests_by_account(
        &self,
        account_id: &AccountId,
        params: &QueryParams,
    ) -> Result<PagedResult<RequestView>, RequestError> {
        let requests = self.repository.list_by_account(account_id).await?;
        Ok(Self::to_view_page(paginate(&requests, params)?))
    }

    /// Look up a single request.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    pub async fn get_request(&self, id: &RequestId) -> Result<Option<RequestView>, RequestError> {
        let request = self.repository.find_by_id(id).await?;
        Ok(request.as_ref().map(RequestView::from))
    }

    /// Submit a new request.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    pub async fn create_request(
        &self,
        command: CreateRequestCommand,
    ) -> Result<RequestView, RequestError> {
        let request = Request {
            id: RequestId::new(),
            account_id: command.account_id,
            title: command.title,
            description: command.description,
            guardian_name: command.guardian_name,
            phone: command.phone,
            priority_code: command.priority_code,
            status_code: command.status_code,
            request_date: command.request_date,
        };

        let created = self.repository.create(request).await?;
        tracing::info!(request_id = %created.id, account_id = %created.account_id, "Request submitted");

        Ok(RequestView::from(&created))
    }

    /// Transition a request to a new status.
    ///
    /// The new code must exist in the status vocabulary; an unknown code is
    /// rejected with `InvalidStatus` instead of being persisted.
    ///
    /// # Returns
    /// False when no request has this id
    ///
    /// # Errors
    /// * `InvalidStatus` - Status code is not in the vocabulary
    /// * `DatabaseError` - Database operation failed
    pub async fn set_status(
        &self,
        id: &RequestId,
        status_code: i32,
    ) -> Result<bool, RequestError> {
        let Some(mut request) = self.repository.find_by_id(id).await? else {
            return Ok(false);
        };

        if self.statuses.find_by_code(status_code).await?.is_none() {
            return Err(RequestError::InvalidStatus(status_code));
        }

        request.status_code = status_code;
        self.repository.update(request).await?;
        tracing::info!(request_id = %id, status_code, "Request status changed");

        Ok(true)
    }

    /// Remove a request.
    ///
    /// # Returns
    /// False when no request has this id
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    pub async fn delete_request(&self, id: &RequestId) -> Result<bool, RequestError> {
        self.repository.delete(id).await
    }

    fn to_view_page(page: PagedResult<Request>) -> PagedResult<RequestView> {
        PagedResult {
            page_number: page.page_number,
            page_size: page.page_size,
            total_pages: page.total_pages,
            items: page.items.iter().map(RequestView::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use mockall::mock;

    use super::*;
    use crate::domain::query::SortDirection;
    use crate::domain::reference::errors::ReferenceError;
    use crate::domain::reference::models::Status;

    mock! {
        pub TestRequestRepository {}

        #[async_trait]
        impl RequestRepository for TestRequestRepository {
            async fn create(&self, request: Request) -> Result<Request, RequestError>;
            async fn find_by_id(&self, id: &RequestId) -> Result<Option<Request>, RequestError>;
            async fn list_all(&self) -> Result<Vec<Request>, RequestError>;
            async fn list_by_account(&self, account_id: &AccountId) -> Result<Vec<Request>, RequestError>;
            async fn update(&self, request: Request) -> Result<Request, RequestError>;
            async fn delete(&self, id: &RequestId) -> Result<bool, RequestError>;
        }
    }

    mock! {
        pub TestStatusRepository {}

        #[async_trait]
        impl StatusRepository for TestStatusRepository {
            async fn find_by_code(&self, code: i32) -> Result<Option<Status>, ReferenceError>;
            async fn list_all(&self) -> Result<Vec<Status>, ReferenceError>;
            async fn create(&self, status: Status) -> Result<Status, ReferenceError>;
            async fn delete(&self, code: i32) -> Result<bool, ReferenceError>;
        }
    }

    fn sample_request(title: &str, priority_code: i32) -> Request {
        Request {
            id: RequestId::new(),
            account_id: AccountId::new(),
            title: title.to_string(),
            description: "Test".to_string(),
            guardian_name: "Test".to_string(),
            phone: "123".to_string(),
            priority_code,
            status_code: 1,
            request_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn service_with(
        repository: MockTestRequestRepository,
        statuses: MockTestStatusRepository,
    ) -> RequestService<MockTestRequestRepository, MockTestStatusRepository> {
        RequestService::new(Arc::new(repository), Arc::new(statuses))
    }

    #[tokio::test]
    async fn test_list_requests_paged_shape() {
        let mut repository = MockTestRequestRepository::new();
        repository.expect_list_all().times(1).returning(|| {
            Ok(vec![
                sample_request("Test", 1),
                sample_request("Test", 1),
                sample_request("Test", 1),
            ])
        });

        let service = service_with(repository, MockTestStatusRepository::new());

        let result = service
            .list_requests(&QueryParams::first_page().with_search("test"))
            .await
            .unwrap();

        assert_eq!(result.page_number, 1);
        assert_eq!(result.page_size, 10);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.items.len(), 3);
    }

    #[tokio::test]
    async fn test_list_twelve_requests_second_page() {
        let mut repository = MockTestRequestRepository::new();
        repository.expect_list_all().times(1).returning(|| {
            Ok((0..12)
                .map(|i| sample_request(&format!("request {i}"), i))
                .collect())
        });

        let service = service_with(repository, MockTestStatusRepository::new());

        let result = service
            .list_requests(&QueryParams::first_page().with_page(2, 10))
            .await
            .unwrap();

        assert_eq!(result.page_number, 2);
        assert_eq!(result.page_size, 10);
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.items.len(), 2);
    }

    #[tokio::test]
    async fn test_list_by_account_sorted_by_priority() {
        let account_id = AccountId::new();
        let mut repository = MockTestRequestRepository::new();
        repository
            .expect_list_by_account()
            .withf(move |id| *id == account_id)
            .times(1)
            .returning(|_| {
                Ok(vec![
                    sample_request("low", 3),
                    sample_request("high", 1),
                    sample_request("mid", 2),
                ])
            });

        let service = service_with(repository, MockTestStatusRepository::new());

        let result = service
            .list_requests_by_account(
                &account_id,
                &QueryParams::first_page().with_sort("priority", SortDirection::Ascending),
            )
            .await
            .unwrap();

        let titles: Vec<&str> = result.items.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["high", "mid", "low"]);
    }

    #[tokio::test]
    async fn test_get_request_found_and_missing() {
        let request = sample_request("Test", 1);
        let id = request.id;

        let mut repository = MockTestRequestRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(request.clone())));
        let service = service_with(repository, MockTestStatusRepository::new());
        let found = service.get_request(&id).await.unwrap();
        assert_eq!(found.unwrap().id, id.0);

        let mut repository = MockTestRequestRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        let service = service_with(repository, MockTestStatusRepository::new());
        assert!(service.get_request(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_request() {
        let mut repository = MockTestRequestRepository::new();
        repository
            .expect_create()
            .withf(|request| request.title == "New request" && request.status_code == 1)
            .times(1)
            .returning(|request| Ok(request));

        let service = service_with(repository, MockTestStatusRepository::new());

        let view = service
            .create_request(CreateRequestCommand {
                account_id: AccountId::new(),
                title: "New request".to_string(),
                description: "Details".to_string(),
                guardian_name: "Guardian".to_string(),
                phone: "555-0100".to_string(),
                priority_code: 2,
                status_code: 1,
                request_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(view.title, "New request");
        assert_eq!(view.priority_code, 2);
    }

    #[tokio::test]
    async fn test_set_status_valid_transition() {
        let request = sample_request("Test", 1);
        let id = request.id;

        let mut repository = MockTestRequestRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(request.clone())));
        repository
            .expect_update()
            .withf(|request| request.status_code == 3)
            .times(1)
            .returning(|request| Ok(request));

        let mut statuses = MockTestStatusRepository::new();
        statuses
            .expect_find_by_code()
            .withf(|code| *code == 3)
            .times(1)
            .returning(|code| {
                Ok(Some(Status {
                    code,
                    description: "Resolved".to_string(),
                }))
            });

        let service = service_with(repository, statuses);
        assert!(service.set_status(&id, 3).await.unwrap());
    }

    #[tokio::test]
    async fn test_set_status_unknown_request_is_false() {
        let mut repository = MockTestRequestRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_update().times(0);

        let service = service_with(repository, MockTestStatusRepository::new());
        assert!(!service.set_status(&RequestId::new(), 3).await.unwrap());
    }

    #[tokio::test]
    async fn test_set_status_unknown_code_rejected() {
        let request = sample_request("Test", 1);
        let id = request.id;

        let mut repository = MockTestRequestRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(request.clone())));
        repository.expect_update().times(0);

        let mut statuses = MockTestStatusRepository::new();
        statuses
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = service_with(repository, statuses);
        let result = service.set_status(&id, 99).await;
        assert!(matches!(result, Err(RequestError::InvalidStatus(99))));
    }

    #[tokio::test]
    async fn test_delete_request() {
        let mut repository = MockTestRequestRepository::new();
        repository.expect_delete().times(1).returning(|_| Ok(true));
        let service = service_with(repository, MockTestStatusRepository::new());
        assert!(service.delete_request(&RequestId::new()).await.unwrap());

        let mut repository = MockTestRequestRepository::new();
        repository.expect_delete().times(1).returning(|_| Ok(false));
        let service = service_with(repository, MockTestStatusRepository::new());
        assert!(!service.delete_request(&RequestId::new()).await.unwrap());
    }
}
