use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::SigningConfig;
use chrono::NaiveDate;
use workflow_service::domain::account::errors::AccountError;
use workflow_service::domain::account::models::Account;
use workflow_service::domain::account::models::AccountId;
use workflow_service::domain::account::models::CreateAccountCommand;
use workflow_service::domain::account::models::EmailAddress;
use workflow_service::domain::account::models::LoginOutcome;
use workflow_service::domain::account::ports::AccountRepository;
use workflow_service::domain::account::service::AccountService;
use workflow_service::domain::query::QueryParams;
use workflow_service::domain::query::SortDirection;
use workflow_service::domain::reference::errors::ReferenceError;
use workflow_service::domain::reference::models::Status;
use workflow_service::domain::reference::ports::StatusRepository;
use workflow_service::domain::request::errors::RequestError;
use workflow_service::domain::request::models::CreateRequestCommand;
use workflow_service::domain::request::models::Request;
use workflow_service::domain::request::models::RequestId;
use workflow_service::domain::request::ports::RequestRepository;
use workflow_service::domain::request::service::RequestService;
use workflow_service::domain::role::errors::RoleError;
use workflow_service::domain::role::models::Role;
use workflow_service::domain::role::models::RoleId;
use workflow_service::domain::role::ports::RoleRepository;
use workflow_service::domain::role::service::RoleService;

#[derive(Default)]
struct InMemoryAccountRepository {
    accounts: Mutex<Vec<Account>>,
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(AccountError::EmailAlreadyExists(
                account.email.as_str().to_string(),
            ));
        }
        accounts.push(account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.email.as_str() == email).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountError> {
        Ok(self.accounts.lock().unwrap().clone())
    }

    async fn update(&self, account: Account) -> Result<Account, AccountError> {
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(existing) = accounts.iter_mut().find(|a| a.id == account.id) {
            *existing = account.clone();
        }
        Ok(account)
    }

    async fn delete(&self, id: &AccountId) -> Result<bool, AccountError> {
        let mut accounts = self.accounts.lock().unwrap();
        let before = accounts.len();
        accounts.retain(|a| a.id != *id);
        Ok(accounts.len() < before)
    }
}

#[derive(Default)]
struct InMemoryRoleRepository {
    roles: Mutex<Vec<Role>>,
}

impl InMemoryRoleRepository {
    fn with_roles(roles: Vec<Role>) -> Self {
        Self {
            roles: Mutex::new(roles),
        }
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn find_by_id(&self, id: RoleId) -> Result<Option<Role>, RoleError> {
        let roles = self.roles.lock().unwrap();
        Ok(roles.iter().find(|r| r.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Role>, RoleError> {
        Ok(self.roles.lock().unwrap().clone())
    }

    async fn create(&self, role: Role) -> Result<Role, RoleError> {
        let mut roles = self.roles.lock().unwrap();
        if roles.iter().any(|r| r.id == role.id) {
            return Err(RoleError::AlreadyExists(role.id.0));
        }
        roles.push(role.clone());
        Ok(role)
    }

    async fn delete(&self, id: RoleId) -> Result<bool, RoleError> {
        let mut roles = self.roles.lock().unwrap();
        let before = roles.len();
        roles.retain(|r| r.id != id);
        Ok(roles.len() < before)
    }
}

#[derive(Default)]
struct InMemoryStatusRepository {
    statuses: Mutex<Vec<Status>>,
}

impl InMemoryStatusRepository {
    fn with_statuses(statuses: Vec<Status>) -> Self {
        Self {
            statuses: Mutex::new(statuses),
        }
    }
}

#[async_trait]
impl StatusRepository for InMemoryStatusRepository {
    async fn find_by_code(&self, code: i32) -> Result<Option<Status>, ReferenceError> {
        let statuses = self.statuses.lock().unwrap();
        Ok(statuses.iter().find(|s| s.code == code).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Status>, ReferenceError> {
        Ok(self.statuses.lock().unwrap().clone())
    }

    async fn create(&self, status: Status) -> Result<Status, ReferenceError> {
        let mut statuses = self.statuses.lock().unwrap();
        if statuses.iter().any(|s| s.code == status.code) {
            return Err(ReferenceError::AlreadyExists(status.code));
        }
        statuses.push(status.clone());
        Ok(status)
    }

    async fn delete(&self, code: i32) -> Result<bool, ReferenceError> {
        let mut statuses = self.statuses.lock().unwrap();
        let before = statuses.len();
        statuses.retain(|s| s.code != code);
        Ok(statuses.len() < before)
    }
}

#[derive(Default)]
struct InMemoryRequestRepository {
    requests: Mutex<Vec<Request>>,
}

#[async_trait]
impl RequestRepository for InMemoryRequestRepository {
    async fn create(&self, request: Request) -> Result<Request, RequestError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(request)
    }

    async fn find_by_id(&self, id: &RequestId) -> Result<Option<Request>, RequestError> {
        let requests = self.requests.lock().unwrap();
        Ok(requests.iter().find(|r| r.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Request>, RequestError> {
        Ok(self.requests.lock().unwrap().clone())
    }

    async fn list_by_account(&self, account_id: &AccountId) -> Result<Vec<Request>, RequestError> {
        let requests = self.requests.lock().unwrap();
        Ok(requests
            .iter()
            .filter(|r| r.account_id == *account_id)
            .cloned()
            .collect())
    }

    async fn update(&self, request: Request) -> Result<Request, RequestError> {
        let mut requests = self.requests.lock().unwrap();
        if let Some(existing) = requests.iter_mut().find(|r| r.id == request.id) {
            *existing = request.clone();
        }
        Ok(request)
    }

    async fn delete(&self, id: &RequestId) -> Result<bool, RequestError> {
        let mut requests = self.requests.lock().unwrap();
        let before = requests.len();
        requests.retain(|r| r.id != *id);
        Ok(requests.len() < before)
    }
}

fn signing_config() -> SigningConfig {
    SigningConfig {
        secret: "integration-test-signing-secret-0123456789".to_string(),
        issuer: "workflow-service".to_string(),
        audience: "workflow-clients".to_string(),
        expiration_hours: 1,
    }
}

fn account_service(
    roles: Vec<Role>,
) -> AccountService<InMemoryAccountRepository, InMemoryRoleRepository> {
    let authenticator = Arc::new(Authenticator::new(&signing_config()).unwrap());
    let role_service = Arc::new(RoleService::new(Arc::new(
        InMemoryRoleRepository::with_roles(roles),
    )));
    AccountService::new(
        Arc::new(InMemoryAccountRepository::default()),
        role_service,
        authenticator,
    )
}

fn register_command(first: &str, last: &str, email: &str) -> CreateAccountCommand {
    CreateAccountCommand {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: EmailAddress::new(email.to_string()).unwrap(),
        password: "correct horse battery staple".to_string(),
        role_id: RoleId(1),
    }
}

#[tokio::test]
async fn test_registration_approval_login_flow() {
    let service = account_service(vec![Role {
        id: RoleId(1),
        label: "Administrator".to_string(),
    }]);

    let account = service
        .create_account(register_command("Ada", "Lovelace", "ada@example.com"))
        .await
        .unwrap();
    assert!(!account.active, "new accounts must start inactive");

    // Correct credentials before approval are recognized but gated
    let outcome = service
        .login("ada@example.com", "correct horse battery staple")
        .await
        .unwrap();
    assert_eq!(outcome, LoginOutcome::NotActivated);

    assert!(service.set_active(&account.id).await.unwrap());

    let outcome = service
        .login("ada@example.com", "correct horse battery staple")
        .await
        .unwrap();
    let LoginOutcome::Granted(token) = outcome else {
        panic!("expected a token after approval, got {:?}", outcome);
    };

    // The token carries the account id and the resolved role label
    let authenticator = Authenticator::new(&signing_config()).unwrap();
    let claims = authenticator.validate_token(&token).unwrap();
    assert_eq!(claims.sub, account.id.to_string());
    assert_eq!(claims.role, "Administrator");
}

#[tokio::test]
async fn test_login_rejections_are_indistinguishable() {
    let service = account_service(vec![]);

    let account = service
        .create_account(register_command("Ada", "Lovelace", "ada@example.com"))
        .await
        .unwrap();
    service.set_active(&account.id).await.unwrap();

    let unknown_email = service
        .login("nobody@example.com", "correct horse battery staple")
        .await
        .unwrap();
    let wrong_password = service
        .login("ada@example.com", "not the password")
        .await
        .unwrap();

    assert_eq!(unknown_email, LoginOutcome::Denied);
    assert_eq!(wrong_password, LoginOutcome::Denied);
}

#[tokio::test]
async fn test_role_change_applies_to_next_login() {
    let service = account_service(vec![
        Role {
            id: RoleId(1),
            label: "Administrator".to_string(),
        },
        Role {
            id: RoleId(2),
            label: "Holder".to_string(),
        },
    ]);

    let account = service
        .create_account(register_command("Ada", "Lovelace", "ada@example.com"))
        .await
        .unwrap();
    service.set_active(&account.id).await.unwrap();

    assert!(service.change_role(&account.id, RoleId(2)).await.unwrap());
    assert!(!service
        .change_role(&AccountId::new(), RoleId(2))
        .await
        .unwrap());

    let outcome = service
        .login("ada@example.com", "correct horse battery staple")
        .await
        .unwrap();
    let LoginOutcome::Granted(token) = outcome else {
        panic!("expected a token, got {:?}", outcome);
    };

    let authenticator = Authenticator::new(&signing_config()).unwrap();
    let claims = authenticator.validate_token(&token).unwrap();
    assert_eq!(claims.role, "Holder");
}

#[tokio::test]
async fn test_unresolvable_role_still_issues_token() {
    // No roles registered at all; the label in the token is empty
    let service = account_service(vec![]);

    let account = service
        .create_account(register_command("Ada", "Lovelace", "ada@example.com"))
        .await
        .unwrap();
    service.set_active(&account.id).await.unwrap();

    let outcome = service
        .login("ada@example.com", "correct horse battery staple")
        .await
        .unwrap();
    let LoginOutcome::Granted(token) = outcome else {
        panic!("expected a token, got {:?}", outcome);
    };

    let authenticator = Authenticator::new(&signing_config()).unwrap();
    let claims = authenticator.validate_token(&token).unwrap();
    assert_eq!(claims.role, "");
}

#[tokio::test]
async fn test_account_listing_filters_sorts_and_pages() {
    let service = account_service(vec![]);

    for (first, last, email) in [
        ("Carol", "Smith", "carol@example.com"),
        ("Alice", "Smith", "alice@example.com"),
        ("Bob", "Jones", "bob@example.com"),
        ("Dan", "Smithers", "dan@example.com"),
    ] {
        service
            .create_account(register_command(first, last, email))
            .await
            .unwrap();
    }

    let params = QueryParams::first_page()
        .with_search("smith")
        .with_sort("first_name", SortDirection::Ascending)
        .with_page(1, 2);

    let page = service.list_accounts(&params).await.unwrap();

    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].first_name, "Alice");
    assert_eq!(page.items[1].first_name, "Carol");

    let page_two = service
        .list_accounts(&params.clone().with_page(2, 2))
        .await
        .unwrap();
    assert_eq!(page_two.items.len(), 1);
    assert_eq!(page_two.items[0].first_name, "Dan");
}

fn request_service() -> RequestService<InMemoryRequestRepository, InMemoryStatusRepository> {
    let statuses = vec![
        Status {
            code: 1,
            description: "Submitted".to_string(),
        },
        Status {
            code: 2,
            description: "Approved".to_string(),
        },
    ];
    RequestService::new(
        Arc::new(InMemoryRequestRepository::default()),
        Arc::new(InMemoryStatusRepository::with_statuses(statuses)),
    )
}

fn submit_command(account_id: AccountId, title: &str, date: NaiveDate) -> CreateRequestCommand {
    CreateRequestCommand {
        account_id,
        title: title.to_string(),
        description: "".to_string(),
        guardian_name: "Pat Doe".to_string(),
        phone: "555-0100".to_string(),
        priority_code: 1,
        status_code: 1,
        request_date: date,
    }
}

#[tokio::test]
async fn test_request_lifecycle() {
    let service = request_service();
    let account_id = AccountId::new();
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    let created = service
        .create_request(submit_command(account_id, "Equipment", date))
        .await
        .unwrap();

    let id = RequestId(created.id);
    let found = service.get_request(&id).await.unwrap();
    assert_eq!(found, Some(created));

    // Transition to a vocabulary status
    assert!(service.set_status(&id, 2).await.unwrap());
    let updated = service.get_request(&id).await.unwrap().unwrap();
    assert_eq!(updated.status_code, 2);

    // An unknown code is rejected and nothing is persisted
    let err = service.set_status(&id, 99).await.unwrap_err();
    assert!(matches!(err, RequestError::InvalidStatus(99)));
    let unchanged = service.get_request(&id).await.unwrap().unwrap();
    assert_eq!(unchanged.status_code, 2);

    assert!(service.delete_request(&id).await.unwrap());
    assert_eq!(service.get_request(&id).await.unwrap(), None);
}

#[tokio::test]
async fn test_requests_listed_per_account() {
    let service = request_service();
    let mine = AccountId::new();
    let theirs = AccountId::new();
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    for (owner, title) in [(mine, "First"), (theirs, "Other"), (mine, "Second")] {
        service
            .create_request(submit_command(owner, title, date))
            .await
            .unwrap();
    }

    let page = service
        .list_requests_by_account(&mine, &QueryParams::first_page())
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert!(page.items.iter().all(|r| r.account_id == mine.0));

    let all = service
        .list_requests(&QueryParams::first_page())
        .await
        .unwrap();
    assert_eq!(all.items.len(), 3);
}
