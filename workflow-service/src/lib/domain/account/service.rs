use std::sync::Arc;

use auth::Authenticator;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::AccountView;
use crate::domain::account::models::CreateAccountCommand;
use crate::domain::account::models::LoginOutcome;
use crate::domain::account::ports::AccountRepository;
use crate::domain::query::paginate;
use crate::domain::query::PagedResult;
use crate::domain::query::QueryParams;
use crate::domain::role::models::RoleId;
use crate::domain::role::ports::RoleRepository;
use crate::domain::role::service::RoleService;

/// Domain service for account operations, including the login decision.
///
/// The login flow runs lookup, password verification, the activation gate,
/// role resolution, and token issuance strictly in that order, and never
/// mutates the account it read.
pub struct AccountService<AR, RR>
where
    AR: AccountRepository,
    RR: RoleRepository,
{
    repository: Arc<AR>,
    roles: Arc<RoleService<RR>>,
    authenticator: Arc<Authenticator>,
}

impl<AR, RR> AccountService<AR, RR>
where
    AR: AccountRepository,
    RR: RoleRepository,
{
    pub fn new(
        repository: Arc<AR>,
        roles: Arc<RoleService<RR>>,
        authenticator: Arc<Authenticator>,
    ) -> Self {
        Self {
            repository,
            roles,
            authenticator,
        }
    }

    /// List accounts filtered, sorted, and paged by the query engine.
    ///
    /// Searchable fields: first name, last name, email.
    /// Sortable fields: "first_name", "last_name", "email".
    ///
    /// # Errors
    /// * `InvalidQuery` - Non-positive page number or page size
    /// * `DatabaseError` - Database operation failed
    pub async fn list_accounts(
        &self,
        params: &QueryParams,
    ) -> Result<PagedResult<AccountView>, AccountError> {
        let accounts = self.repository.list_all().await?;
        let page = paginate(&accounts, params)?;

        Ok(PagedResult {
            page_number: page.page_number,
            page_size: page.page_size,
            total_pages: page.total_pages,
            items: page.items.iter().map(AccountView::from).collect(),
        })
    }

    /// Register a new account.
    ///
    /// The password is hashed before anything is persisted and the account
    /// always starts inactive, whatever the caller sent.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Hashing operation failed
    /// * `DatabaseError` - Database operation failed
    pub async fn create_account(
        &self,
        command: CreateAccountCommand,
    ) -> Result<Account, AccountError> {
        let password_hash = self.authenticator.hash_password(&command.password)?;

        let account = Account {
            id: AccountId::new(),
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            password_hash,
            role_id: command.role_id,
            active: false,
        };

        let created = self.repository.create(account).await?;
        tracing::info!(account_id = %created.id, "Account registered, awaiting approval");

        Ok(created)
    }

    /// Approve an account so its holder may authenticate.
    ///
    /// # Returns
    /// False when no account has this id; true otherwise, including for
    /// accounts that were already active (idempotent).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    pub async fn set_active(&self, id: &AccountId) -> Result<bool, AccountError> {
        let Some(mut account) = self.repository.find_by_id(id).await? else {
            return Ok(false);
        };

        account.active = true;
        self.repository.update(account).await?;
        tracing::info!(account_id = %id, "Account approved");

        Ok(true)
    }

    /// Assign a different role to an account.
    ///
    /// Takes effect on the next login; tokens already issued keep the
    /// label they were minted with.
    ///
    /// # Returns
    /// False when no account has this id
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    pub async fn change_role(&self, id: &AccountId, role_id: RoleId) -> Result<bool, AccountError> {
        let Some(mut account) = self.repository.find_by_id(id).await? else {
            return Ok(false);
        };

        account.role_id = role_id;
        self.repository.update(account).await?;
        tracing::info!(account_id = %id, role_id = role_id.0, "Account role changed");

        Ok(true)
    }

    /// Remove an account.
    ///
    /// # Returns
    /// False when no account has this id
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    pub async fn delete_account(&self, id: &AccountId) -> Result<bool, AccountError> {
        self.repository.delete(id).await
    }

    /// Decide one login attempt.
    ///
    /// `Denied` covers unknown email and wrong password alike; the
    /// activation gate only runs for verified credentials, and a token is
    /// only ever issued past that gate. An unresolvable role does not
    /// block issuance; the token carries an empty role label.
    ///
    /// # Errors
    /// * `Password` - Stored digest is malformed
    /// * `Role` / `DatabaseError` - Collaborator failure
    /// * `Token` - Token generation failed
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AccountError> {
        let Some(account) = self.verified_account(email, password).await? else {
            return Ok(LoginOutcome::Denied);
        };

        if !account.active {
            tracing::info!(account_id = %account.id, "Login attempt on unapproved account");
            return Ok(LoginOutcome::NotActivated);
        }

        let role_label = self.roles.label_for(account.role_id).await?;
        let token = self
            .authenticator
            .issue_token(&account.id.to_string(), role_label)?;

        Ok(LoginOutcome::Granted(token))
    }

    /// Combined lookup-and-verify step.
    ///
    /// Collapses "no such account" and "wrong password" into a single
    /// `None` here, before the result crosses any trust boundary, so the
    /// two cases cannot be told apart by any caller.
    async fn verified_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, AccountError> {
        let Some(account) = self.repository.find_by_email(email).await? else {
            return Ok(None);
        };

        let verified = self
            .authenticator
            .verify_password(password, &account.password_hash)?;

        Ok(verified.then_some(account))
    }
}
