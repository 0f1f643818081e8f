mod approve_account;
mod change_account_role;
mod delete_account;
mod list_accounts;
mod register_account;

pub use approve_account::approve_account;
pub use change_account_role::change_account_role;
pub use delete_account::delete_account;
pub use list_accounts::list_accounts;
pub use register_account::register_account;
