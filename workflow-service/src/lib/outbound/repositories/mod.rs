pub mod account;
pub mod reference;
pub mod request;
pub mod role;

pub use account::PostgresAccountRepository;
pub use reference::PostgresPriorityRepository;
pub use reference::PostgresStatusRepository;
pub use request::PostgresRequestRepository;
pub use role::PostgresRoleRepository;
