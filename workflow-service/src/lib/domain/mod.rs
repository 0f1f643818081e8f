pub mod account;
pub mod query;
pub mod reference;
pub mod request;
pub mod role;
