pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::account;
pub use domain::query;
pub use domain::reference;
pub use domain::request;
pub use domain::role;
pub use outbound::repositories;
