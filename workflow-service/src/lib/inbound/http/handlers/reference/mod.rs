mod priorities;
mod roles;
mod statuses;

pub use priorities::create_priority;
pub use priorities::delete_priority;
pub use priorities::list_priorities;
pub use roles::create_role;
pub use roles::delete_role;
pub use roles::list_roles;
pub use statuses::create_status;
pub use statuses::delete_status;
pub use statuses::list_statuses;
