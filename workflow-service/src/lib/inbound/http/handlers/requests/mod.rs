mod delete_request;
mod get_request;
mod list_account_requests;
mod list_requests;
mod set_request_status;
mod submit_request;

pub use delete_request::delete_request;
pub use get_request::get_request;
pub use list_account_requests::list_account_requests;
pub use list_requests::list_requests;
pub use set_request_status::set_request_status;
pub use submit_request::submit_request;
