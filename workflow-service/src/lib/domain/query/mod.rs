pub mod engine;
pub mod errors;
pub mod fields;
pub mod models;

pub use engine::paginate;
pub use errors::QueryError;
pub use fields::Queryable;
pub use fields::SortAccessor;
pub use fields::SortKey;
pub use models::PagedResult;
pub use models::QueryParams;
pub use models::SortDirection;
