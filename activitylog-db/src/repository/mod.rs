pub mod delete_batch;
pub mod find_all;
pub mod find_by_id;
pub mod find_entity;
pub mod find_one;
pub mod pagination;
pub mod query;
pub mod save;
pub mod truncate;

// Re-exports
pub use delete_batch::*;
pub use find_all::*;
pub use find_by_id::*;
pub use find_entity::*;
pub use find_one::*;
pub use pagination::*;
pub use query::*;
pub use save::*;
pub use truncate::*;
