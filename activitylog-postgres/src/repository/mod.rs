pub mod activity_log_repository;
pub mod entity_finder;
pub mod schema;

pub use activity_log_repository::ActivityLogRepositoryImpl;
pub use entity_finder::PgEntityFinder;
