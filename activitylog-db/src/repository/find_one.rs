use async_trait::async_trait;
use sqlx::Database;

use super::query::ActivityLogQuery;

/// Generic repository trait for finding the first entity matching a query
///
/// The query's ordering decides which match is "first"; its limit is ignored.
#[async_trait]
pub trait FindOne<DB: Database, T>: Send + Sync {
    async fn find_one(
        &self,
        query: &ActivityLogQuery,
    ) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
