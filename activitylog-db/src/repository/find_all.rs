use async_trait::async_trait;
use sqlx::Database;

use super::pagination::{Page, PageRequest};
use super::query::ActivityLogQuery;

/// Generic repository trait for listing the entities matching a query
#[async_trait]
pub trait FindAll<DB: Database, T>: Send + Sync {
    /// Find every matching entity in query order, honouring the query's limit
    async fn find_all(
        &self,
        query: &ActivityLogQuery,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;

    /// Find one page of matching entities together with the total match count
    ///
    /// The page request takes precedence over the query's limit.
    async fn find_page(
        &self,
        query: &ActivityLogQuery,
        page: PageRequest,
    ) -> Result<Page<T>, Box<dyn std::error::Error + Send + Sync>>;
}
