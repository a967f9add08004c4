use async_trait::async_trait;
use sqlx::Database;

/// Generic repository trait for deleting multiple entities in a batch
///
/// Returns the number of items actually deleted; ids with no matching row
/// are skipped.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
///
/// # Example
/// ```ignore
/// impl DeleteBatch<Postgres> for ActivityLogRepositoryImpl {
///     async fn delete_batch(&self, ids: &[i64]) -> Result<usize, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait DeleteBatch<DB: Database>: Send + Sync {
    /// Delete multiple items by their primary keys
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of items successfully deleted
    /// * `Err` - An error if the statement could not be executed
    async fn delete_batch(&self, ids: &[i64]) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
