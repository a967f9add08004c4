use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for persisting a single entity
///
/// An entity without a primary key is inserted; one that already carries a
/// primary key is updated in place. Either way the returned entity has its
/// generated fields (primary key, timestamps) populated.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Save<Postgres, ActivityLogModel> for ActivityLogRepositoryImpl {
///     async fn save(&self, item: ActivityLogModel) -> Result<ActivityLogModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Save<DB: Database, T: Identifiable>: Send + Sync {
    /// Insert or update an entity
    ///
    /// # Arguments
    /// * `item` - The entity to persist
    ///
    /// # Returns
    /// * `Ok(T)` - The persisted entity with generated fields populated
    /// * `Err` - An error if the entity could not be persisted
    async fn save(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
