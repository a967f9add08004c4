use async_trait::async_trait;
use sqlx::Database;

/// Generic repository trait for removing every row of a table
#[async_trait]
pub trait Truncate<DB: Database>: Send + Sync {
    async fn truncate(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
