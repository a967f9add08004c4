use async_trait::async_trait;
use activitylog_db::repository::truncate::Truncate;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::ActivityLogRepositoryImpl;

#[async_trait]
impl Truncate<Postgres> for ActivityLogRepositoryImpl {
    async fn truncate(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let query = format!("TRUNCATE TABLE {} RESTART IDENTITY", self.quoted_table());
        sqlx::query(&query).execute(&*self.pool).await?;
        debug!(table = self.table_name(), "Truncated activities");
        Ok(())
    }
}
