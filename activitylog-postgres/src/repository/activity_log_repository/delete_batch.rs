use async_trait::async_trait;
use activitylog_db::repository::delete_batch::DeleteBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::ActivityLogRepositoryImpl;

impl ActivityLogRepositoryImpl {
    pub(super) async fn delete_batch_impl(
        repo: &ActivityLogRepositoryImpl,
        ids: &[i64],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        let query = format!("DELETE FROM {} WHERE id = ANY($1)", repo.quoted_table());
        let result = sqlx::query(&query)
            .bind(ids)
            .execute(&*repo.pool)
            .await?;

        let deleted = result.rows_affected() as usize;
        debug!(table = repo.table_name(), requested = ids.len(), deleted, "Deleted activities");
        Ok(deleted)
    }
}

#[async_trait]
impl DeleteBatch<Postgres> for ActivityLogRepositoryImpl {
    async fn delete_batch(&self, ids: &[i64]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_batch_impl(self, ids).await
    }
}
