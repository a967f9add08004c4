use async_trait::async_trait;
use activitylog_db::models::activity_log::ActivityLogModel;
use activitylog_db::repository::find_by_id::FindById;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::{ActivityLogRepositoryImpl, COLUMNS};

impl ActivityLogRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &ActivityLogRepositoryImpl,
        id: i64,
    ) -> Result<Option<ActivityLogModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {COLUMNS} FROM {} WHERE id = $1", repo.quoted_table());
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&*repo.pool)
            .await?;

        debug!(table = repo.table_name(), id, found = row.is_some(), "Looked up activity");
        row.as_ref().map(ActivityLogModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindById<Postgres, ActivityLogModel> for ActivityLogRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> Result<Option<ActivityLogModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }
}
