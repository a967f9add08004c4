use async_trait::async_trait;
use activitylog_api::ActivityLogError;
use activitylog_db::models::activity_log::ActivityLogModel;
use activitylog_db::repository::save::Save;
use crate::utils::TryFromRow;
use sqlx::{types::Json, Postgres};
use std::error::Error;
use tracing::debug;

use super::repo_impl::{ActivityLogRepositoryImpl, COLUMNS};

impl ActivityLogRepositoryImpl {
    pub(super) async fn insert_impl(
        repo: &ActivityLogRepositoryImpl,
        item: &ActivityLogModel,
    ) -> Result<ActivityLogModel, Box<dyn Error + Send + Sync>> {
        let query = format!(
            r#"
            INSERT INTO {table}
            (log_name, description, subject_id, subject_type, causer_id, causer_type, properties)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUMNS}
            "#,
            table = repo.quoted_table(),
        );
        let row = sqlx::query(&query)
            .bind(&item.log_name)
            .bind(item.description.as_deref())
            .bind(item.subject_id)
            .bind(item.subject_type.as_deref())
            .bind(item.causer_id)
            .bind(item.causer_type.as_deref())
            .bind(item.properties.as_ref().map(Json))
            .fetch_one(&*repo.pool)
            .await?;

        let saved = ActivityLogModel::try_from_row(&row)?;
        debug!(table = repo.table_name(), id = ?saved.id, log_name = %saved.log_name, "Inserted activity");
        Ok(saved)
    }

    pub(super) async fn update_impl(
        repo: &ActivityLogRepositoryImpl,
        id: i64,
        item: &ActivityLogModel,
    ) -> Result<ActivityLogModel, Box<dyn Error + Send + Sync>> {
        let query = format!(
            r#"
            UPDATE {table} SET
                log_name = $2,
                description = $3,
                subject_id = $4,
                subject_type = $5,
                causer_id = $6,
                causer_type = $7,
                properties = $8,
                updated_at = now()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#,
            table = repo.quoted_table(),
        );
        let row = sqlx::query(&query)
            .bind(id)
            .bind(&item.log_name)
            .bind(item.description.as_deref())
            .bind(item.subject_id)
            .bind(item.subject_type.as_deref())
            .bind(item.causer_id)
            .bind(item.causer_type.as_deref())
            .bind(item.properties.as_ref().map(Json))
            .fetch_optional(&*repo.pool)
            .await?
            .ok_or_else(|| {
                ActivityLogError::NotFound(format!("{} row {id}", repo.table_name()))
            })?;

        let saved = ActivityLogModel::try_from_row(&row)?;
        debug!(table = repo.table_name(), id, log_name = %saved.log_name, "Updated activity");
        Ok(saved)
    }
}

#[async_trait]
impl Save<Postgres, ActivityLogModel> for ActivityLogRepositoryImpl {
    async fn save(&self, item: ActivityLogModel) -> Result<ActivityLogModel, Box<dyn Error + Send + Sync>> {
        match item.id {
            None => Self::insert_impl(self, &item).await,
            Some(id) => Self::update_impl(self, id, &item).await,
        }
    }
}
