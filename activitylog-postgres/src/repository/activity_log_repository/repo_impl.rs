use activitylog_db::models::activity_log::ActivityLogModel;
use activitylog_db::options::ActivityLogOptions;
use crate::utils::{get_optional_json_object, quote_identifier, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

/// Column list shared by every activity log SELECT and RETURNING clause
pub(super) const COLUMNS: &str = "id, log_name, description, subject_id, subject_type, causer_id, causer_type, properties, created_at, updated_at";

pub struct ActivityLogRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
    pub(crate) options: ActivityLogOptions,
}

impl ActivityLogRepositoryImpl {
    /// `options` must already be validated; `PostgresRepositories` does so
    pub fn new(pool: Arc<PgPool>, options: ActivityLogOptions) -> Self {
        Self { pool, options }
    }

    pub fn table_name(&self) -> &str {
        &self.options.table_name
    }

    /// The table name as it is spliced into SQL
    pub(crate) fn quoted_table(&self) -> String {
        quote_identifier(&self.options.table_name)
    }

    /// A blank activity on the configured default channel
    pub fn activity(&self) -> ActivityLogModel {
        ActivityLogModel::with_options(&self.options)
    }
}

impl TryFromRow<PgRow> for ActivityLogModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ActivityLogModel {
            id: Some(row.try_get("id")?),
            log_name: row.try_get("log_name")?,
            description: row.try_get("description")?,
            subject_id: row.try_get("subject_id")?,
            subject_type: row.try_get("subject_type")?,
            causer_id: row.try_get("causer_id")?,
            causer_type: row.try_get("causer_type")?,
            properties: get_optional_json_object(row, "properties")?,
            created_at: Some(row.try_get("created_at")?),
            updated_at: Some(row.try_get("updated_at")?),
        })
    }
}
