use async_trait::async_trait;
use activitylog_api::{ActivityLogError, ActivityLogResult};
use activitylog_db::models::entity_record::EntityRecord;
use activitylog_db::options::is_plain_identifier;
use activitylog_db::repository::find_entity::{EntityFinder, FindOptions};
use serde_json::{Map, Value};
use sqlx::{types::Json, PgPool};
use std::error::Error;
use std::sync::Arc;
use tracing::debug;

use crate::utils::quote_identifier;

/// Loads host entities of one kind from a table keyed by an integer `id`
///
/// Rows are read as JSON objects, so any table shape works without a
/// dedicated model type.
pub struct PgEntityFinder {
    pool: Arc<PgPool>,
    kind: String,
    table: String,
}

impl PgEntityFinder {
    /// Fails with `InvalidArgument` unless `table` is a plain SQL identifier
    pub fn new(pool: Arc<PgPool>, kind: impl Into<String>, table: impl Into<String>) -> ActivityLogResult<Self> {
        let table = table.into();
        if !is_plain_identifier(&table) {
            return Err(ActivityLogError::InvalidArgument(format!(
                "table name '{table}' must match [A-Za-z_][A-Za-z0-9_]*"
            )));
        }
        Ok(Self {
            pool,
            kind: kind.into(),
            table,
        })
    }
}

#[async_trait]
impl EntityFinder for PgEntityFinder {
    async fn find_entity(
        &self,
        id: i64,
        options: &FindOptions,
    ) -> Result<Option<EntityRecord>, Box<dyn Error + Send + Sync>> {
        let query = format!(
            "SELECT row_to_json(t)::jsonb FROM {} AS t WHERE t.id = $1",
            quote_identifier(&self.table)
        );
        let columns: Option<Json<Map<String, Value>>> = sqlx::query_scalar(&query)
            .bind(id)
            .fetch_optional(&*self.pool)
            .await?;

        debug!(kind = %self.kind, table = %self.table, id, found = columns.is_some(), "Resolved entity");
        Ok(columns.map(|Json(columns)| {
            EntityRecord::new(self.kind.clone(), id, options.project(columns))
        }))
    }
}
