//! Activity log table creation and removal
//!
//! The table name and the default channel come from [`ActivityLogOptions`],
//! so the DDL is rendered at runtime instead of being read from migration
//! files. Both directions are idempotent.

use activitylog_api::ActivityLogResult;
use activitylog_db::options::ActivityLogOptions;
use sqlx::PgPool;
use tracing::info;

use crate::utils::{quote_identifier, quote_literal};

/// Create the activity log table and its lookup indexes
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use activitylog_db::options::ActivityLogOptions;
/// use activitylog_postgres::repository::schema::up;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// up(pool, &ActivityLogOptions::default()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn up(pool: &PgPool, options: &ActivityLogOptions) -> ActivityLogResult<()> {
    options.validate()?;
    info!(table = %options.table_name, "Creating activity log table");

    let sql = create_table_sql(options);
    sqlx::raw_sql(&sql).execute(pool).await?;

    info!(table = %options.table_name, "Activity log table is ready");
    Ok(())
}

/// Drop the activity log table
pub async fn down(pool: &PgPool, options: &ActivityLogOptions) -> ActivityLogResult<()> {
    options.validate()?;
    info!(table = %options.table_name, "Dropping activity log table");

    let sql = drop_table_sql(options);
    sqlx::raw_sql(&sql).execute(pool).await?;
    Ok(())
}

pub fn create_table_sql(options: &ActivityLogOptions) -> String {
    let name = &options.table_name;
    let table = quote_identifier(name);
    let log_name_idx = quote_identifier(&format!("{name}_log_name_idx"));
    let subject_idx = quote_identifier(&format!("{name}_subject_idx"));
    let causer_idx = quote_identifier(&format!("{name}_causer_idx"));
    let default_log_name = quote_literal(&options.default_log_name);
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table} (
            id BIGSERIAL PRIMARY KEY,
            log_name VARCHAR(255) NOT NULL DEFAULT {default_log_name},
            description VARCHAR(255),
            subject_id BIGINT,
            subject_type VARCHAR(255),
            causer_id BIGINT,
            causer_type VARCHAR(255),
            properties JSONB,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        );
        CREATE INDEX IF NOT EXISTS {log_name_idx} ON {table} (log_name);
        CREATE INDEX IF NOT EXISTS {subject_idx} ON {table} (subject_type, subject_id);
        CREATE INDEX IF NOT EXISTS {causer_idx} ON {table} (causer_type, causer_id);
        "#
    )
}

pub fn drop_table_sql(options: &ActivityLogOptions) -> String {
    format!("DROP TABLE IF EXISTS {}", quote_identifier(&options.table_name))
}
