use activitylog_api::ActivityLogResult;
use activitylog_db::options::ActivityLogOptions;
use activitylog_db::registry::EntityRegistry;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::repository::activity_log_repository::ActivityLogRepositoryImpl;
use crate::repository::entity_finder::PgEntityFinder;
use crate::repository::schema;

/// Builds the activity log repository and entity registry over one shared pool
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
    options: ActivityLogOptions,
}

impl PostgresRepositories {
    /// Repositories for the default `activity_logs` table
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            options: ActivityLogOptions::default(),
        }
    }

    pub fn with_options(pool: Arc<PgPool>, options: ActivityLogOptions) -> ActivityLogResult<Self> {
        options.validate()?;
        Ok(Self { pool, options })
    }

    /// Open a pool to `database_url`
    pub async fn connect(database_url: &str, options: ActivityLogOptions) -> ActivityLogResult<Self> {
        options.validate()?;
        info!(table = %options.table_name, "Connecting activity log to PostgreSQL");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect(database_url)
            .await?;

        info!("Activity log connected to PostgreSQL");
        Ok(Self {
            pool: Arc::new(pool),
            options,
        })
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    pub fn options(&self) -> &ActivityLogOptions {
        &self.options
    }

    /// Create the activity log table if it does not exist yet
    pub async fn migrate(&self) -> ActivityLogResult<()> {
        schema::up(&self.pool, &self.options).await
    }

    pub fn create_activity_log_repository(&self) -> Arc<ActivityLogRepositoryImpl> {
        Arc::new(ActivityLogRepositoryImpl::new(
            self.pool.clone(),
            self.options.clone(),
        ))
    }

    /// Registry resolving each `(kind, table)` pair through a [`PgEntityFinder`]
    pub fn create_registry<'a>(
        &self,
        kinds: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> ActivityLogResult<EntityRegistry> {
        let mut registry = EntityRegistry::new();
        for (kind, table) in kinds {
            let finder = PgEntityFinder::new(self.pool.clone(), kind, table)?;
            registry.register(kind, Arc::new(finder));
        }
        Ok(registry)
    }
}
