use async_trait::async_trait;
use activitylog_db::models::activity_log::ActivityLogModel;
use activitylog_db::repository::find_all::FindAll;
use activitylog_db::repository::find_one::FindOne;
use activitylog_db::repository::pagination::{Page, PageRequest};
use activitylog_db::repository::query::ActivityLogQuery;
use crate::utils::TryFromRow;
use sqlx::{Postgres, QueryBuilder};
use std::error::Error;
use tracing::debug;

use super::repo_impl::{ActivityLogRepositoryImpl, COLUMNS};

/// Appends the WHERE clause for every criterion set on `query`
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &ActivityLogQuery) {
    let mut separator = " WHERE ";
    if let Some(log_name) = &query.log_name {
        builder.push(separator).push("log_name = ").push_bind(log_name.clone());
        separator = " AND ";
    }
    if let Some(subject) = &query.subject {
        builder
            .push(separator)
            .push("subject_type = ")
            .push_bind(subject.kind.clone())
            .push(" AND subject_id = ")
            .push_bind(subject.id);
        separator = " AND ";
    }
    if let Some(causer) = &query.causer {
        builder
            .push(separator)
            .push("causer_type = ")
            .push_bind(causer.kind.clone())
            .push(" AND causer_id = ")
            .push_bind(causer.id);
    }
}

fn push_order(builder: &mut QueryBuilder<'_, Postgres>, query: &ActivityLogQuery) {
    let direction = query.order.as_sql();
    builder.push(format!(" ORDER BY created_at {direction}, id {direction}"));
}

impl ActivityLogRepositoryImpl {
    pub(super) async fn select_impl(
        repo: &ActivityLogRepositoryImpl,
        query: &ActivityLogQuery,
        limit: Option<usize>,
        offset: usize,
    ) -> Result<Vec<ActivityLogModel>, Box<dyn Error + Send + Sync>> {
        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM {}", repo.quoted_table()));
        push_filters(&mut builder, query);
        push_order(&mut builder, query);
        if let Some(limit) = limit {
            builder.push(" LIMIT ").push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
        }
        if offset > 0 {
            builder.push(" OFFSET ").push_bind(i64::try_from(offset).unwrap_or(i64::MAX));
        }

        let rows = builder.build().fetch_all(&*repo.pool).await?;
        debug!(table = repo.table_name(), rows = rows.len(), "Listed activities");
        rows.iter().map(ActivityLogModel::try_from_row).collect()
    }

    pub(super) async fn count_impl(
        repo: &ActivityLogRepositoryImpl,
        query: &ActivityLogQuery,
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*) FROM {}", repo.quoted_table()));
        push_filters(&mut builder, query);
        let total: i64 = builder.build_query_scalar().fetch_one(&*repo.pool).await?;
        Ok(total as usize)
    }
}

#[async_trait]
impl FindOne<Postgres, ActivityLogModel> for ActivityLogRepositoryImpl {
    async fn find_one(
        &self,
        query: &ActivityLogQuery,
    ) -> Result<Option<ActivityLogModel>, Box<dyn Error + Send + Sync>> {
        let mut found = Self::select_impl(self, query, Some(1), 0).await?;
        Ok(found.pop())
    }
}

#[async_trait]
impl FindAll<Postgres, ActivityLogModel> for ActivityLogRepositoryImpl {
    async fn find_all(
        &self,
        query: &ActivityLogQuery,
    ) -> Result<Vec<ActivityLogModel>, Box<dyn Error + Send + Sync>> {
        Self::select_impl(self, query, query.limit, 0).await
    }

    async fn find_page(
        &self,
        query: &ActivityLogQuery,
        page: PageRequest,
    ) -> Result<Page<ActivityLogModel>, Box<dyn Error + Send + Sync>> {
        let total = Self::count_impl(self, query).await?;
        let items = Self::select_impl(self, query, Some(page.limit), page.offset).await?;
        Ok(Page::new(items, total, page))
    }
}
