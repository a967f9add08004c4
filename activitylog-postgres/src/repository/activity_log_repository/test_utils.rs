use activitylog_db::models::{Identifiable, Loggable};
use serde::Deserialize;
use sqlx::PgPool;

#[derive(Debug, Clone, PartialEq, Deserialize, sqlx::FromRow)]
pub struct TestPost {
    pub id: i64,
    pub title: String,
}

impl Identifiable for TestPost {
    fn get_id(&self) -> Option<i64> {
        Some(self.id)
    }
}

impl Loggable for TestPost {
    fn kind_name(&self) -> &str {
        "post"
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, sqlx::FromRow)]
pub struct TestUser {
    pub id: i64,
    pub name: String,
}

impl Identifiable for TestUser {
    fn get_id(&self) -> Option<i64> {
        Some(self.id)
    }
}

impl Loggable for TestUser {
    fn kind_name(&self) -> &str {
        "user"
    }
}

pub async fn create_test_post(
    pool: &PgPool,
    title: &str,
) -> Result<TestPost, Box<dyn std::error::Error + Send + Sync>> {
    let post = sqlx::query_as::<_, TestPost>("INSERT INTO posts (title) VALUES ($1) RETURNING id, title")
        .bind(title)
        .fetch_one(pool)
        .await?;
    Ok(post)
}

pub async fn create_test_user(
    pool: &PgPool,
    name: &str,
) -> Result<TestUser, Box<dyn std::error::Error + Send + Sync>> {
    let user = sqlx::query_as::<_, TestUser>("INSERT INTO users (name) VALUES ($1) RETURNING id, name")
        .bind(name)
        .fetch_one(pool)
        .await?;
    Ok(user)
}
