//! In-memory collaborators for exercising activities without a database

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};
use sqlx::Postgres;
use std::collections::BTreeMap;
use std::error::Error;
use std::sync::{Arc, Mutex};

use crate::models::activity_log::ActivityLogModel;
use crate::models::entity_record::EntityRecord;
use crate::models::identifiable::Identifiable;
use crate::models::loggable::Loggable;
use crate::registry::EntityRegistry;
use crate::repository::find_all::FindAll;
use crate::repository::find_by_id::FindById;
use crate::repository::find_entity::{EntityFinder, FindOptions};
use crate::repository::find_one::FindOne;
use crate::repository::pagination::{Page, PageRequest};
use crate::repository::query::{ActivityLogQuery, SortOrder};
use crate::repository::save::Save;

#[derive(Debug, Clone)]
pub struct TestEntity {
    pub kind: String,
    pub id: Option<i64>,
    pub attributes: Value,
}

impl TestEntity {
    pub fn new(kind: &str, id: i64) -> Self {
        Self {
            kind: kind.to_string(),
            id: Some(id),
            attributes: json!({ "id": id }),
        }
    }

    pub fn unsaved(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            id: None,
            attributes: json!({}),
        }
    }

    pub fn post(id: i64, title: &str) -> Self {
        Self {
            kind: "post".to_string(),
            id: Some(id),
            attributes: json!({ "id": id, "title": title }),
        }
    }

    pub fn user(id: i64, name: &str) -> Self {
        Self {
            kind: "user".to_string(),
            id: Some(id),
            attributes: json!({ "id": id, "name": name }),
        }
    }
}

impl Identifiable for TestEntity {
    fn get_id(&self) -> Option<i64> {
        self.id
    }
}

impl Loggable for TestEntity {
    fn kind_name(&self) -> &str {
        &self.kind
    }
}

pub struct InMemoryEntityFinder {
    kind: String,
    rows: Mutex<BTreeMap<i64, Value>>,
}

impl InMemoryEntityFinder {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            rows: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn insert(&self, id: i64, attributes: Value) {
        self.rows.lock().unwrap().insert(id, attributes);
    }
}

#[async_trait]
impl EntityFinder for InMemoryEntityFinder {
    async fn find_entity(
        &self,
        id: i64,
        options: &FindOptions,
    ) -> Result<Option<EntityRecord>, Box<dyn Error + Send + Sync>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.get(&id).and_then(Value::as_object).map(|columns| {
            EntityRecord::new(self.kind.clone(), id, options.project(columns.clone()))
        }))
    }
}

/// Activity store assigning sequential ids and wall-clock timestamps
pub struct InMemoryActivityLogRepository {
    rows: Mutex<BTreeMap<i64, ActivityLogModel>>,
    failure: Option<String>,
}

impl InMemoryActivityLogRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            failure: None,
        }
    }

    /// A store whose every save fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            failure: Some(message.to_string()),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn matching(&self, query: &ActivityLogQuery) -> Vec<ActivityLogModel> {
        let rows = self.rows.lock().unwrap();
        let mut found: Vec<ActivityLogModel> = rows
            .values()
            .filter(|a| query.log_name.as_ref().map_or(true, |name| &a.log_name == name))
            .filter(|a| query.subject.is_none() || a.subject() == query.subject)
            .filter(|a| query.causer.is_none() || a.causer() == query.causer)
            .cloned()
            .collect();
        found.sort_by_key(|a| (a.created_at, a.id));
        if query.order == SortOrder::Descending {
            found.reverse();
        }
        found
    }
}

#[async_trait]
impl Save<Postgres, ActivityLogModel> for InMemoryActivityLogRepository {
    async fn save(&self, mut item: ActivityLogModel) -> Result<ActivityLogModel, Box<dyn Error + Send + Sync>> {
        if let Some(message) = &self.failure {
            return Err(message.clone().into());
        }
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();
        let id = match item.get_id() {
            Some(id) if rows.contains_key(&id) => id,
            Some(id) => return Err(format!("activity {id} does not exist").into()),
            None => rows.keys().next_back().map_or(1, |last| last + 1),
        };
        item.id = Some(id);
        item.created_at.get_or_insert(now);
        item.updated_at = Some(now);
        rows.insert(id, item.clone());
        Ok(item)
    }
}

#[async_trait]
impl FindById<Postgres, ActivityLogModel> for InMemoryActivityLogRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<ActivityLogModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }
}

#[async_trait]
impl FindOne<Postgres, ActivityLogModel> for InMemoryActivityLogRepository {
    async fn find_one(
        &self,
        query: &ActivityLogQuery,
    ) -> Result<Option<ActivityLogModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.matching(query).into_iter().next())
    }
}

#[async_trait]
impl FindAll<Postgres, ActivityLogModel> for InMemoryActivityLogRepository {
    async fn find_all(
        &self,
        query: &ActivityLogQuery,
    ) -> Result<Vec<ActivityLogModel>, Box<dyn Error + Send + Sync>> {
        let found = self.matching(query);
        Ok(match query.limit {
            Some(limit) => found.into_iter().take(limit).collect(),
            None => found,
        })
    }

    async fn find_page(
        &self,
        query: &ActivityLogQuery,
        page: PageRequest,
    ) -> Result<Page<ActivityLogModel>, Box<dyn Error + Send + Sync>> {
        let found = self.matching(query);
        let total = found.len();
        let items = found.into_iter().skip(page.offset).take(page.limit).collect();
        Ok(Page::new(items, total, page))
    }
}

/// A saved post and user, a registry able to resolve both, and an empty activity store
pub struct TestFixture {
    pub post: TestEntity,
    pub user: TestEntity,
    pub registry: EntityRegistry,
    pub activities: InMemoryActivityLogRepository,
}

impl TestFixture {
    pub fn new() -> Self {
        let post = TestEntity::post(11, "new title");
        let user = TestEntity::user(21, "test user");

        let posts = InMemoryEntityFinder::new("post");
        posts.insert(11, post.attributes.clone());
        let users = InMemoryEntityFinder::new("user");
        users.insert(21, user.attributes.clone());

        let registry = EntityRegistry::new()
            .with("post", Arc::new(posts))
            .with("user", Arc::new(users));

        Self {
            post,
            user,
            registry,
            activities: InMemoryActivityLogRepository::new(),
        }
    }
}
