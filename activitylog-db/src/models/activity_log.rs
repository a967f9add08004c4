use activitylog_api::ActivityLogResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::Database;

use super::entity_record::EntityRecord;
use super::entity_reference::EntityReference;
use super::identifiable::Identifiable;
use super::loggable::Loggable;
use crate::options::{ActivityLogOptions, DEFAULT_LOG_NAME};
use crate::registry::EntityRegistry;
use crate::repository::find_entity::FindOptions;
use crate::repository::save::Save;

/// # Documentation
/// - One logged event: who (causer) did what (description) to which record (subject)
/// - Built in memory through chained calls, then persisted by [`ActivityLogModel::log`]
/// - Stays mutable after persisting; logging again updates the same row
///
/// # Example
/// ```ignore
/// let activity = ActivityLogModel::new()
///     .use_log("posts")
///     .performed_on(Some(&post))?
///     .caused_by(Some(&user))?
///     .with_property("ip", "10.0.0.1")
///     .log(&repo, "new post")
///     .await?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogModel {
    /// Assigned by the database on first save
    pub id: Option<i64>,

    /// Channel separating independent event streams in one table
    pub log_name: String,

    pub description: Option<String>,

    /// # Documentation
    /// - Subject: the entity the event happened to
    /// - `subject_type` is the singular kind name, e.g. `"post"`
    pub subject_id: Option<i64>,
    pub subject_type: Option<String>,

    /// # Documentation
    /// - Causer: the entity or actor that triggered the event
    pub causer_id: Option<i64>,
    pub causer_type: Option<String>,

    /// Free-form metadata, stored as a JSON document
    pub properties: Option<Map<String, Value>>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Argument of [`ActivityLogModel::with`]: a single key/value pair or a whole mapping
#[derive(Debug, Clone, PartialEq)]
pub enum PropertiesArg {
    Single(String, Value),
    All(Map<String, Value>),
}

impl<K: Into<String>, V: Into<Value>> From<(K, V)> for PropertiesArg {
    fn from((key, value): (K, V)) -> Self {
        PropertiesArg::Single(key.into(), value.into())
    }
}

impl From<Map<String, Value>> for PropertiesArg {
    fn from(properties: Map<String, Value>) -> Self {
        PropertiesArg::All(properties)
    }
}

impl Default for ActivityLogModel {
    fn default() -> Self {
        Self::with_log_name(DEFAULT_LOG_NAME)
    }
}

impl ActivityLogModel {
    /// A blank activity on the `"default"` channel
    pub fn new() -> Self {
        Self::default()
    }

    /// A blank activity on the configured default channel
    pub fn with_options(options: &ActivityLogOptions) -> Self {
        Self::with_log_name(options.default_log_name.clone())
    }

    fn with_log_name(log_name: impl Into<String>) -> Self {
        Self {
            id: None,
            log_name: log_name.into(),
            description: None,
            subject_id: None,
            subject_type: None,
            causer_id: None,
            causer_type: None,
            properties: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Sets the channel the activity is logged to
    pub fn use_log(mut self, log_name: impl Into<String>) -> Self {
        self.log_name = log_name.into();
        self
    }

    /// Sets the description and persists the activity through `repo`
    ///
    /// Returns the stored activity with its id and timestamps populated.
    /// Failures of the repository are reported as they happened; nothing is
    /// retried.
    pub async fn log<DB, R>(mut self, repo: &R, description: impl Into<String>) -> ActivityLogResult<Self>
    where
        DB: Database,
        R: Save<DB, Self> + ?Sized,
    {
        self.description = Some(description.into());
        Ok(repo.save(self).await?)
    }

    /// Records which entity the activity was performed on
    ///
    /// `None` leaves the activity unchanged. An entity without a primary key
    /// or kind name is rejected with `InvalidArgument`.
    pub fn performed_on(mut self, subject: Option<&dyn Loggable>) -> ActivityLogResult<Self> {
        if let Some(subject) = subject {
            let reference = EntityReference::from_entity(subject)?;
            self.subject_id = Some(reference.id);
            self.subject_type = Some(reference.kind);
        }
        Ok(self)
    }

    /// Alias of [`ActivityLogModel::performed_on`]
    pub fn on(self, subject: Option<&dyn Loggable>) -> ActivityLogResult<Self> {
        self.performed_on(subject)
    }

    /// Records who or what caused the activity; same contract as `performed_on`
    pub fn caused_by(mut self, causer: Option<&dyn Loggable>) -> ActivityLogResult<Self> {
        if let Some(causer) = causer {
            let reference = EntityReference::from_entity(causer)?;
            self.causer_id = Some(reference.id);
            self.causer_type = Some(reference.kind);
        }
        Ok(self)
    }

    /// Alias of [`ActivityLogModel::caused_by`]
    pub fn by(self, causer: Option<&dyn Loggable>) -> ActivityLogResult<Self> {
        self.caused_by(causer)
    }

    /// Replaces all properties
    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Adds or overwrites one property, keeping the others
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// `with((key, value))` adds one property, `with(map)` replaces them all
    pub fn with(self, properties: impl Into<PropertiesArg>) -> Self {
        match properties.into() {
            PropertiesArg::Single(key, value) => self.with_property(key, value),
            PropertiesArg::All(properties) => self.with_properties(properties),
        }
    }

    /// Value of one property; `None` when the key or the whole mapping is absent
    pub fn get_extra_property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(key)
    }

    pub fn subject(&self) -> Option<EntityReference> {
        EntityReference::from_columns(self.subject_type.as_deref(), self.subject_id)
    }

    pub fn causer(&self) -> Option<EntityReference> {
        EntityReference::from_columns(self.causer_type.as_deref(), self.causer_id)
    }

    /// Loads the subject through the registry, forwarding `options` to its finder
    ///
    /// Returns `Ok(None)` without a lookup when no subject was recorded.
    pub async fn get_subject(
        &self,
        registry: &EntityRegistry,
        options: &FindOptions,
    ) -> ActivityLogResult<Option<EntityRecord>> {
        match self.subject() {
            Some(reference) => registry.resolve(&reference, options).await,
            None => Ok(None),
        }
    }

    /// Loads the causer through the registry, forwarding `options` to its finder
    pub async fn get_causer(
        &self,
        registry: &EntityRegistry,
        options: &FindOptions,
    ) -> ActivityLogResult<Option<EntityRecord>> {
        match self.causer() {
            Some(reference) => registry.resolve(&reference, options).await,
            None => Ok(None),
        }
    }
}

impl Identifiable for ActivityLogModel {
    fn get_id(&self) -> Option<i64> {
        self.id
    }
}
