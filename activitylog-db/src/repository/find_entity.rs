use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::models::entity_record::EntityRecord;

/// Lookup directives forwarded untouched from the caller to an [`EntityFinder`]
///
/// # Example
/// ```
/// use activitylog_db::repository::find_entity::FindOptions;
///
/// let options = FindOptions::new().attributes(["id", "title"]);
/// assert_eq!(options.attributes.as_deref().map(|a| a.len()), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindOptions {
    /// Restrict the loaded columns; `None` loads every column
    pub attributes: Option<Vec<String>>,
}

impl FindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    /// Drops every column not named in `attributes`
    pub fn project(&self, mut columns: Map<String, Value>) -> Map<String, Value> {
        if let Some(attributes) = &self.attributes {
            columns.retain(|name, _| attributes.iter().any(|a| a == name));
        }
        columns
    }
}

/// Primary-key lookup for one kind of host entity
///
/// Registered under the kind's singular name in an
/// [`EntityRegistry`](crate::registry::EntityRegistry) and used to resolve
/// the subject and causer of an activity.
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl EntityFinder for PgEntityFinder {
///     async fn find_entity(&self, id: i64, options: &FindOptions) -> Result<Option<EntityRecord>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait EntityFinder: Send + Sync {
    /// Find an entity of this kind by its primary key
    ///
    /// # Returns
    /// * `Ok(Some(EntityRecord))` - The found entity
    /// * `Ok(None)` - If no entity has this primary key
    /// * `Err` - An error if the lookup could not be executed
    async fn find_entity(
        &self,
        id: i64,
        options: &FindOptions,
    ) -> Result<Option<EntityRecord>, Box<dyn std::error::Error + Send + Sync>>;
}
