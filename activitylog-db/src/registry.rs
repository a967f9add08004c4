use activitylog_api::{ActivityLogError, ActivityLogResult};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::models::entity_record::EntityRecord;
use crate::models::entity_reference::EntityReference;
use crate::repository::find_entity::{EntityFinder, FindOptions};

/// Maps singular entity-kind names to the finder that can load them
///
/// Built once at start-up, then shared read-only (usually behind an `Arc`)
/// by every activity that needs to resolve its subject or causer.
#[derive(Default, Clone)]
pub struct EntityRegistry {
    finders: HashMap<String, Arc<dyn EntityFinder>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the finder for a kind, replacing any previous one
    pub fn register(&mut self, kind: impl Into<String>, finder: Arc<dyn EntityFinder>) -> &mut Self {
        self.finders.insert(kind.into(), finder);
        self
    }

    pub fn with(mut self, kind: impl Into<String>, finder: Arc<dyn EntityFinder>) -> Self {
        self.register(kind, finder);
        self
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.finders.contains_key(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.finders.keys().map(String::as_str)
    }

    pub fn finder(&self, kind: &str) -> Option<&Arc<dyn EntityFinder>> {
        self.finders.get(kind)
    }

    /// Loads the entity a reference points at
    ///
    /// # Returns
    /// * `Ok(Some(EntityRecord))` - The referenced entity
    /// * `Ok(None)` - The kind is known but no row has this id
    /// * `Err(UnknownEntityKind)` - Nothing is registered under the kind
    /// * `Err(Persistence)` - The finder failed
    pub async fn resolve(
        &self,
        reference: &EntityReference,
        options: &FindOptions,
    ) -> ActivityLogResult<Option<EntityRecord>> {
        let finder = self
            .finder(&reference.kind)
            .ok_or_else(|| ActivityLogError::UnknownEntityKind(reference.kind.clone()))?;
        Ok(finder.find_entity(reference.id, options).await?)
    }
}

impl fmt::Debug for EntityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&str> = self.kinds().collect();
        kinds.sort_unstable();
        f.debug_struct("EntityRegistry").field("kinds", &kinds).finish()
    }
}
