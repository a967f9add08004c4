use activitylog_api::ActivityLogResult;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entity_reference::EntityReference;
use super::identifiable::Identifiable;
use super::loggable::Loggable;

/// # Documentation
/// - A host entity fetched through the registry while resolving a subject or causer
/// - Columns are kept as a JSON object since the registry serves every kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub kind: String,
    pub id: i64,
    pub attributes: Map<String, Value>,
}

impl EntityRecord {
    pub fn new(kind: impl Into<String>, id: i64, attributes: Map<String, Value>) -> Self {
        Self {
            kind: kind.into(),
            id,
            attributes,
        }
    }

    /// Returns the value of one column, if it was loaded
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.attributes.get(attribute)
    }

    pub fn reference(&self) -> EntityReference {
        EntityReference::new(self.kind.clone(), self.id)
    }

    /// Deserializes the loaded columns into a caller-defined model
    pub fn into_model<T: DeserializeOwned>(self) -> ActivityLogResult<T> {
        Ok(serde_json::from_value(Value::Object(self.attributes))?)
    }
}

impl Identifiable for EntityRecord {
    fn get_id(&self) -> Option<i64> {
        Some(self.id)
    }
}

impl Loggable for EntityRecord {
    fn kind_name(&self) -> &str {
        &self.kind
    }
}
