use activitylog_api::{ActivityLogError, ActivityLogResult};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::loggable::Loggable;

/// # Documentation
/// - Polymorphic reference to a host entity: the kind tag plus its primary key
/// - Stored as the `*_type` / `*_id` column pair on an activity log row
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityReference {
    /// Singular logical kind name, e.g. `"post"`
    pub kind: String,

    pub id: i64,
}

impl EntityReference {
    pub fn new(kind: impl Into<String>, id: i64) -> Self {
        Self {
            kind: kind.into(),
            id,
        }
    }

    /// Builds a reference from a host entity
    ///
    /// Fails with `InvalidArgument` when the entity has not been persisted
    /// (no primary key) or does not report a kind name.
    pub fn from_entity(entity: &dyn Loggable) -> ActivityLogResult<Self> {
        let kind = entity.kind_name();
        if kind.is_empty() {
            return Err(ActivityLogError::InvalidArgument(
                "entity does not report a kind name".to_string(),
            ));
        }
        let id = entity.get_id().ok_or_else(|| {
            ActivityLogError::InvalidArgument(format!(
                "{kind} instance has no primary key; save it before logging against it"
            ))
        })?;
        Ok(Self::new(kind, id))
    }

    /// Rebuilds a reference from a stored column pair
    ///
    /// An empty kind or a zero id counts as unset, like a missing column.
    pub fn from_columns(kind: Option<&str>, id: Option<i64>) -> Option<Self> {
        match (kind, id) {
            (Some(kind), Some(id)) if !kind.is_empty() && id != 0 => Some(Self::new(kind, id)),
            _ => None,
        }
    }
}

impl fmt::Display for EntityReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.id)
    }
}
