use activitylog_api::ActivityLogResult;

use crate::models::entity_reference::EntityReference;
use crate::models::loggable::Loggable;

/// Ordering on `created_at`; ties are broken on the primary key in the same direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

/// Criteria for listing activities
///
/// Every criterion is optional; an empty query matches every activity,
/// newest first.
///
/// # Example
/// ```
/// use activitylog_db::models::EntityReference;
/// use activitylog_db::repository::query::{ActivityLogQuery, SortOrder};
///
/// let query = ActivityLogQuery::new()
///     .in_log("billing")
///     .for_subject_ref(EntityReference::new("invoice", 12))
///     .order(SortOrder::Ascending)
///     .limit(10);
/// assert_eq!(query.log_name.as_deref(), Some("billing"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLogQuery {
    pub log_name: Option<String>,
    pub subject: Option<EntityReference>,
    pub causer: Option<EntityReference>,
    pub order: SortOrder,
    pub limit: Option<usize>,
}

impl ActivityLogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_log(mut self, log_name: impl Into<String>) -> Self {
        self.log_name = Some(log_name.into());
        self
    }

    pub fn for_subject(self, subject: &dyn Loggable) -> ActivityLogResult<Self> {
        Ok(self.for_subject_ref(EntityReference::from_entity(subject)?))
    }

    pub fn for_subject_ref(mut self, subject: EntityReference) -> Self {
        self.subject = Some(subject);
        self
    }

    pub fn caused_by(self, causer: &dyn Loggable) -> ActivityLogResult<Self> {
        Ok(self.caused_by_ref(EntityReference::from_entity(causer)?))
    }

    pub fn caused_by_ref(mut self, causer: EntityReference) -> Self {
        self.causer = Some(causer);
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
