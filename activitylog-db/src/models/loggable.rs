use super::identifiable::Identifiable;

/// Trait for host entities that can appear as the subject or causer of an activity
///
/// # Example
/// ```
/// use activitylog_db::models::{Identifiable, Loggable};
///
/// struct Post {
///     id: Option<i64>,
///     title: String,
/// }
///
/// impl Identifiable for Post {
///     fn get_id(&self) -> Option<i64> {
///         self.id
///     }
/// }
///
/// impl Loggable for Post {
///     fn kind_name(&self) -> &str {
///         "post"
///     }
/// }
/// ```
pub trait Loggable: Identifiable + Send + Sync {
    /// Returns the singular logical name of the entity's kind (e.g. `"post"`)
    ///
    /// This is the key under which the kind is registered in an
    /// [`EntityRegistry`](crate::registry::EntityRegistry), never a table or type name.
    fn kind_name(&self) -> &str;
}
