/// Trait for entities that can be uniquely identified by an integer primary key
pub trait Identifiable {
    /// Returns the primary key of the entity
    ///
    /// `None` means the entity has not been persisted yet.
    fn get_id(&self) -> Option<i64>;
}
