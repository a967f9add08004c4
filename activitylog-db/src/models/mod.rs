pub mod activity_log;
pub mod entity_record;
pub mod entity_reference;
pub mod identifiable;
pub mod loggable;

// Re-exports
pub use activity_log::*;
pub use entity_record::*;
pub use entity_reference::*;
pub use identifiable::*;
pub use loggable::*;
