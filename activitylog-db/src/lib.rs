pub mod models;
pub mod options;
pub mod registry;
pub mod repository;

#[cfg(test)]
pub(crate) mod test_utils;

pub use models::*;
pub use options::*;
pub use registry::*;
