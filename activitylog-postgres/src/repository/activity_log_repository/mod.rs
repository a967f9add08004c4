pub mod repo_impl;
pub mod save;
pub mod find_by_id;
pub mod find_all;
pub mod delete_batch;
pub mod truncate;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::ActivityLogRepositoryImpl;
