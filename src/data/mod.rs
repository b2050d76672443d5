//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for each persisted domain and convert entity
//! models into domain models at the boundary. Discord IDs are stored as strings and
//! exposed as `u64`.

pub mod custom_command;
pub mod user_mapping;

#[cfg(test)]
mod test;
