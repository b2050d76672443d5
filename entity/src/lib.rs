//! SeaORM entity models for the bot's persistence layer.

pub mod prelude;

pub mod custom_command;
pub mod user_mapping;
