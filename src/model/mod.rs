//! Domain models shared by the registry, dispatcher, commands and data layer.
//!
//! Command-facing types (`command`, `request`, `outcome`) are transport agnostic;
//! persisted types (`user_mapping`, `custom_command`) are converted from entity models
//! at the repository boundary.

pub mod command;
pub mod custom_command;
pub mod outcome;
pub mod request;
pub mod user_mapping;
