//! Guild-scoped text commands created by members.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A stored text command triggered by `<prefix><name>` in a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomCommand {
    pub guild_id: u64,
    /// Normalized lowercase trigger name.
    pub name: String,
    /// Text the bot replies with.
    pub response: String,
    /// Discord ID of the member who last saved the command.
    pub created_by: u64,
    pub created_at: DateTime<Utc>,
}

impl CustomCommand {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(CustomCommand)` - The converted domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored Discord ID is not a valid u64
    pub fn from_entity(entity: entity::custom_command::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: parse_u64_from_string(entity.guild_id)?,
            name: entity.name,
            response: entity.response,
            created_by: parse_u64_from_string(entity.created_by)?,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating or replacing a custom command.
#[derive(Debug, Clone)]
pub struct UpsertCustomCommandParam {
    pub guild_id: u64,
    pub name: String,
    pub response: String,
    pub created_by: u64,
}
