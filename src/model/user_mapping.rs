//! Links between Discord users and external account names.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A Discord user's linked external account.
#[derive(Debug, Clone, PartialEq)]
pub struct UserMapping {
    /// Discord ID of the user
    pub discord_id: u64,
    /// External account name the user linked.
    pub account_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserMapping {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(UserMapping)` - The converted domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored Discord ID is not a valid u64
    pub fn from_entity(entity: entity::user_mapping::Model) -> Result<Self, AppError> {
        Ok(Self {
            discord_id: parse_u64_from_string(entity.discord_id)?,
            account_name: entity.account_name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for linking (or re-linking) a user's account.
#[derive(Debug, Clone)]
pub struct UpsertUserMappingParam {
    pub discord_id: u64,
    pub account_name: String,
}
