//! Custom command factory for creating test custom command entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test custom commands with customizable fields.
pub struct CustomCommandFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    name: String,
    response: String,
    created_by: u64,
}

impl<'a> CustomCommandFactory<'a> {
    /// Creates a new CustomCommandFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `1`
    /// - name: `"command{id}"`
    /// - response: `"Response {id}"`
    /// - created_by: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: 1,
            name: format!("command{}", id),
            response: format!("Response {}", id),
            created_by: 1,
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn response(mut self, response: impl Into<String>) -> Self {
        self.response = response.into();
        self
    }

    pub fn created_by(mut self, created_by: u64) -> Self {
        self.created_by = created_by;
        self
    }

    /// Builds and inserts the custom command entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::custom_command::Model)` - Created custom command entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::custom_command::Model, DbErr> {
        entity::custom_command::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id.to_string()),
            name: ActiveValue::Set(self.name),
            response: ActiveValue::Set(self.response),
            created_by: ActiveValue::Set(self.created_by.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a custom command with default values.
///
/// Shorthand for `CustomCommandFactory::new(db).build().await`.
pub async fn create_custom_command(
    db: &DatabaseConnection,
) -> Result<entity::custom_command::Model, DbErr> {
    CustomCommandFactory::new(db).build().await
}
