//! Custom command data repository.
//!
//! Custom commands are unique per `(guild_id, name)`, enforced by a unique index.
//! Names are stored exactly as given; normalization happens in the service layer.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    error::AppError,
    model::custom_command::{CustomCommand, UpsertCustomCommandParam},
};

/// Repository providing database operations for guild custom commands.
pub struct CustomCommandRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomCommandRepository<'a> {
    /// Creates a new CustomCommandRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CustomCommandRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a custom command or replaces the response of an existing one.
    ///
    /// The write is a single insert with `ON CONFLICT (guild_id, name) DO UPDATE`, so
    /// concurrent saves of the same name never produce a second row. `created_at` is
    /// kept from the original row on conflict.
    ///
    /// # Arguments
    /// - `param` - Guild, name, response and author of the command
    ///
    /// # Returns
    /// - `Ok((CustomCommand, true))` - No command with this name existed before the write
    /// - `Ok((CustomCommand, false))` - An existing command was updated
    /// - `Err(AppError::DbErr)` - Database error during query or upsert
    pub async fn upsert(
        &self,
        param: UpsertCustomCommandParam,
    ) -> Result<(CustomCommand, bool), AppError> {
        let existed = self.find_entity(param.guild_id, &param.name).await?.is_some();

        let entity =
            entity::prelude::CustomCommand::insert(entity::custom_command::ActiveModel {
                guild_id: ActiveValue::Set(param.guild_id.to_string()),
                name: ActiveValue::Set(param.name),
                response: ActiveValue::Set(param.response),
                created_by: ActiveValue::Set(param.created_by.to_string()),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .on_conflict(
                OnConflict::columns([
                    entity::custom_command::Column::GuildId,
                    entity::custom_command::Column::Name,
                ])
                .update_columns([
                    entity::custom_command::Column::Response,
                    entity::custom_command::Column::CreatedBy,
                ])
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        Ok((CustomCommand::from_entity(entity)?, !existed))
    }

    /// Finds a guild's custom command by name.
    ///
    /// # Returns
    /// - `Ok(Some(CustomCommand))` - Command exists in the guild
    /// - `Ok(None)` - No such command in the guild
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_name(
        &self,
        guild_id: u64,
        name: &str,
    ) -> Result<Option<CustomCommand>, AppError> {
        self.find_entity(guild_id, name)
            .await?
            .map(CustomCommand::from_entity)
            .transpose()
    }

    /// Gets all custom commands of a guild ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<CustomCommand>)` - Commands of the guild (empty if none)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_by_guild(&self, guild_id: u64) -> Result<Vec<CustomCommand>, AppError> {
        entity::prelude::CustomCommand::find()
            .filter(entity::custom_command::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::custom_command::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(CustomCommand::from_entity)
            .collect()
    }

    /// Deletes a guild's custom command by name.
    ///
    /// # Returns
    /// - `Ok(true)` - The command was deleted
    /// - `Ok(false)` - No such command in the guild
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, guild_id: u64, name: &str) -> Result<bool, AppError> {
        let result = entity::prelude::CustomCommand::delete_many()
            .filter(entity::custom_command::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::custom_command::Column::Name.eq(name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_entity(
        &self,
        guild_id: u64,
        name: &str,
    ) -> Result<Option<entity::custom_command::Model>, AppError> {
        let entity = entity::prelude::CustomCommand::find()
            .filter(entity::custom_command::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::custom_command::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity)
    }
}
