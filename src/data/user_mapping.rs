//! User mapping data repository.
//!
//! Stores one external account name per Discord user.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{
    error::AppError,
    model::user_mapping::{UpsertUserMappingParam, UserMapping},
};

/// Repository providing database operations for user mappings.
pub struct UserMappingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserMappingRepository<'a> {
    /// Creates a new UserMappingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserMappingRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links a Discord user to an account name, replacing any existing link.
    ///
    /// `created_at` is kept from the original row on conflict; `account_name` and
    /// `updated_at` are overwritten.
    ///
    /// # Arguments
    /// - `param` - Discord ID and account name to store
    ///
    /// # Returns
    /// - `Ok(UserMapping)` - The created or updated mapping
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserMappingParam) -> Result<UserMapping, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::UserMapping::insert(entity::user_mapping::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            account_name: ActiveValue::Set(param.account_name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user_mapping::Column::DiscordId)
                .update_columns([
                    entity::user_mapping::Column::AccountName,
                    entity::user_mapping::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        UserMapping::from_entity(entity)
    }

    /// Finds the mapping for a Discord user.
    ///
    /// # Returns
    /// - `Ok(Some(UserMapping))` - The user has linked an account
    /// - `Ok(None)` - No mapping for this user
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_discord_id(&self, discord_id: u64) -> Result<Option<UserMapping>, AppError> {
        let entity = entity::prelude::UserMapping::find()
            .filter(entity::user_mapping::Column::DiscordId.eq(discord_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(UserMapping::from_entity).transpose()
    }

    /// Removes the mapping for a Discord user.
    ///
    /// # Returns
    /// - `Ok(true)` - A mapping was deleted
    /// - `Ok(false)` - The user had no mapping
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_by_discord_id(&self, discord_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::UserMapping::delete_many()
            .filter(entity::user_mapping::Column::DiscordId.eq(discord_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
