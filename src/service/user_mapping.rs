//! Account linking for Discord users.

use sea_orm::DatabaseConnection;

use crate::{
    data::user_mapping::UserMappingRepository,
    error::AppError,
    model::user_mapping::{UpsertUserMappingParam, UserMapping},
};

const MAX_ACCOUNT_NAME_LENGTH: usize = 64;

/// Service providing business logic for user mappings.
pub struct UserMappingService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserMappingService<'a> {
    /// Creates a new UserMappingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserMappingService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links `discord_id` to `account_name`, replacing any previous link.
    ///
    /// The account name is trimmed before it is stored.
    ///
    /// # Returns
    /// - `Ok(UserMapping)` - The stored mapping
    /// - `Err(AppError::BadRequest)` - Account name is blank, too long or contains whitespace
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn link(&self, discord_id: u64, account_name: &str) -> Result<UserMapping, AppError> {
        let account_name = validate_account_name(account_name)?;

        let mapping = UserMappingRepository::new(self.db)
            .upsert(UpsertUserMappingParam {
                discord_id,
                account_name,
            })
            .await?;

        tracing::debug!(
            "Linked user {} to account {}",
            mapping.discord_id,
            mapping.account_name
        );

        Ok(mapping)
    }

    /// Removes a user's link.
    ///
    /// # Returns
    /// - `Ok(true)` - A link was removed
    /// - `Ok(false)` - The user had nothing linked
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn unlink(&self, discord_id: u64) -> Result<bool, AppError> {
        UserMappingRepository::new(self.db)
            .delete_by_discord_id(discord_id)
            .await
    }

    /// Looks up a user's linked account.
    pub async fn get(&self, discord_id: u64) -> Result<Option<UserMapping>, AppError> {
        UserMappingRepository::new(self.db)
            .find_by_discord_id(discord_id)
            .await
    }
}

fn validate_account_name(account_name: &str) -> Result<String, AppError> {
    let account_name = account_name.trim();

    if account_name.is_empty() {
        return Err(AppError::BadRequest(
            "Account name must not be empty.".to_string(),
        ));
    }

    if account_name.chars().count() > MAX_ACCOUNT_NAME_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Account name must be at most {} characters.",
            MAX_ACCOUNT_NAME_LENGTH
        )));
    }

    if account_name.chars().any(char::is_whitespace) {
        return Err(AppError::BadRequest(
            "Account name must not contain spaces.".to_string(),
        ));
    }

    Ok(account_name.to_string())
}
