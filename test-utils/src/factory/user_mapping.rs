//! User mapping factory for creating test mapping entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test user mappings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let mapping = UserMappingFactory::new(&db)
///     .discord_id(123456789)
///     .account_name("octocat")
///     .build()
///     .await?;
/// ```
pub struct UserMappingFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: u64,
    account_name: String,
}

impl<'a> UserMappingFactory<'a> {
    /// Creates a new UserMappingFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: auto-incremented
    /// - account_name: `"account_{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: id,
            account_name: format!("account_{}", id),
        }
    }

    pub fn discord_id(mut self, discord_id: u64) -> Self {
        self.discord_id = discord_id;
        self
    }

    pub fn account_name(mut self, account_name: impl Into<String>) -> Self {
        self.account_name = account_name.into();
        self
    }

    /// Builds and inserts the mapping entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user_mapping::Model)` - Created mapping entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_mapping::Model, DbErr> {
        let now = Utc::now();
        entity::user_mapping::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id.to_string()),
            account_name: ActiveValue::Set(self.account_name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user mapping with default values.
///
/// Shorthand for `UserMappingFactory::new(db).build().await`.
pub async fn create_user_mapping(
    db: &DatabaseConnection,
) -> Result<entity::user_mapping::Model, DbErr> {
    UserMappingFactory::new(db).build().await
}
