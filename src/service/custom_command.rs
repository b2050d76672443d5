//! Guild custom commands: validation, storage and message trigger resolution.
//!
//! Names are case-insensitive. They are normalized to lowercase before every read
//! and write, so `!Rules` and `!rules` resolve to the same command.

use sea_orm::DatabaseConnection;

use crate::{
    data::custom_command::CustomCommandRepository,
    error::AppError,
    model::custom_command::{CustomCommand, UpsertCustomCommandParam},
};

const MAX_NAME_LENGTH: usize = 32;
/// Discord's message content limit.
const MAX_RESPONSE_LENGTH: usize = 2000;

/// Service providing business logic for guild custom commands.
pub struct CustomCommandService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CustomCommandService<'a> {
    /// Creates a new CustomCommandService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CustomCommandService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or replaces a custom command in a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the command belongs to
    /// - `name` - Trigger name; normalized to lowercase
    /// - `response` - Text to reply with; trimmed
    /// - `created_by` - Discord ID of the member saving the command
    ///
    /// # Returns
    /// - `Ok((CustomCommand, true))` - A new command was created
    /// - `Ok((CustomCommand, false))` - An existing command was replaced
    /// - `Err(AppError::BadRequest)` - Invalid name or response
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn save(
        &self,
        guild_id: u64,
        name: &str,
        response: &str,
        created_by: u64,
    ) -> Result<(CustomCommand, bool), AppError> {
        let name = normalize_name(name)?;
        let response = validate_response(response)?;

        let (command, created) = CustomCommandRepository::new(self.db)
            .upsert(UpsertCustomCommandParam {
                guild_id,
                name,
                response,
                created_by,
            })
            .await?;

        tracing::info!(
            "{} custom command {} in guild {} by user {}",
            if created { "Created" } else { "Updated" },
            command.name,
            guild_id,
            created_by
        );

        Ok((command, created))
    }

    /// Removes a custom command from a guild.
    ///
    /// # Returns
    /// - `Ok(true)` - The command was removed
    /// - `Ok(false)` - The guild has no command with that name
    /// - `Err(AppError::BadRequest)` - Invalid name
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove(&self, guild_id: u64, name: &str) -> Result<bool, AppError> {
        let name = normalize_name(name)?;

        CustomCommandRepository::new(self.db)
            .delete(guild_id, &name)
            .await
    }

    /// Lists a guild's custom commands ordered by name.
    pub async fn list(&self, guild_id: u64) -> Result<Vec<CustomCommand>, AppError> {
        CustomCommandRepository::new(self.db)
            .get_all_by_guild(guild_id)
            .await
    }

    /// Resolves a chat message to a custom command response.
    ///
    /// A message triggers a command when it starts with `prefix` immediately followed
    /// by the command name. Anything after the first whitespace is ignored.
    ///
    /// # Returns
    /// - `Ok(Some(response))` - The message triggers a stored command
    /// - `Ok(None)` - Not a trigger, or no such command in the guild
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn resolve_trigger(
        &self,
        guild_id: u64,
        content: &str,
        prefix: &str,
    ) -> Result<Option<String>, AppError> {
        let Some(name) = parse_trigger(content, prefix) else {
            return Ok(None);
        };

        let command = CustomCommandRepository::new(self.db)
            .find_by_name(guild_id, &name)
            .await?;

        Ok(command.map(|command| command.response))
    }
}

/// Extracts a normalized command name from `<prefix><name> [anything]`.
pub fn parse_trigger(content: &str, prefix: &str) -> Option<String> {
    if prefix.is_empty() {
        return None;
    }

    let rest = content.trim_start().strip_prefix(prefix)?;
    let word = rest.split_whitespace().next()?;

    // A message like "! hello" has whitespace right after the prefix.
    if !rest.starts_with(word) {
        return None;
    }

    normalize_name(word).ok()
}

/// Lowercases a custom command name and checks its characters.
pub fn normalize_name(name: &str) -> Result<String, AppError> {
    let name = name.trim().to_lowercase();

    if name.is_empty() || name.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Command name must be 1-{} characters.",
            MAX_NAME_LENGTH
        )));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(AppError::BadRequest(
            "Command name may only contain letters, digits, '-' and '_'.".to_string(),
        ));
    }

    Ok(name)
}

fn validate_response(response: &str) -> Result<String, AppError> {
    let response = response.trim();

    if response.is_empty() {
        return Err(AppError::BadRequest("Response must not be empty.".to_string()));
    }

    if response.chars().count() > MAX_RESPONSE_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Response must be at most {} characters.",
            MAX_RESPONSE_LENGTH
        )));
    }

    Ok(response.to_string())
}
