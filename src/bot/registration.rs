//! Publishes the registry to Discord as application commands.

use serenity::all::{Command, CommandOptionType, CreateCommand, CreateCommandOption, GuildId};
use serenity::http::Http;

use crate::{
    bot::privilege::permission_for,
    error::AppError,
    model::command::ParameterKind,
    registry::{RegisteredCommand, Registry},
};

/// Replaces the bot's application commands with the registry's commands.
///
/// Registers in `dev_guild_id` when set, globally otherwise.
///
/// # Returns
/// - `Ok(usize)` - Number of commands registered
/// - `Err(AppError::DiscordErr)` - Discord rejected the bulk overwrite
pub async fn register_commands(
    http: &Http,
    registry: &Registry,
    dev_guild_id: Option<u64>,
) -> Result<usize, AppError> {
    let commands: Vec<CreateCommand> = registry.list(None).map(to_create_command).collect();
    let count = commands.len();

    match dev_guild_id {
        Some(guild_id) => {
            GuildId::new(guild_id).set_commands(http, commands).await?;
            tracing::info!("Registered {} commands in guild {}", count, guild_id);
        }
        None => {
            Command::set_global_commands(http, commands).await?;
            tracing::info!("Registered {} global commands", count);
        }
    }

    Ok(count)
}

/// Builds the Discord definition of one command.
///
/// A required privilege becomes the command's default member permissions so Discord
/// hides it from members who lack it. The dispatcher still enforces the check.
pub fn to_create_command(command: &RegisteredCommand) -> CreateCommand {
    let mut create = CreateCommand::new(command.name()).description(command.description());

    for parameter in command.parameters() {
        let description = if parameter.description.is_empty() {
            parameter.name.as_str()
        } else {
            parameter.description.as_str()
        };

        create = create.add_option(
            CreateCommandOption::new(option_type(parameter.kind), &parameter.name, description)
                .required(parameter.required),
        );
    }

    if let Some(privilege) = command.required_privilege() {
        match permission_for(privilege) {
            Some(permission) => create = create.default_member_permissions(permission),
            None => tracing::warn!(
                "/{} requires unknown privilege {}; leaving it visible to everyone",
                command.name(),
                privilege
            ),
        }
    }

    create
}

fn option_type(kind: ParameterKind) -> CommandOptionType {
    match kind {
        ParameterKind::String => CommandOptionType::String,
        ParameterKind::Integer => CommandOptionType::Integer,
        ParameterKind::Boolean => CommandOptionType::Boolean,
        ParameterKind::UserReference => CommandOptionType::User,
        ParameterKind::RoleReference => CommandOptionType::Role,
    }
}
