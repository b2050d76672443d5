//! Built-in slash commands.
//!
//! Each submodule defines one or more `CommandHandler`s. `BuiltinCommands` collects
//! their descriptors so the registry can be built at startup and rebuilt by `/reload`.

pub mod coinflip;
pub mod custom;
pub mod help;
pub mod moderation;
pub mod ping;
pub mod profile;
pub mod reload;
pub mod uptime;

#[cfg(test)]
mod test;

use crate::{
    dispatch::context::CommandContext,
    error::{command::CommandError, AppError},
    model::command::{Category, CommandDescriptor, Privilege},
    registry::DescriptorSource,
};

/// Descriptor source for every command compiled into the bot.
pub struct BuiltinCommands;

impl DescriptorSource for BuiltinCommands {
    fn load_descriptors(&self) -> Vec<CommandDescriptor> {
        vec![
            CommandDescriptor::new("ping", "Check that the bot is responding", ping::Ping)
                .category(Category::General),
            CommandDescriptor::new("help", "List available commands", help::Help)
                .category(Category::General)
                .parameter(
                    "category",
                    "string",
                    false,
                    "Only list commands in this category",
                )
                .parameter("verbose", "boolean", false, "Show each command's parameters"),
            CommandDescriptor::new("uptime", "Show how long the bot has been running", uptime::Uptime)
                .category(Category::Utility),
            CommandDescriptor::new(
                "reload",
                "Reload the command registry",
                reload::Reload::new(BuiltinCommands),
            )
            .category(Category::Utility)
            .required_privilege(Privilege::ADMINISTRATOR),
            CommandDescriptor::new("coinflip", "Flip a coin", coinflip::CoinFlip)
                .category(Category::Fun),
            CommandDescriptor::new("ban", "Ban a member from this server", moderation::Ban)
                .category(Category::Moderation)
                .parameter("user", "user-reference", true, "Member to ban")
                .parameter("reason", "string", false, "Reason shown in the audit log")
                .parameter(
                    "delete_days",
                    "integer",
                    false,
                    "Days of their messages to delete (0-7)",
                )
                .required_privilege(Privilege::MODERATE_MEMBERS),
            CommandDescriptor::new("kick", "Kick a member from this server", moderation::Kick)
                .category(Category::Moderation)
                .parameter("user", "user-reference", true, "Member to kick")
                .parameter("reason", "string", false, "Reason shown in the audit log")
                .required_privilege(Privilege::KICK_MEMBERS),
            CommandDescriptor::new("link", "Link your external account", profile::Link)
                .category(Category::Profile)
                .parameter("account", "string", true, "Your account name"),
            CommandDescriptor::new("unlink", "Remove your linked account", profile::Unlink)
                .category(Category::Profile),
            CommandDescriptor::new("whois", "Show a member's linked account", profile::Whois)
                .category(Category::Profile)
                .parameter("user", "user-reference", true, "Member to look up"),
            CommandDescriptor::new(
                "addcommand",
                "Create or update a custom command",
                custom::AddCommand,
            )
            .category(Category::Custom)
            .parameter("name", "string", true, "Trigger name")
            .parameter("response", "string", true, "Text the bot replies with")
            .required_privilege(Privilege::MANAGE_MESSAGES),
            CommandDescriptor::new(
                "removecommand",
                "Delete a custom command",
                custom::RemoveCommand,
            )
            .category(Category::Custom)
            .parameter("name", "string", true, "Trigger name")
            .required_privilege(Privilege::MANAGE_MESSAGES),
            CommandDescriptor::new(
                "customcommands",
                "List this server's custom commands",
                custom::ListCommands,
            )
            .category(Category::Custom),
        ]
    }
}

/// Replies with the message of a user input error and passes every other error on.
///
/// # Returns
/// - `Ok(Some(T))` - The operation succeeded
/// - `Ok(None)` - The operation was rejected and the caller has been told why
/// - `Err(CommandError)` - Any other failure
fn reply_on_bad_request<T>(
    ctx: &CommandContext,
    result: Result<T, AppError>,
) -> Result<Option<T>, CommandError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(AppError::BadRequest(message)) => {
            ctx.reply(message);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Guild the command was used in, or a reply explaining it only works in servers.
fn require_guild(ctx: &CommandContext) -> Option<u64> {
    if ctx.guild_id().is_none() {
        ctx.reply(format!(
            "`/{}` can only be used in a server.",
            ctx.command_name()
        ));
    }
    ctx.guild_id()
}
