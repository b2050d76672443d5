//! Slash command interactions to dispatcher requests.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde_json::{json, Value};
use serenity::all::{CommandDataOption, CommandDataOptionValue, CommandInteraction, Context, Interaction};

use crate::{
    bot::{privilege::privileges_from_permissions, reply::InteractionReplyChannel},
    dispatch::Dispatcher,
    gateway::PrivilegeSource,
    model::{command::Privilege, request::InboundRequest},
};

/// Dispatches slash command interactions. Other interaction kinds are ignored.
pub async fn handle_interaction(
    dispatcher: &Dispatcher,
    privilege_source: &dyn PrivilegeSource,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let caller_privileges = resolve_privileges(privilege_source, &command).await;
    let reply_channel = Arc::new(InteractionReplyChannel::new(
        Arc::clone(&ctx.http),
        command.clone(),
    ));

    let request = InboundRequest::new(
        command.data.name.clone(),
        command.user.id.get(),
        reply_channel,
    );
    let request = caller_privileges
        .into_iter()
        .fold(request, InboundRequest::privilege);
    let request = options_to_arguments(&command.data.options)
        .into_iter()
        .fold(request, |request, (name, value)| request.argument(name, value));
    let request = match command.guild_id {
        Some(guild_id) => request.guild(guild_id.get()),
        None => request,
    };

    dispatcher.handle(request).await;
}

/// Privileges of the invoking member.
///
/// Uses the permissions Discord resolved into the interaction and falls back to
/// the privilege source. Lookup failures and direct messages yield no privileges.
async fn resolve_privileges(
    privilege_source: &dyn PrivilegeSource,
    command: &CommandInteraction,
) -> HashSet<Privilege> {
    let Some(guild_id) = command.guild_id else {
        return HashSet::new();
    };

    if let Some(permissions) = command.member.as_ref().and_then(|member| member.permissions) {
        return privileges_from_permissions(permissions);
    }

    match privilege_source
        .resolve_caller_privileges(command.user.id.get(), guild_id.get())
        .await
    {
        Ok(privileges) => privileges,
        Err(e) => {
            tracing::warn!(
                "Failed to resolve privileges of user {} in guild {}: {:?}",
                command.user.id,
                guild_id,
                e
            );
            HashSet::new()
        }
    }
}

fn options_to_arguments(options: &[CommandDataOption]) -> HashMap<String, Value> {
    options
        .iter()
        .filter_map(|option| Some((option.name.clone(), option_value(&option.value)?)))
        .collect()
}

/// Raw JSON for one option value. Snowflakes are passed as strings.
pub fn option_value(value: &CommandDataOptionValue) -> Option<Value> {
    let value = match value {
        CommandDataOptionValue::String(s) => json!(s),
        CommandDataOptionValue::Integer(i) => json!(i),
        CommandDataOptionValue::Number(n) => json!(n),
        CommandDataOptionValue::Boolean(b) => json!(b),
        CommandDataOptionValue::User(id) => json!(id.to_string()),
        CommandDataOptionValue::Role(id) => json!(id.to_string()),
        CommandDataOptionValue::Channel(id) => json!(id.to_string()),
        CommandDataOptionValue::Mentionable(id) => json!(id.to_string()),
        _ => return None,
    };

    Some(value)
}
