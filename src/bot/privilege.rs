//! Mapping from Discord permission bits to capability tags.
//!
//! Interactions carry the invoking member's resolved permissions, so most requests
//! never hit the REST API. `HttpPrivilegeSource` computes the same set from roles
//! when an interaction arrives without them.

use std::collections::HashSet;
use std::sync::Arc;

use serenity::all::{GuildId, Permissions, UserId};
use serenity::async_trait;
use serenity::http::Http;

use crate::{error::AppError, gateway::PrivilegeSource, model::command::Privilege};

/// Capability tags and the Discord permission each one stands for.
const PRIVILEGE_PERMISSIONS: [(&str, Permissions); 7] = [
    (Privilege::ADMINISTRATOR, Permissions::ADMINISTRATOR),
    (Privilege::BAN_MEMBERS, Permissions::BAN_MEMBERS),
    (Privilege::KICK_MEMBERS, Permissions::KICK_MEMBERS),
    (Privilege::MODERATE_MEMBERS, Permissions::MODERATE_MEMBERS),
    (Privilege::MANAGE_MESSAGES, Permissions::MANAGE_MESSAGES),
    (Privilege::MANAGE_GUILD, Permissions::MANAGE_GUILD),
    (Privilege::MANAGE_ROLES, Permissions::MANAGE_ROLES),
];

/// Converts Discord permissions into capability tags.
///
/// `ADMINISTRATOR` implies every tag.
pub fn privileges_from_permissions(permissions: Permissions) -> HashSet<Privilege> {
    let administrator = permissions.contains(Permissions::ADMINISTRATOR);

    PRIVILEGE_PERMISSIONS
        .iter()
        .filter(|(_, permission)| administrator || permissions.contains(*permission))
        .map(|(tag, _)| Privilege::new(*tag))
        .collect()
}

/// The Discord permission a capability tag stands for, if it is a known tag.
pub fn permission_for(privilege: &Privilege) -> Option<Permissions> {
    PRIVILEGE_PERMISSIONS
        .iter()
        .find(|(tag, _)| *tag == privilege.as_str())
        .map(|(_, permission)| *permission)
}

/// Resolves privileges from guild roles over the REST API.
pub struct HttpPrivilegeSource {
    http: Arc<Http>,
}

impl HttpPrivilegeSource {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl PrivilegeSource for HttpPrivilegeSource {
    /// Unions the permissions of `@everyone` and the member's roles. The guild owner
    /// holds every privilege.
    async fn resolve_caller_privileges(
        &self,
        caller_id: u64,
        guild_id: u64,
    ) -> Result<HashSet<Privilege>, AppError> {
        let guild = GuildId::new(guild_id);
        let user = UserId::new(caller_id);

        let partial_guild = self.http.get_guild(guild).await?;
        if partial_guild.owner_id == user {
            return Ok(privileges_from_permissions(Permissions::all()));
        }

        let member = self.http.get_member(guild, user).await?;
        let roles = self.http.get_guild_roles(guild).await?;

        // The @everyone role shares the guild's ID.
        let permissions = roles
            .iter()
            .filter(|role| role.id.get() == guild_id || member.roles.contains(&role.id))
            .fold(Permissions::empty(), |acc, role| acc | role.permissions);

        Ok(privileges_from_permissions(permissions))
    }
}
