//! Narrow interfaces to the chat platform.
//!
//! The registry and dispatcher only talk to the outside world through these traits.
//! The serenity-backed implementations live in `bot`; tests substitute recording
//! fakes.

use std::collections::HashSet;

use serenity::async_trait;

use crate::error::AppError;
use crate::model::{command::Privilege, outcome::Response};

/// Handle back to the gateway for delivering the result of one request.
#[async_trait]
pub trait ReplyChannel: Send + Sync {
    /// Delivers the primary outcome followed by any follow-up messages.
    async fn send(&self, response: &Response) -> Result<(), AppError>;

    /// Delivers what is left of a response whose primary outcome already went out
    /// through `send`: its follow-ups, or its failure message if the handler failed
    /// or timed out after acknowledging.
    async fn send_follow_ups(&self, response: &Response) -> Result<(), AppError>;
}

/// Looks up which capability tags a caller holds in a given guild.
#[async_trait]
pub trait PrivilegeSource: Send + Sync {
    async fn resolve_caller_privileges(
        &self,
        caller_id: u64,
        guild_id: u64,
    ) -> Result<HashSet<Privilege>, AppError>;
}

/// Guild moderation actions available to command handlers.
#[async_trait]
pub trait Moderation: Send + Sync {
    async fn ban(
        &self,
        guild_id: u64,
        user_id: u64,
        delete_message_days: u8,
        reason: Option<&str>,
    ) -> Result<(), AppError>;

    async fn kick(&self, guild_id: u64, user_id: u64, reason: Option<&str>)
        -> Result<(), AppError>;
}
