//! Discord gateway adapter.
//!
//! Connects the dispatcher to Discord through serenity. Slash command interactions
//! are converted into `InboundRequest`s and dispatched; the resulting `Response` is
//! delivered back as an interaction response plus follow-ups. Plain messages feed the
//! custom command trigger and the mention greeting.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability and interaction context
//! - `GUILD_MESSAGES` - Receive messages in guild channels
//! - `DIRECT_MESSAGES` - Receive direct messages for the mention greeting
//! - `MESSAGE_CONTENT` - Read message text for custom command triggers (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod moderation;
pub mod privilege;
pub mod registration;
pub mod reply;
pub mod start;
