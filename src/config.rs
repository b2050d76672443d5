use std::time::Duration;

use crate::{
    dispatch::{DEFAULT_DEFERRED_TIMEOUT, DEFAULT_TIMEOUT},
    error::{config::ConfigError, AppError},
};

const DEFAULT_CUSTOM_COMMAND_PREFIX: &str = "!";

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    /// Guild to register slash commands in instead of globally. Guild commands
    /// update instantly, which is useful during development.
    pub discord_dev_guild_id: Option<u64>,

    /// Time a command has to reply or defer. Must stay under Discord's three second
    /// window for the first interaction response.
    pub dispatch_timeout: Duration,
    /// Total time a command that deferred may run.
    pub deferred_timeout: Duration,
    pub custom_command_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require =
            |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let discord_dev_guild_id = match get("DISCORD_DEV_GUILD_ID") {
            Some(value) => Some(parse_u64("DISCORD_DEV_GUILD_ID", &value)?),
            None => None,
        };

        let dispatch_timeout = match get("DISPATCH_TIMEOUT_MS") {
            Some(value) => Duration::from_millis(parse_positive("DISPATCH_TIMEOUT_MS", &value)?),
            None => DEFAULT_TIMEOUT,
        };
        let deferred_timeout = match get("DEFERRED_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(parse_positive("DEFERRED_TIMEOUT_SECS", &value)?),
            None => DEFAULT_DEFERRED_TIMEOUT,
        };

        Ok(Self {
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            database_url: require("DATABASE_URL")?,
            discord_dev_guild_id,
            dispatch_timeout,
            deferred_timeout,
            custom_command_prefix: get("CUSTOM_COMMAND_PREFIX")
                .map(|prefix| prefix.trim().to_string())
                .unwrap_or_else(|| DEFAULT_CUSTOM_COMMAND_PREFIX.to_string()),
        })
    }
}

fn parse_u64(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| invalid(name, value, &e.to_string()))
}

fn parse_positive(name: &str, value: &str) -> Result<u64, ConfigError> {
    match parse_u64(name, value)? {
        0 => Err(invalid(name, value, "must be at least 1")),
        parsed => Ok(parsed),
    }
}

fn invalid(name: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
