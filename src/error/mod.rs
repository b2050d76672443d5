//! Error types for startup, persistence, registry loading and command handling.
//!
//! `AppError` is the top-level error returned from startup and the data layer. Load-time
//! registry problems are reported through `RegistryError`, and handlers return
//! `CommandError`, which the dispatcher always converts into a sanitized outcome.

pub mod command;
pub mod config;
pub mod internal;
pub mod registry;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, registry::RegistryError};

/// Top-level application error type.
///
/// Aggregates the error types that can occur outside of a single dispatch. Most
/// variants use `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// The command registry could not be built from its descriptors.
    ///
    /// Fatal at startup. During a reload the previously published registry stays active.
    #[error(transparent)]
    RegistryErr(#[from] RegistryError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Internal invariant violated, such as a corrupt stored ID.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Invalid input supplied by a user.
    ///
    /// The message is safe to show back to the caller.
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
