use thiserror::Error;

use crate::error::AppError;

/// Errors a command handler can return.
///
/// The dispatcher never shows these to the caller verbatim. Every variant is logged
/// and surfaced as a generic `HandlerFault` outcome.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Failure in the data layer or an outbound Discord call.
    #[error(transparent)]
    AppErr(#[from] AppError),

    /// The handler needs a service the dispatcher was not configured with.
    #[error("Service '{0}' is not available")]
    MissingService(&'static str),

    /// The dispatch was abandoned and the handler observed the cancellation signal.
    #[error("Command execution was cancelled")]
    Cancelled,
}

impl From<sea_orm::DbErr> for CommandError {
    fn from(err: sea_orm::DbErr) -> Self {
        CommandError::AppErr(AppError::DbErr(err))
    }
}

impl From<serenity::Error> for CommandError {
    fn from(err: serenity::Error) -> Self {
        CommandError::AppErr(AppError::from(err))
    }
}
