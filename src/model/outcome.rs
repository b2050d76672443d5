//! Normalized results of a dispatch.

use std::fmt;

/// Why a dispatch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No registered command has the requested name.
    UnknownCommand,
    /// One or more arguments were missing or not convertible to their declared kind.
    InvalidArguments,
    /// The caller lacks the command's required privilege.
    PermissionDenied,
    /// The handler returned an error, panicked or produced no reply.
    HandlerFault,
    /// The handler did not finish within the dispatch timeout.
    Timeout,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::UnknownCommand => "unknown command",
            ErrorKind::InvalidArguments => "invalid arguments",
            ErrorKind::PermissionDenied => "permission denied",
            ErrorKind::HandlerFault => "handler fault",
            ErrorKind::Timeout => "timeout",
        };
        f.write_str(label)
    }
}

/// The single result of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The handler replied with content.
    Replied(String),
    /// The handler acknowledged the request and will follow up.
    Deferred,
    /// The dispatch failed; the message is safe to show to the caller.
    Failed(ErrorKind, String),
}

impl Outcome {
    pub fn failed(kind: ErrorKind, message: impl Into<String>) -> Self {
        Outcome::Failed(kind, message.into())
    }
}

/// What the gateway delivers for one request: the primary outcome plus any extra
/// replies the handler produced after it, in the order they were made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub outcome: Outcome,
    pub follow_ups: Vec<String>,
}

impl Response {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            follow_ups: Vec::new(),
        }
    }

    pub fn failed(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::new(Outcome::failed(kind, message))
    }
}
