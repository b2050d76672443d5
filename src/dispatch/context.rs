//! Per-dispatch context handed to command handlers.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::{
    dispatch::arguments::Arguments,
    error::command::CommandError,
    gateway::Moderation,
    model::outcome::{Outcome, Response},
    registry::{Registry, RegistryHandle},
};

/// External services a handler may call.
///
/// Cloned into every dispatch. All fields are cheap to clone: the database
/// connection is a pool handle and the rest are reference counted.
#[derive(Clone)]
pub struct Services {
    pub db: Option<DatabaseConnection>,
    pub moderation: Option<Arc<dyn Moderation>>,
    /// Handle used by commands that reload the registry.
    pub registry: Option<Arc<RegistryHandle>>,
    /// When the process started, for uptime reporting.
    pub started_at: DateTime<Utc>,
}

impl Services {
    pub fn new() -> Self {
        Self {
            db: None,
            moderation: None,
            registry: None,
            started_at: Utc::now(),
        }
    }

    pub fn with_database(mut self, db: DatabaseConnection) -> Self {
        self.db = Some(db);
        self
    }

    pub fn with_moderation(mut self, moderation: Arc<dyn Moderation>) -> Self {
        self.moderation = Some(moderation);
        self
    }

    pub fn with_registry(mut self, registry: Arc<RegistryHandle>) -> Self {
        self.registry = Some(registry);
        self
    }

}

impl Default for Services {
    fn default() -> Self {
        Self::new()
    }
}

/// First reply a handler made.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Primary {
    Reply(String),
    Deferred,
}

#[derive(Debug, Default)]
struct ReplyState {
    primary: Option<Primary>,
    follow_ups: Vec<String>,
}

/// Replies collected from a handler once it has finished.
#[derive(Debug, Default)]
pub struct Replies {
    primary: Option<Primary>,
    follow_ups: Vec<String>,
}

impl Replies {
    /// Converts collected replies into a response, or `None` if the handler never
    /// replied or deferred.
    pub fn into_response(self) -> Option<Response> {
        let outcome = match self.primary? {
            Primary::Reply(content) => Outcome::Replied(content),
            Primary::Deferred => Outcome::Deferred,
        };

        Some(Response {
            outcome,
            follow_ups: self.follow_ups,
        })
    }
}

/// Everything a handler may use while executing one request.
///
/// The first `reply` or `defer` becomes the primary outcome. Any later `reply` is
/// queued as a follow-up and delivered after the primary; it never replaces it.
/// The primary is also published on the acknowledgement channel the moment it is
/// recorded, so the gateway can answer before the handler finishes.
pub struct CommandContext {
    command_name: String,
    caller_id: u64,
    guild_id: Option<u64>,
    arguments: Arguments,
    registry: Arc<Registry>,
    services: Services,
    cancellation: CancellationToken,
    acknowledgement: watch::Sender<Option<Outcome>>,
    replies: Mutex<ReplyState>,
}

impl CommandContext {
    pub fn new(
        command_name: impl Into<String>,
        caller_id: u64,
        guild_id: Option<u64>,
        arguments: Arguments,
        registry: Arc<Registry>,
        services: Services,
        cancellation: CancellationToken,
    ) -> Self {
        Self {
            command_name: command_name.into(),
            caller_id,
            guild_id,
            arguments,
            registry,
            services,
            cancellation,
            acknowledgement: watch::channel(None).0,
            replies: Mutex::new(ReplyState::default()),
        }
    }

    /// Publishes the primary outcome on `acknowledgement` as soon as it is recorded.
    pub fn with_acknowledgement(mut self, acknowledgement: watch::Sender<Option<Outcome>>) -> Self {
        self.acknowledgement = acknowledgement;
        self
    }

    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    pub fn caller_id(&self) -> u64 {
        self.caller_id
    }

    pub fn guild_id(&self) -> Option<u64> {
        self.guild_id
    }

    pub fn args(&self) -> &Arguments {
        &self.arguments
    }

    /// Registry snapshot this dispatch resolved against.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn db(&self) -> Result<&DatabaseConnection, CommandError> {
        self.services
            .db
            .as_ref()
            .ok_or(CommandError::MissingService("database"))
    }

    pub fn moderation(&self) -> Result<&Arc<dyn Moderation>, CommandError> {
        self.services
            .moderation
            .as_ref()
            .ok_or(CommandError::MissingService("moderation"))
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Fails with `CommandError::Cancelled` once the dispatch has been abandoned.
    ///
    /// Handlers call this before each outbound call.
    pub fn ensure_active(&self) -> Result<(), CommandError> {
        if self.is_cancelled() {
            return Err(CommandError::Cancelled);
        }
        Ok(())
    }

    /// Replies to the caller. Only the first reply is primary; later ones are follow-ups.
    pub fn reply(&self, content: impl Into<String>) {
        let content = content.into();
        let mut state = self.replies.lock().unwrap_or_else(PoisonError::into_inner);

        if state.primary.is_none() {
            self.acknowledgement
                .send_replace(Some(Outcome::Replied(content.clone())));
            state.primary = Some(Primary::Reply(content));
        } else {
            state.follow_ups.push(content);
        }
    }

    /// Acknowledges the request without content. No-op if already replied.
    ///
    /// Handlers that call external services defer first, which also lifts the
    /// dispatch deadline from the acknowledgement timeout to the deferred timeout.
    pub fn defer(&self) {
        let mut state = self.replies.lock().unwrap_or_else(PoisonError::into_inner);

        if state.primary.is_none() {
            self.acknowledgement.send_replace(Some(Outcome::Deferred));
            state.primary = Some(Primary::Deferred);
        }
    }

    /// Consumes the context and returns what the handler replied.
    pub fn into_replies(self) -> Replies {
        let state = self
            .replies
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);

        Replies {
            primary: state.primary,
            follow_ups: state.follow_ups,
        }
    }
}
