use std::sync::{Arc, Mutex};
use std::time::Duration;

use sea_orm::DatabaseConnection;
use serenity::async_trait;

use crate::{
    command::BuiltinCommands,
    dispatch::{context::Services, DispatchConfig, Dispatcher},
    error::AppError,
    gateway::{Moderation, ReplyChannel},
    model::{
        command::Privilege,
        outcome::{ErrorKind, Outcome, Response},
        request::InboundRequest,
    },
    registry::{Registry, RegistryHandle},
};


const GUILD_ID: u64 = 100;
const CALLER_ID: u64 = 42;

/// A moderation action the fake recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Ban {
        guild_id: u64,
        user_id: u64,
        delete_message_days: u8,
        reason: Option<String>,
    },
    Kick {
        guild_id: u64,
        user_id: u64,
        reason: Option<String>,
    },
}

/// Moderation service that records actions instead of calling Discord.
#[derive(Default)]
pub struct RecordingModeration {
    pub actions: Mutex<Vec<Action>>,
}

#[async_trait]
impl Moderation for RecordingModeration {
    async fn ban(
        &self,
        guild_id: u64,
        user_id: u64,
        delete_message_days: u8,
        reason: Option<&str>,
    ) -> Result<(), AppError> {
        self.actions.lock().unwrap().push(Action::Ban {
            guild_id,
            user_id,
            delete_message_days,
            reason: reason.map(str::to_string),
        });
        Ok(())
    }

    async fn kick(
        &self,
        guild_id: u64,
        user_id: u64,
        reason: Option<&str>,
    ) -> Result<(), AppError> {
        self.actions.lock().unwrap().push(Action::Kick {
            guild_id,
            user_id,
            reason: reason.map(str::to_string),
        });
        Ok(())
    }
}

struct NullChannel;

#[async_trait]
impl ReplyChannel for NullChannel {
    async fn send(&self, _response: &Response) -> Result<(), AppError> {
        Ok(())
    }

    async fn send_follow_ups(&self, _response: &Response) -> Result<(), AppError> {
        Ok(())
    }
}

/// Dispatcher over the built-in commands with the given optional services wired in.
pub fn builtin_dispatcher(
    db: Option<&DatabaseConnection>,
    moderation: Option<Arc<RecordingModeration>>,
) -> Dispatcher {
    let registry = Registry::from_source(&BuiltinCommands).unwrap();
    let handle = Arc::new(RegistryHandle::new(registry));

    let mut services = Services::new().with_registry(Arc::clone(&handle));
    if let Some(db) = db {
        services = services.with_database(db.clone());
    }
    if let Some(moderation) = moderation {
        services = services.with_moderation(moderation);
    }

    Dispatcher::new(
        handle,
        services,
        DispatchConfig {
            timeout: Duration::from_secs(5),
            ..DispatchConfig::default()
        },
    )
}

/// Request from `CALLER_ID` in `GUILD_ID`.
pub fn guild_request(name: &str) -> InboundRequest {
    InboundRequest::new(name, CALLER_ID, Arc::new(NullChannel)).guild(GUILD_ID)
}

pub fn with_privilege(request: InboundRequest, privilege: &str) -> InboundRequest {
    request.privilege(Privilege::new(privilege))
}

/// Content the caller sees first: the primary reply, or the first follow-up after
/// a defer.
pub fn replied(response: &Response) -> &str {
    match &response.outcome {
        Outcome::Replied(content) => content,
        Outcome::Deferred => response
            .follow_ups
            .first()
            .map(String::as_str)
            .unwrap_or_else(|| panic!("deferred without a follow-up")),
        other => panic!("expected Replied or Deferred, got {:?}", other),
    }
}

pub fn failed(response: &Response, kind: ErrorKind) -> &str {
    match &response.outcome {
        Outcome::Failed(actual, message) => {
            assert_eq!(*actual, kind);
            message
        }
        other => panic!("expected Failed({:?}), got {:?}", kind, other),
    }
}
