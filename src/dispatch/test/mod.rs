use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serenity::async_trait;

use crate::{
    dispatch::{
        context::{CommandContext, Services},
        handler::CommandHandler,
        DispatchConfig, Dispatcher,
    },
    error::{command::CommandError, AppError},
    gateway::ReplyChannel,
    model::{
        command::CommandDescriptor,
        outcome::{ErrorKind, Outcome, Response},
        request::InboundRequest,
    },
    registry::{Registry, RegistryHandle},
};

mod fault;
mod timeout;

/// One call the dispatcher made on a reply channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent(Response),
    FollowUps(Response),
}

/// Reply channel that records every delivery in order.
#[derive(Default)]
pub struct RecordingChannel {
    pub deliveries: Mutex<Vec<Delivery>>,
}

impl RecordingChannel {
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplyChannel for RecordingChannel {
    async fn send(&self, response: &Response) -> Result<(), AppError> {
        self.deliveries
            .lock()
            .unwrap()
            .push(Delivery::Sent(response.clone()));
        Ok(())
    }

    async fn send_follow_ups(&self, response: &Response) -> Result<(), AppError> {
        self.deliveries
            .lock()
            .unwrap()
            .push(Delivery::FollowUps(response.clone()));
        Ok(())
    }
}

/// Handler that replies with fixed content and counts invocations.
pub struct Counting {
    pub reply: &'static str,
    pub calls: Arc<AtomicUsize>,
}

impl Counting {
    pub fn new(reply: &'static str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                reply,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

#[async_trait]
impl CommandHandler for Counting {
    async fn execute(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ctx.reply(self.reply);
        Ok(())
    }
}

pub fn dispatcher(descriptors: Vec<CommandDescriptor>) -> Dispatcher {
    dispatcher_with_timeout(descriptors, Duration::from_secs(5))
}

pub fn dispatcher_with_timeout(
    descriptors: Vec<CommandDescriptor>,
    timeout: Duration,
) -> Dispatcher {
    dispatcher_with_config(
        descriptors,
        DispatchConfig {
            timeout,
            ..DispatchConfig::default()
        },
    )
}

pub fn dispatcher_with_config(
    descriptors: Vec<CommandDescriptor>,
    config: DispatchConfig,
) -> Dispatcher {
    let registry = Registry::build(descriptors).unwrap();
    Dispatcher::new(
        Arc::new(RegistryHandle::new(registry)),
        Services::new(),
        config,
    )
}

pub fn request(name: &str) -> InboundRequest {
    InboundRequest::new(name, 42, Arc::new(RecordingChannel::default()))
}

pub fn assert_failed(response: &Response, kind: ErrorKind) -> &str {
    match &response.outcome {
        Outcome::Failed(actual, message) => {
            assert_eq!(*actual, kind);
            message
        }
        other => panic!("expected Failed({:?}), got {:?}", kind, other),
    }
}
