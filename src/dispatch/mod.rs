//! Turns one inbound request into exactly one normalized response.
//!
//! # Algorithm
//!
//! 1. Resolve the command name against a registry snapshot (exact, case-sensitive)
//! 2. Validate raw arguments against the parameter schema, collecting every problem
//! 3. Check the command's required privilege against the caller's privileges
//! 4. Run the handler in its own task with a `CommandContext`, bounded by a timeout
//! 5. Normalize the handler result, error, panic or timeout into a `Response`
//!
//! Steps 1-3 short-circuit without invoking the handler. Nothing a handler does can
//! make `dispatch` return an error or panic: faults become `HandlerFault` with a
//! generic message and the detail is only logged.
//!
//! # Timeouts
//!
//! A handler has `DispatchConfig::timeout` to reply, defer or finish. That window sits
//! below Discord's three second limit for the first interaction response, so a
//! `Timeout` failure still reaches the caller. A handler that replied or deferred in
//! time may keep running until `DispatchConfig::deferred_timeout`; its late results
//! go out as follow-ups.
//!
//! # Concurrency
//!
//! A `Dispatcher` is shared behind an `Arc` and serves many requests at once. Each
//! dispatch captures its own `Arc<Registry>` snapshot up front, so a concurrent reload
//! never changes the command a running dispatch resolved. On timeout the handler's
//! cancellation token is fired and its task is detached; the dispatcher does not wait
//! for it.

pub mod arguments;
pub mod context;
pub mod handler;

#[cfg(test)]
mod test;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::{
    dispatch::{
        arguments::{ArgumentProblem, Arguments},
        context::{CommandContext, Services},
    },
    error::AppError,
    model::{
        outcome::{ErrorKind, Outcome, Response},
        request::InboundRequest,
    },
    registry::{RegisteredCommand, Registry, RegistryHandle},
};

/// Default time a handler has to reply or defer.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2500);

/// Default total running time for a handler that replied or deferred in time.
pub const DEFAULT_DEFERRED_TIMEOUT: Duration = Duration::from_secs(60);

/// Dispatcher tuning.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// How long a handler may run before it must have replied or deferred.
    pub timeout: Duration,
    /// Total time a handler that replied or deferred within `timeout` may run.
    pub deferred_timeout: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            deferred_timeout: DEFAULT_DEFERRED_TIMEOUT,
        }
    }
}

pub struct Dispatcher {
    registry: Arc<RegistryHandle>,
    services: Services,
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(registry: Arc<RegistryHandle>, services: Services, config: DispatchConfig) -> Self {
        Self {
            registry,
            services,
            config,
        }
    }

    pub fn registry(&self) -> &Arc<RegistryHandle> {
        &self.registry
    }

    /// Dispatches a request and delivers the response through its reply channel.
    ///
    /// The primary outcome is sent the moment the handler records it, so a deferring
    /// handler is acknowledged before it finishes. Whatever comes after (follow-ups,
    /// or a failure once acknowledged) is then sent with
    /// `ReplyChannel::send_follow_ups`. Delivery failures are logged and otherwise
    /// ignored.
    pub async fn handle(&self, request: InboundRequest) -> Response {
        let (acknowledgement, mut acknowledged) = watch::channel(None);

        let dispatch = self.run(&request, acknowledgement);
        tokio::pin!(dispatch);

        let progress = tokio::select! {
            biased;

            response = &mut dispatch => Progress::Finished(response),
            Ok(primary) = acknowledged.wait_for(Option::is_some) => {
                Progress::Acknowledged((*primary).clone())
            }
        };

        match progress {
            Progress::Finished(response) => {
                log_delivery(request.reply_channel.send(&response).await, &request);
                return response;
            }
            Progress::Acknowledged(Some(outcome)) => {
                log_delivery(
                    request.reply_channel.send(&Response::new(outcome)).await,
                    &request,
                );
            }
            Progress::Acknowledged(None) => {}
        }

        let response = dispatch.await;
        log_delivery(
            request.reply_channel.send_follow_ups(&response).await,
            &request,
        );

        response
    }

    /// Resolves, validates, authorizes and runs one request.
    ///
    /// Always returns exactly one response; never propagates handler faults.
    pub async fn dispatch(&self, request: InboundRequest) -> Response {
        let (acknowledgement, _) = watch::channel(None);
        self.run(&request, acknowledgement).await
    }

    async fn run(
        &self,
        request: &InboundRequest,
        acknowledgement: watch::Sender<Option<Outcome>>,
    ) -> Response {
        let registry = self.registry.snapshot();

        let Some(command) = registry.lookup(&request.command_name) else {
            tracing::debug!(
                "Unknown command /{} from user {}",
                request.command_name,
                request.caller_id
            );
            return Response::failed(
                ErrorKind::UnknownCommand,
                format!("Unknown command `/{}`.", request.command_name),
            );
        };

        let arguments = match Arguments::validate(command.parameters(), &request.raw_arguments) {
            Ok(arguments) => arguments,
            Err(problems) => {
                tracing::debug!(
                    "Rejected /{} arguments: {:?}",
                    command.name(),
                    problems
                        .iter()
                        .map(ArgumentProblem::parameter)
                        .collect::<Vec<_>>()
                );
                let details = problems
                    .iter()
                    .map(|problem| problem.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                return Response::failed(
                    ErrorKind::InvalidArguments,
                    format!("Invalid arguments for `/{}`: {}.", command.name(), details),
                );
            }
        };

        if let Some(privilege) = command.required_privilege() {
            if !request.caller_privileges.contains(privilege) {
                tracing::info!(
                    "User {} denied /{}: missing privilege {}",
                    request.caller_id,
                    command.name(),
                    privilege
                );
                return Response::failed(
                    ErrorKind::PermissionDenied,
                    format!(
                        "You need the `{}` permission to use `/{}`.",
                        privilege,
                        command.name()
                    ),
                );
            }
        }

        self.invoke(
            command,
            arguments,
            request,
            Arc::clone(&registry),
            acknowledgement,
        )
        .await
    }

    /// Runs the handler in its own task under the dispatch timeouts.
    async fn invoke(
        &self,
        command: &RegisteredCommand,
        arguments: Arguments,
        request: &InboundRequest,
        registry: Arc<Registry>,
        acknowledgement: watch::Sender<Option<Outcome>>,
    ) -> Response {
        let name = command.name().to_string();
        let cancellation = CancellationToken::new();
        let acknowledged = acknowledgement.subscribe();
        let ctx = CommandContext::new(
            name.clone(),
            request.caller_id,
            request.guild_id,
            arguments,
            registry,
            self.services.clone(),
            cancellation.clone(),
        )
        .with_acknowledgement(acknowledgement);

        let handler = Arc::clone(command.handler());
        let mut task = tokio::spawn(async move {
            let result = handler.execute(&ctx).await;
            (result, ctx.into_replies())
        });

        tracing::debug!("Dispatching /{} for user {}", name, request.caller_id);

        let finished = match tokio::time::timeout(self.config.timeout, &mut task).await {
            Err(_) if is_acknowledged(&acknowledged) => {
                let remaining = self
                    .config
                    .deferred_timeout
                    .saturating_sub(self.config.timeout);
                tokio::time::timeout(remaining, &mut task).await
            }
            finished => finished,
        };

        match finished {
            Err(_) => {
                cancellation.cancel();
                tracing::warn!("/{} ran out of time and was abandoned", name);
                Response::failed(
                    ErrorKind::Timeout,
                    format!("`/{}` took too long to respond. Please try again.", name),
                )
            }
            Ok(Err(join_error)) => {
                tracing::error!("/{} handler panicked: {}", name, join_error);
                handler_fault(&name)
            }
            Ok(Ok((Err(e), _))) => {
                tracing::error!("/{} handler failed: {:?}", name, e);
                handler_fault(&name)
            }
            Ok(Ok((Ok(()), replies))) => match replies.into_response() {
                Some(response) => response,
                None => {
                    tracing::warn!("/{} handler finished without replying", name);
                    handler_fault(&name)
                }
            },
        }
    }
}

/// Where `handle` stands when it first has something to deliver.
enum Progress {
    Finished(Response),
    Acknowledged(Option<Outcome>),
}

fn is_acknowledged(acknowledged: &watch::Receiver<Option<Outcome>>) -> bool {
    acknowledged.borrow().is_some()
}

fn log_delivery(result: Result<(), AppError>, request: &InboundRequest) {
    if let Err(e) = result {
        tracing::error!(
            "Failed to deliver response for /{}: {:?}",
            request.command_name,
            e
        );
    }
}

/// Caller-facing message for any handler fault. Never includes error detail.
fn handler_fault(name: &str) -> Response {
    Response::failed(
        ErrorKind::HandlerFault,
        format!("Something went wrong while running `/{}`.", name),
    )
}
