use super::*;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

/// Polls for cancellation between short sleeps, recording when it sees it.
struct Cooperative {
    observed_cancel: Arc<AtomicBool>,
}

#[async_trait]
impl CommandHandler for Cooperative {
    async fn execute(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        for _ in 0..3000 {
            if let Err(e) = ctx.ensure_active() {
                self.observed_cancel.store(true, Ordering::SeqCst);
                return Err(e);
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        ctx.reply("finished");
        Ok(())
    }
}

/// Ignores cancellation entirely.
struct Stubborn;

#[async_trait]
impl CommandHandler for Stubborn {
    async fn execute(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        ctx.reply("finished");
        Ok(())
    }
}

/// Defers, then works for `work` before replying.
struct DeferThenWork {
    work: Duration,
}

#[async_trait]
impl CommandHandler for DeferThenWork {
    async fn execute(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        ctx.defer();
        tokio::time::sleep(self.work).await;
        ctx.reply("done");
        Ok(())
    }
}

fn deferring_dispatcher(work: Duration, deferred_timeout: Duration) -> Dispatcher {
    dispatcher_with_config(
        vec![CommandDescriptor::new(
            "slow",
            "Defers and works",
            DeferThenWork { work },
        )],
        DispatchConfig {
            timeout: Duration::from_millis(50),
            deferred_timeout,
        },
    )
}

/// Tests a handler that runs past the timeout and observes cancellation.
///
/// Expected: Failed(Timeout) and the handler sees the cancellation signal
#[tokio::test]
async fn times_out_and_signals_cancellation() {
    let observed_cancel = Arc::new(AtomicBool::new(false));
    let dispatcher = dispatcher_with_timeout(
        vec![CommandDescriptor::new(
            "slow",
            "Takes forever",
            Cooperative {
                observed_cancel: Arc::clone(&observed_cancel),
            },
        )],
        Duration::from_millis(50),
    );

    let response = dispatcher.dispatch(request("slow")).await;
    assert_failed(&response, ErrorKind::Timeout);

    let deadline = Instant::now() + Duration::from_secs(2);
    while !observed_cancel.load(Ordering::SeqCst) && Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(observed_cancel.load(Ordering::SeqCst));
}

/// Tests a handler that ignores cancellation.
///
/// Expected: Failed(Timeout) returned promptly without waiting for the handler
#[tokio::test]
async fn abandons_handler_that_ignores_cancellation() {
    let dispatcher = dispatcher_with_timeout(
        vec![CommandDescriptor::new("slow", "Takes forever", Stubborn)],
        Duration::from_millis(50),
    );

    let started = Instant::now();
    let response = dispatcher.dispatch(request("slow")).await;

    assert_failed(&response, ErrorKind::Timeout);
    assert!(started.elapsed() < Duration::from_secs(5));
}

/// Tests that the default acknowledgement timeout leaves room inside Discord's
/// three second window for the first response.
///
/// Expected: default timeout under three seconds, deferred timeout above it
#[test]
fn default_timeout_fits_acknowledgement_window() {
    let config = DispatchConfig::default();

    assert!(config.timeout < Duration::from_secs(3));
    assert!(config.deferred_timeout > config.timeout);
}

/// Tests a handler that defers and then works past the acknowledgement timeout.
///
/// Expected: Deferred with the late reply as a follow-up, no timeout
#[tokio::test]
async fn deferral_extends_deadline() {
    let dispatcher = deferring_dispatcher(Duration::from_millis(200), Duration::from_secs(5));

    let response = dispatcher.dispatch(request("slow")).await;

    assert_eq!(response.outcome, Outcome::Deferred);
    assert_eq!(response.follow_ups, vec!["done".to_string()]);
}

/// Tests a deferred handler that also overruns the deferred timeout.
///
/// Expected: Failed(Timeout) delivered as a follow-up to the deferral
#[tokio::test]
async fn deferred_handler_still_times_out() {
    let dispatcher = deferring_dispatcher(Duration::from_secs(30), Duration::from_millis(200));
    let channel = Arc::new(RecordingChannel::default());

    let started = Instant::now();
    let response = dispatcher
        .handle(InboundRequest::new("slow", 7, channel.clone()))
        .await;

    assert_failed(&response, ErrorKind::Timeout);
    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(
        channel.deliveries(),
        vec![
            Delivery::Sent(Response::new(Outcome::Deferred)),
            Delivery::FollowUps(response),
        ]
    );
}
