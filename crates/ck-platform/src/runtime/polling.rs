//! Polling clipboard runtime.
//!
//! Owns the timer that drives a [`ClipboardPollHandler`]: one check right
//! after start, then one per interval. Each check runs on the blocking pool
//! and is awaited before the next tick is taken, so checks never overlap.
//! Ticks missed while a check is slow are delayed, not bunched up.
//!
//! Platform-specific event-driven runtimes can replace this without changing
//! upper layers.

use async_trait::async_trait;
use ck_core::ports::{ClipboardPollHandler, WatcherControlError, WatcherControlPort};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::{spawn_blocking, JoinHandle};
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

struct PollTask {
    handle: JoinHandle<()>,
    cancel: CancellationToken,
}

pub struct PollingClipboardRuntime {
    handler: Arc<dyn ClipboardPollHandler>,
    period: Duration,
    running: AtomicBool,
    task: Mutex<Option<PollTask>>,
}

impl PollingClipboardRuntime {
    /// A zero `period` falls back to [`DEFAULT_POLL_INTERVAL`].
    pub fn new(handler: Arc<dyn ClipboardPollHandler>, period: Duration) -> Self {
        let period = if period.is_zero() {
            warn!(
                default_ms = DEFAULT_POLL_INTERVAL.as_millis() as u64,
                "poll interval of 0 ms requested, using default"
            );
            DEFAULT_POLL_INTERVAL
        } else {
            period
        };

        Self {
            handler,
            period,
            running: AtomicBool::new(false),
            task: Mutex::new(None),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

// Cancellation is only observed between checks: a check already running on
// the blocking pool is awaited to completion before the loop exits.
async fn poll_loop(
    handler: Arc<dyn ClipboardPollHandler>,
    period: Duration,
    cancel: CancellationToken,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let handler = handler.clone();
        match spawn_blocking(move || handler.on_tick()).await {
            Ok(change) if change.is_new_entry() => {
                debug!(?change, "clipboard check recorded entry")
            }
            Ok(_) => {}
            Err(err) => warn!(error = %err, "clipboard check task failed"),
        }
    }

    debug!("clipboard poll loop exited");
}

#[async_trait]
impl WatcherControlPort for PollingClipboardRuntime {
    async fn start_watcher(&self) -> Result<(), WatcherControlError> {
        let mut task = self.task.lock().await;
        if task.is_some() {
            return Ok(()); // 幂等
        }

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(poll_loop(self.handler.clone(), self.period, cancel.clone()));
        *task = Some(PollTask { handle, cancel });
        self.running.store(true, Ordering::Release);

        info!(interval_ms = self.period.as_millis() as u64, "clipboard polling started");
        Ok(())
    }

    async fn stop_watcher(&self) -> Result<(), WatcherControlError> {
        let mut task = self.task.lock().await;
        let Some(PollTask { handle, cancel }) = task.take() else {
            return Ok(());
        };

        // waits for an in-flight check, so nothing is recorded after this returns
        cancel.cancel();
        let joined = handle.await;
        self.running.store(false, Ordering::Release);
        if let Err(err) = joined {
            return Err(WatcherControlError::StopFailed(err.to_string()));
        }

        info!("clipboard polling stopped");
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}
