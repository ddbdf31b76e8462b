//! Polling loop
//!
//! Drives [`Dashboard::refresh`] on a fixed period in a background tokio
//! task. The loop awaits each cycle before taking the next tick, so at most
//! one refresh is ever in flight; a tick that fires mid-cycle is skipped
//! rather than queued.

use crate::dashboard::Dashboard;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

/// Handle owning a running polling loop
///
/// Whoever starts the loop owns the handle; dropping it also stops the loop
/// (the stop channel closes), so a torn-down view can never leak a poller.
pub struct PollerHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop the loop and wait for it to wind down
    ///
    /// An in-flight refresh is dropped at its next suspension point; no
    /// state mutation happens after this returns.
    pub async fn stop(self) {
        let _ = self.stop.send(true);
        let _ = self.task.await;
    }

    /// Whether the loop task has exited
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Start polling `dashboard` every `period`
///
/// The first tick fires immediately, so the dashboard has data as soon as
/// the service answers. Poll failures are logged and retried on the next
/// tick, never alerted: a background process must not nag.
#[must_use]
pub fn spawn(dashboard: Arc<Dashboard>, period: Duration) -> PollerHandle {
    let (stop_tx, mut stop_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tracing::info!(period_ms = period.as_millis() as u64, "polling loop started");

        loop {
            tokio::select! {
                _ = stop_rx.changed() => break,
                () = async {
                    ticker.tick().await;
                    if let Err(error) = dashboard.refresh().await {
                        tracing::warn!(%error, "poll refresh failed; retrying next tick");
                    }
                } => {}
            }
        }
        tracing::info!("polling loop stopped");
    });

    PollerHandle {
        stop: stop_tx,
        task,
    }
}

impl Dashboard {
    /// Start the polling loop at the configured interval
    #[must_use]
    pub fn start_polling(self: Arc<Self>) -> PollerHandle {
        let period = self.config().poll_interval();
        spawn(self, period)
    }
}
