//! Starting and stopping the repeating clock schedule.
//!
//! [`initialize`] is the single entry point: it runs one tick right away and
//! then spawns a task ticking on a fixed period. The returned
//! [`ScheduleHandle`] owns that task; the embedding application keeps it for
//! as long as the clock should run and calls [`ScheduleHandle::shutdown`]
//! when it stops.

use std::time::Duration;

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::updater::ClockUpdater;

/// Tick outcomes counted since [`initialize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Ticks that wrote the surface.
    pub completed: u64,
    /// Ticks whose write failed.
    pub failed: u64,
}

impl TickStats {
    /// All ticks run so far.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.completed + self.failed
    }
}

/// Owner of a running schedule.
///
/// Dropping the handle stops the schedule before its next tick.
#[must_use = "dropping the handle stops the schedule"]
pub struct ScheduleHandle {
    stop: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
    stats: watch::Receiver<TickStats>,
}

impl ScheduleHandle {
    /// Counts as of the latest finished tick.
    #[must_use]
    pub fn stats(&self) -> TickStats {
        *self.stats.borrow()
    }

    /// Waits until at least `ticks` ticks have run, counting failures.
    ///
    /// Returns early with the last counts if the schedule has stopped.
    pub async fn wait_for_ticks(&mut self, ticks: u64) -> TickStats {
        let reached = self.stats.wait_for(|stats| stats.total() >= ticks).await.map(|stats| *stats);
        reached.unwrap_or_else(|_| *self.stats.borrow())
    }

    /// Stops the schedule and waits for its task to exit.
    ///
    /// A tick in progress always finishes first.
    pub async fn shutdown(mut self) -> TickStats {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Err(err) = (&mut self.task).await {
            tracing::error!(error = %err, "clock task ended abnormally");
        }
        let stats = *self.stats.borrow();
        tracing::info!(completed = stats.completed, failed = stats.failed, "clock schedule stopped");
        stats
    }
}

/// Ticks once now, then every `period` until the handle is shut down or dropped.
///
/// Ticks run one at a time on a single task. A late tick pushes the later
/// ones back instead of firing a burst, so ticks stay at least `period`
/// apart. Calling this twice starts two independent schedules.
///
/// # Panics
///
/// Panics if `period` is zero or if called outside a tokio runtime.
pub fn initialize(updater: ClockUpdater, period: Duration) -> ScheduleHandle {
    assert!(!period.is_zero(), "clock period must be non-zero");

    let (stats_tx, stats_rx) = watch::channel(TickStats::default());
    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

    tracing::info!(
        element_id = updater.element_id(),
        period_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX),
        "clock schedule started"
    );
    run_tick(&updater, &stats_tx);

    let task = tokio::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                biased;
                _ = &mut stop_rx => break,
                _ = interval.tick() => run_tick(&updater, &stats_tx),
            }
        }
    });

    ScheduleHandle { stop: Some(stop_tx), task, stats: stats_rx }
}

fn run_tick(updater: &ClockUpdater, stats: &watch::Sender<TickStats>) {
    match updater.tick() {
        Ok(label) => {
            tracing::debug!(element_id = updater.element_id(), %label, "tick");
            stats.send_modify(|s| s.completed += 1);
        }
        Err(err) => {
            tracing::warn!(
                element_id = updater.element_id(),
                error = &err as &dyn std::error::Error,
                "tick failed"
            );
            stats.send_modify(|s| s.failed += 1);
        }
    }
}
