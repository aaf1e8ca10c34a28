//! Cancellable periodic tick driver.
//!
//! [`TickScheduler::spawn`] runs a tokio task that sleeps for the tick
//! interval, then dispatches one tick into the shared session, until the
//! tick limit is reached or the handle is cancelled. Once cancelled, no
//! further tick is dispatched.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{Mutex, Notify};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use underworld_crew::RollSource;

use crate::error::SessionError;
use crate::session::{GameSession, GameVariant};

/// Why the scheduler stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SchedulerEndReason {
    /// Dispatched the configured `max_ticks`.
    MaxTicksReached,
    /// The handle was cancelled.
    Cancelled,
}

/// State shared between the handle and the tick task.
#[derive(Debug, Default)]
struct SchedulerControl {
    cancelled: AtomicBool,
    cancel_notify: Notify,
    ticks: AtomicU64,
}

impl SchedulerControl {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.cancel_notify.notify_one();
    }
}

/// Cancels a scheduler without owning its handle.
#[derive(Debug, Clone)]
pub struct SchedulerCanceller {
    control: Arc<SchedulerControl>,
}

impl SchedulerCanceller {
    /// Stop the scheduler. Takes effect before the next tick.
    pub fn cancel(&self) {
        self.control.cancel();
    }
}

/// Handle to a running scheduler task.
#[derive(Debug)]
pub struct SchedulerHandle {
    control: Arc<SchedulerControl>,
    task: JoinHandle<SchedulerEndReason>,
}

impl SchedulerHandle {
    /// Stop the scheduler. Takes effect before the next tick.
    pub fn cancel(&self) {
        self.control.cancel();
    }

    /// A detached canceller, usable after [`join`](Self::join) consumes the
    /// handle.
    pub fn canceller(&self) -> SchedulerCanceller {
        SchedulerCanceller {
            control: Arc::clone(&self.control),
        }
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.control.is_cancelled()
    }

    /// Ticks dispatched so far.
    pub fn ticks(&self) -> u64 {
        self.control.ticks.load(Ordering::Acquire)
    }

    /// Wait for the task to stop.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Scheduler`] if the task panicked.
    pub async fn join(self) -> Result<SchedulerEndReason, SessionError> {
        Ok(self.task.await?)
    }
}

/// Periodic driver for a shared [`GameSession`].
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler;

impl TickScheduler {
    /// Spawn the tick task.
    ///
    /// `max_ticks` of 0 means unlimited. Must be called inside a tokio
    /// runtime.
    pub fn spawn<V, R>(
        session: Arc<Mutex<GameSession<V, R>>>,
        interval: Duration,
        max_ticks: u64,
    ) -> SchedulerHandle
    where
        V: GameVariant + Send + 'static,
        R: RollSource + Send + 'static,
    {
        let control = Arc::new(SchedulerControl::default());
        let task = tokio::spawn(run(session, Arc::clone(&control), interval, max_ticks));
        SchedulerHandle { control, task }
    }
}

async fn run<V, R>(
    session: Arc<Mutex<GameSession<V, R>>>,
    control: Arc<SchedulerControl>,
    interval: Duration,
    max_ticks: u64,
) -> SchedulerEndReason
where
    V: GameVariant,
    R: RollSource,
{
    info!(
        variant = V::NAME,
        interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX),
        max_ticks,
        "Tick scheduler starting"
    );

    let reason = loop {
        if control.is_cancelled() {
            break SchedulerEndReason::Cancelled;
        }

        tokio::select! {
            biased;
            () = control.cancel_notify.notified() => {}
            () = tokio::time::sleep(interval) => {}
        }

        // Re-check after waking: a cancel during the sleep suppresses the tick.
        if control.is_cancelled() {
            break SchedulerEndReason::Cancelled;
        }

        let mut guard = session.lock().await;
        // A cancel issued while the lock was held also suppresses the tick.
        if control.is_cancelled() {
            break SchedulerEndReason::Cancelled;
        }
        let result = guard.advance_tick();
        drop(guard);
        let dispatched = control.ticks.fetch_add(1, Ordering::AcqRel).saturating_add(1);
        debug!(tick = dispatched, applied = result.is_ok(), "Tick dispatched");

        if max_ticks > 0 && dispatched >= max_ticks {
            break SchedulerEndReason::MaxTicksReached;
        }
    };

    info!(
        reason = ?reason,
        ticks = control.ticks.load(Ordering::Acquire),
        "Tick scheduler stopped"
    );
    reason
}
