//! The periodic re-validation timer.
//!
//! A fixed-interval timer designed to sit inside the event loop's
//! `tokio::select!`:
//!
//! ```ignore
//! loop {
//!     tokio::select! {
//!         Some(event) = events.recv() => { /* dispatch */ }
//!         _ = timer.wait() => router.revalidate(),
//!     }
//! }
//! ```
//!
//! # Disabled mode
//!
//! With a zero interval the timer is disabled and
//! [`RevalidateTimer::wait`] pends forever — `select!` still serves the
//! other branches.

use std::time::Duration;

use tokio::time::{self, Instant as TokioInstant};
use tracing::debug;

/// Fixed-interval timer driving [`Router::revalidate`](crate::Router::revalidate).
pub struct RevalidateTimer {
    interval: Duration,
    /// When the next check fires. `None` when disabled.
    next: Option<TokioInstant>,
}

impl RevalidateTimer {
    /// Creates a timer firing every `interval`. A zero interval
    /// disables the timer.
    pub fn new(interval: Duration) -> Self {
        let next = if interval.is_zero() {
            debug!("re-validation timer disabled");
            None
        } else {
            debug!(interval_ms = interval.as_millis() as u64, "re-validation timer armed");
            Some(TokioInstant::now() + interval)
        };
        Self { interval, next }
    }

    /// A timer that never fires.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Whether the timer will ever fire.
    pub fn is_disabled(&self) -> bool {
        self.next.is_none()
    }

    /// Waits until the next check is due, then arms the following one.
    ///
    /// When disabled, this future never resolves.
    pub async fn wait(&mut self) {
        let Some(next) = self.next else {
            std::future::pending::<()>().await;
            unreachable!()
        };
        time::sleep_until(next).await;
        // Schedule from now, not from the missed deadline — a slow
        // event handler must not cause a burst of catch-up checks.
        self.next = Some(TokioInstant::now() + self.interval);
    }

    /// Re-arms the timer from now. Used when the loop is re-initialized
    /// so a stale deadline doesn't fire immediately.
    pub fn reset(&mut self) {
        if !self.interval.is_zero() {
            self.next = Some(TokioInstant::now() + self.interval);
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
