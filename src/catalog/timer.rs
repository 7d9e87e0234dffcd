//! Cancellable one-shot timers
//!
//! The shop view owns overlapping timers (search debounce, reveal delay)
//! that must be cancelled — not merely ignored — when superseded, so a
//! stale callback can never fire against discarded state. [`Delay`] wraps a
//! spawned sleep task; aborting the task guarantees the callback does not
//! run. Dropping the handle cancels it, which covers view teardown.

use std::time::Duration;
use tokio::task::JoinHandle;

/// A one-shot timer whose callback runs only if the delay elapses
/// uninterrupted.
#[derive(Debug)]
pub struct Delay {
    handle: JoinHandle<()>,
}

impl Delay {
    /// Schedule `on_elapsed` to run after `duration`.
    ///
    /// Must be called within a tokio runtime. The callback typically sends
    /// an event back to the owner's channel rather than mutating state
    /// directly; the owner applies it on its own single-threaded terms.
    pub fn schedule<F>(duration: Duration, on_elapsed: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        // Create the sleep eagerly so the deadline is measured from the
        // schedule call, not from the spawned task's first poll.
        let sleep = tokio::time::sleep(duration);
        let handle = tokio::spawn(async move {
            sleep.await;
            on_elapsed();
        });
        Self { handle }
    }

    /// Cancel the timer. After this returns the callback will not run
    /// (it either already ran, or never will).
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether the timer already fired or was cancelled
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Delay {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
