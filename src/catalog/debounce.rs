//! Search-input debouncing: last keystroke wins
//!
//! Every keystroke restarts a fixed-duration timer; only when the timer
//! elapses uninterrupted does the raw input become the committed query.
//! The previous timer is cancelled on supersession (not merely ignored),
//! so a stale commit can never fire after a newer one was scheduled.

use crate::catalog::timer::Delay;
use std::time::Duration;

#[derive(Debug)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<Delay>,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Register a keystroke. Cancels any pending commit and schedules
    /// `commit` to run after the debounce delay.
    pub fn input<F>(&mut self, commit: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }
        self.pending = Some(Delay::schedule(self.delay, commit));
    }

    /// Cancel any outstanding commit (teardown, or a filter change that
    /// supersedes the search box).
    pub fn cancel(&mut self) {
        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|delay| !delay.is_finished())
    }
}
