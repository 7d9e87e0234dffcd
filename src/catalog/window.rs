//! The reveal window: the prefix of the ordered result currently rendered
//!
//! The window starts at a fixed initial size and grows by a fixed increment
//! each time the presentation layer's scroll sentinel becomes visible. An
//! artificial delay sits between trigger and growth (the owner schedules it
//! with [`crate::catalog::timer::Delay`]); while that delay is pending the
//! window is `Loading` and further triggers are no-ops. Any change to the
//! upstream result set resets the window unconditionally, including while
//! `Loading`.

/// Grow a window size by one increment, clamped to the total.
///
/// A no-op when the window already covers the result (`current >= total`);
/// reaching the end is a terminal condition, not an error.
pub fn advance_window(current: usize, total: usize, increment: usize) -> usize {
    if current >= total {
        current
    } else {
        (current + increment).min(total)
    }
}

/// Reveal-window state machine: `Idle(size)` / `Loading(size)`.
#[derive(Debug, Clone)]
pub struct RevealWindow {
    initial: usize,
    increment: usize,
    size: usize,
    loading: bool,
}

impl RevealWindow {
    pub fn new(initial: usize, increment: usize) -> Self {
        Self {
            initial,
            increment,
            size: initial,
            loading: false,
        }
    }

    /// React to the sentinel becoming visible.
    ///
    /// Returns `true` when the caller should schedule the delayed advance.
    /// Returns `false` (no-op) when an advance is already pending or the
    /// window has reached the end of the result.
    pub fn trigger(&mut self, total: usize) -> bool {
        if self.loading || self.size >= total {
            return false;
        }
        self.loading = true;
        true
    }

    /// Apply the pending advance after its delay elapsed.
    ///
    /// Stale completions (delivered after a reset cleared the `Loading`
    /// state) are ignored.
    pub fn complete(&mut self, total: usize) {
        if !self.loading {
            return;
        }
        self.size = advance_window(self.size, total, self.increment);
        self.loading = false;
    }

    /// Unconditional reset to the initial size, used whenever the upstream
    /// filtered/sorted result changes identity.
    pub fn reset(&mut self) {
        self.size = self.initial;
        self.loading = false;
    }

    /// Number of items to render: `min(size, total)`
    pub fn visible(&self, total: usize) -> usize {
        self.size.min(total)
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.size < total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn size(&self) -> usize {
        self.size
    }
}
