//! The shop view controller: one owner for all presentation-side state
//!
//! `ShopView` gathers everything the shop page needs into a single struct
//! owned by one controller: current facet filters,
//! sort key, raw and committed search text, the reveal window, and the
//! outstanding timers. It is event-driven and single-threaded: timers
//! deliver [`ViewEvent`]s over an mpsc channel, and the owner drains them
//! with [`ShopView::pump`] on its own terms. No shared mutable state is
//! touched by the timer tasks themselves.

use crate::catalog::debounce::SearchDebouncer;
use crate::catalog::engine::{FilterState, SortKey, filter_products, sort_products};
use crate::catalog::timer::Delay;
use crate::catalog::window::RevealWindow;
use crate::core::error::StoreResult;
use crate::model::Product;
use std::time::Duration;
use tokio::sync::mpsc;

/// Timing and sizing knobs for a shop view
#[derive(Debug, Clone)]
pub struct ViewParams {
    /// Items rendered before any reveal trigger
    pub initial_window: usize,
    /// Items added per reveal
    pub window_increment: usize,
    /// Artificial delay between sentinel trigger and window growth
    pub reveal_delay: Duration,
    /// Quiet period before a keystroke becomes the committed query
    pub debounce_delay: Duration,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            initial_window: 9,
            window_increment: 6,
            reveal_delay: Duration::from_millis(500),
            debounce_delay: Duration::from_millis(300),
        }
    }
}

/// Events delivered back to the view by its timers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// The debounce timer elapsed uninterrupted for this input
    CommitSearch(String),
    /// The reveal delay elapsed; apply the pending window advance
    RevealElapsed,
}

/// What the presentation layer renders
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    /// The visible prefix of the ordered result
    pub products: Vec<Product>,
    /// Length of the full ordered result
    pub total: usize,
    pub is_loading: bool,
    pub has_more: bool,
    pub committed_query: String,
}

pub struct ShopView {
    params: ViewParams,
    catalog: Vec<Product>,
    filters: FilterState,
    sort: SortKey,
    raw_query: String,
    committed_query: String,
    /// Filtered + sorted result the window reveals over
    results: Vec<Product>,
    window: RevealWindow,
    debouncer: SearchDebouncer,
    pending_reveal: Option<Delay>,
    tx: mpsc::UnboundedSender<ViewEvent>,
    rx: mpsc::UnboundedReceiver<ViewEvent>,
}

impl ShopView {
    /// Build a view over a catalog snapshot. Must be called within a tokio
    /// runtime (timers spawn tasks).
    pub fn new(catalog: Vec<Product>, params: ViewParams) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let results = catalog.clone();
        let window = RevealWindow::new(params.initial_window, params.window_increment);
        let debouncer = SearchDebouncer::new(params.debounce_delay);
        Self {
            params,
            catalog,
            filters: FilterState::default(),
            sort: SortKey::default(),
            raw_query: String::new(),
            committed_query: String::new(),
            results,
            window,
            debouncer,
            pending_reveal: None,
            tx,
            rx,
        }
    }

    /// Replace the catalog snapshot (admin edited products, etc.)
    pub fn set_catalog(&mut self, catalog: Vec<Product>) {
        self.catalog = catalog;
        self.refresh_results();
    }

    /// Apply a new facet filter state. Validates bounds before any state
    /// changes; on success the result set changes identity, so the window
    /// resets and outstanding timers are cancelled.
    pub fn set_filters(&mut self, filters: FilterState) -> StoreResult<()> {
        filters.validate()?;
        self.filters = filters;
        self.debouncer.cancel();
        self.refresh_results();
        Ok(())
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.refresh_results();
    }

    /// Register a search keystroke. The query is not applied until the
    /// debounce timer elapses uninterrupted; each keystroke cancels the
    /// previous timer (last-keystroke-wins).
    pub fn search_input(&mut self, raw: &str) {
        self.raw_query = raw.to_string();
        let tx = self.tx.clone();
        let text = raw.to_string();
        self.debouncer.input(move || {
            // Send fails only if the view was dropped; nothing to do then.
            let _ = tx.send(ViewEvent::CommitSearch(text));
        });
    }

    /// The presentation layer reports that the reveal sentinel became
    /// visible. Schedules the delayed advance unless one is already
    /// pending or the window covers the whole result.
    pub fn sentinel_visible(&mut self) {
        if !self.window.trigger(self.results.len()) {
            return;
        }
        let tx = self.tx.clone();
        self.pending_reveal = Some(Delay::schedule(self.params.reveal_delay, move || {
            let _ = tx.send(ViewEvent::RevealElapsed);
        }));
    }

    /// Drain and apply all events the timers have delivered so far.
    pub fn pump(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.handle(event);
        }
    }

    fn handle(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::CommitSearch(query) => {
                if query == self.committed_query {
                    return;
                }
                tracing::debug!(query = %query, "search query committed");
                self.committed_query = query;
                self.refresh_results();
            }
            ViewEvent::RevealElapsed => {
                self.window.complete(self.results.len());
                self.pending_reveal = None;
            }
        }
    }

    /// Recompute the ordered result and reset the reveal subsystem; called
    /// whenever the result set changes identity. Cancels a pending reveal
    /// so its stale completion cannot grow the fresh window.
    fn refresh_results(&mut self) {
        self.results = sort_products(
            filter_products(&self.catalog, &self.filters, &self.committed_query),
            self.sort,
        );
        self.window.reset();
        if let Some(pending) = self.pending_reveal.take() {
            pending.cancel();
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let total = self.results.len();
        let visible = self.window.visible(total);
        ViewSnapshot {
            products: self.results[..visible].to_vec(),
            total,
            is_loading: self.window.is_loading(),
            has_more: self.window.has_more(total),
            committed_query: self.committed_query.clone(),
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }
}

impl Drop for ShopView {
    fn drop(&mut self) {
        // Timer tasks abort with their handles; nothing can fire against
        // a torn-down view.
        self.debouncer.cancel();
        if let Some(pending) = self.pending_reveal.take() {
            pending.cancel();
        }
    }
}
