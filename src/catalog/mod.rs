//! The catalog query engine and the shop view built on top of it
//!
//! This is the core of the storefront: given the full in-memory product
//! list, a [`FilterState`](engine::FilterState), a [`SortKey`](engine::SortKey)
//! and a free-text query, [`engine`] produces the ordered subset to display.
//! [`window`] grows a reveal window over that subset as the presentation
//! layer reports its scroll sentinel, and [`view::ShopView`] ties both to the
//! cancellable timers in [`timer`] and [`debounce`].

pub mod debounce;
pub mod engine;
pub mod timer;
pub mod view;
pub mod window;

pub use debounce::SearchDebouncer;
pub use engine::{CategoryFilter, FilterState, SortKey, filter_products, sort_products};
pub use timer::Delay;
pub use view::{ShopView, ViewEvent, ViewParams, ViewSnapshot};
pub use window::{RevealWindow, advance_window};
