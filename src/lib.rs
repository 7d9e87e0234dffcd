//! # Buyflex
//!
//! An in-memory storefront: catalog browsing with faceted filtering and
//! debounced search, an incrementally revealed product grid, cart and
//! wishlist sessions, checkout with order tracking, a rule-based shopping
//! assistant, and an admin back-office — all served over a REST API.
//!
//! ## Features
//!
//! - **Catalog engine**: pure, order-preserving filter/search/sort over the
//!   product list (search dominates facets; all sorts are stable)
//! - **Reveal window**: infinite-scroll-style listing with a delayed,
//!   cancellable advance and reset-on-change semantics
//! - **Debounced search**: last-keystroke-wins commit after a quiet period
//! - **Sessions**: cart and wishlist per visitor, login attaches an account
//! - **Checkout**: sequential `BFX-NNN` order ids, flat shipping fee under
//!   the free-shipping threshold, delivery estimates
//! - **Admin back-office**: dashboard stats, product CRUD, order status,
//!   role management, review moderation driving the product rating
//! - **FlexBot**: deterministic store-facts + keyword-scoring assistant
//!   behind an async trait seam
//!
//! Everything lives in memory, seeded from demo fixtures; a restart resets
//! the world.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use buyflex::config::StoreConfig;
//! use buyflex::server::{AppState, serve};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let state = AppState::seeded(StoreConfig::default_config())?;
//!     serve(state).await
//! }
//! ```

pub mod admin;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod core;
pub mod model;
pub mod server;
pub mod shop;
pub mod store;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Catalog ===
    pub use crate::catalog::engine::{
        CategoryFilter, FilterState, SortKey, filter_products, sort_products,
    };
    pub use crate::catalog::view::{ShopView, ViewEvent, ViewParams, ViewSnapshot};
    pub use crate::catalog::window::RevealWindow;

    // === Model ===
    pub use crate::model::{
        Address, ContactMessage, Order, OrderItem, OrderStatus, Product, Review, ReviewStatus,
        User, UserRole,
    };

    // === Stores ===
    pub use crate::store::{CatalogStore, OrderStore, ReviewStore, SupportStore, UserStore};

    // === Shop ===
    pub use crate::shop::{Cart, Checkout, SessionStore, ShippingPolicy};

    // === Chat ===
    pub use crate::chat::{Assistant, AssistantReply, Recommendation, RuleBasedAssistant};

    // === Errors ===
    pub use crate::core::error::{StoreError, StoreResult};

    // === Config ===
    pub use crate::config::StoreConfig;

    // === Server ===
    pub use crate::server::{AppState, build_router, serve};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
