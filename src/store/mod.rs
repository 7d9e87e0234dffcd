//! In-memory stores backing the storefront
//!
//! Each store wraps its collection in `Arc<RwLock<..>>` and hands out
//! clones; there is no persistence, and restarting the process restores
//! the seed fixtures.

pub mod catalog;
pub mod orders;
pub mod reviews;
pub mod seed;
pub mod support;
pub mod users;

pub use catalog::CatalogStore;
pub use orders::OrderStore;
pub use reviews::ReviewStore;
pub use support::SupportStore;
pub use users::UserStore;
