//! Core module containing error and pagination types shared across the crate

pub mod error;
pub mod query;

pub use error::{ArgumentError, AuthError, CartError, ErrorResponse, StoreError, StoreResult};
pub use query::{PaginatedResponse, PaginationMeta, QueryParams};
