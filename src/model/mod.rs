//! Domain types for the storefront: products, reviews, users, orders,
//! contact messages, meeting requests, and warranty claims.
//!
//! All types serialize as camelCase JSON, matching the shapes the web
//! client renders. None of them carry behavior beyond small helpers; the
//! stores in [`crate::store`] own mutation and the catalog engine in
//! [`crate::catalog`] treats them as read-only inputs.

pub mod message;
pub mod order;
pub mod product;
pub mod review;
pub mod support;
pub mod user;

pub use message::{ContactMessage, MessageStatus};
pub use order::{Carrier, Order, OrderItem, OrderStatus};
pub use product::{NewProduct, Product, ProductSubmission};
pub use review::{Review, ReviewStatus};
pub use support::{
    ClaimStatus, MeetingRequest, MeetingStatus, NewMeetingRequest, NewWarrantyClaim, WarrantyClaim,
};
pub use user::{Address, User, UserRole};
