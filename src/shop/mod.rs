//! Shopping flows: cart, sessions, checkout

pub mod cart;
pub mod checkout;
pub mod session;

pub use cart::{Cart, CartLine};
pub use checkout::{Checkout, CheckoutQuote, ShippingPolicy};
pub use session::{Session, SessionStore};
