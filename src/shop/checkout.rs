//! Checkout: turn a session's cart into a placed order
//!
//! Checkout requires a logged-in user and a non-empty cart, validates the
//! shipping address, applies the flat shipping fee under the free-shipping
//! threshold, stamps a delivery estimate, and clears the cart only after
//! the order is recorded.

use crate::core::error::{CartError, StoreError, StoreResult};
use crate::model::{Address, Order, OrderStatus};
use crate::shop::session::SessionStore;
use crate::store::{CatalogStore, OrderStore, UserStore};
use chrono::{Duration, Utc};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

/// Shipping rules applied at checkout
#[derive(Debug, Clone)]
pub struct ShippingPolicy {
    /// Subtotal at or above which shipping is free
    pub free_threshold: f64,
    /// Flat fee charged below the threshold
    pub flat_fee: f64,
    /// Days from placement to the delivery estimate
    pub eta_days: i64,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_threshold: 50.0,
            flat_fee: 5.0,
            eta_days: 5,
        }
    }
}

impl ShippingPolicy {
    pub fn fee_for(&self, subtotal: f64) -> f64 {
        if subtotal >= self.free_threshold {
            0.0
        } else {
            self.flat_fee
        }
    }
}

/// Price breakdown shown on the checkout page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutQuote {
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
}

#[derive(Clone)]
pub struct Checkout {
    catalog: CatalogStore,
    orders: OrderStore,
    users: UserStore,
    sessions: SessionStore,
    policy: ShippingPolicy,
}

impl Checkout {
    pub fn new(
        catalog: CatalogStore,
        orders: OrderStore,
        users: UserStore,
        sessions: SessionStore,
        policy: ShippingPolicy,
    ) -> Self {
        Self {
            catalog,
            orders,
            users,
            sessions,
            policy,
        }
    }

    /// Price the session's cart without placing anything.
    pub fn quote(&self, session_id: Uuid) -> StoreResult<CheckoutQuote> {
        let session = self.sessions.get(session_id)?;
        let subtotal = session.cart.subtotal(&self.catalog)?;
        let shipping = self.policy.fee_for(subtotal);
        Ok(CheckoutQuote {
            subtotal,
            shipping,
            total: subtotal + shipping,
        })
    }

    /// Place an order for the session's cart.
    ///
    /// On success the order is `Processing` with a delivery estimate,
    /// stock is deducted, and the cart is cleared. `save_address` also
    /// stores the address on the account for next time.
    pub fn place_order(
        &self,
        session_id: Uuid,
        address: Address,
        save_address: bool,
    ) -> StoreResult<Order> {
        let user_id = self.sessions.require_user(session_id)?;
        let user = self.users.get(user_id)?;
        address.validate().map_err(StoreError::from_validation)?;

        let session = self.sessions.get(session_id)?;
        let items = session.cart.order_items(&self.catalog)?;
        if items.is_empty() {
            return Err(StoreError::Cart(CartError::EmptyCart));
        }

        let subtotal: f64 = items.iter().map(|i| i.line_total()).sum();
        let shipping = self.policy.fee_for(subtotal);
        let today = Utc::now().date_naive();

        let order = self.orders.place(Order {
            id: String::new(),
            customer_id: user.id,
            customer_name: user.name.clone(),
            date: today,
            status: OrderStatus::Processing,
            items,
            total: subtotal + shipping,
            shipping_address: address.clone(),
            carrier: None,
            tracking_number: None,
            estimated_delivery: Some(today + Duration::days(self.policy.eta_days)),
        })?;

        for item in &order.items {
            self.catalog.deduct_stock(item.product.id, item.quantity)?;
        }
        self.sessions.update(session_id, |session| {
            session.cart.clear();
            Ok(())
        })?;
        if save_address {
            self.users.set_address(user.id, address)?;
        }
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AuthError;
    use crate::store::seed::{demo_products, demo_users};

    fn address() -> Address {
        Address {
            full_name: "Alice Johnson".to_string(),
            street: "123 Maple St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip: "62704".to_string(),
            country: "USA".to_string(),
            phone: "555-0101".to_string(),
        }
    }

    fn checkout() -> (Checkout, SessionStore) {
        let sessions = SessionStore::new();
        let service = Checkout::new(
            CatalogStore::with_products(demo_products()),
            OrderStore::new(),
            UserStore::with_users(demo_users()),
            sessions.clone(),
            ShippingPolicy::default(),
        );
        (service, sessions)
    }

    #[test]
    fn checkout_requires_a_login() {
        let (service, sessions) = checkout();
        let sid = sessions.create().unwrap();
        sessions
            .update(sid, |s| {
                s.cart.add(1, 1);
                Ok(())
            })
            .unwrap();
        assert!(matches!(
            service.place_order(sid, address(), false),
            Err(StoreError::Auth(AuthError::NotLoggedIn))
        ));
    }

    #[test]
    fn checkout_rejects_an_empty_cart() {
        let (service, sessions) = checkout();
        let sid = sessions.create().unwrap();
        sessions.attach_user(sid, 101).unwrap();
        assert!(matches!(
            service.place_order(sid, address(), false),
            Err(StoreError::Cart(CartError::EmptyCart))
        ));
    }

    #[test]
    fn small_orders_pay_the_flat_fee() {
        let (service, sessions) = checkout();
        let sid = sessions.create().unwrap();
        sessions.attach_user(sid, 101).unwrap();
        sessions
            .update(sid, |s| {
                s.cart.add(7, 2); // 30.00 subtotal
                Ok(())
            })
            .unwrap();
        let quote = service.quote(sid).unwrap();
        assert!((quote.shipping - 5.0).abs() < f64::EPSILON);
        let order = service.place_order(sid, address(), false).unwrap();
        assert!((order.total - 35.0).abs() < 1e-9);
    }

    #[test]
    fn the_threshold_itself_ships_free() {
        let policy = ShippingPolicy::default();
        assert_eq!(policy.fee_for(50.0), 0.0);
        assert_eq!(policy.fee_for(49.99), 5.0);
    }

    #[test]
    fn placing_an_order_clears_the_cart_and_deducts_stock() {
        let (service, sessions) = checkout();
        let sid = sessions.create().unwrap();
        sessions.attach_user(sid, 101).unwrap();
        sessions
            .update(sid, |s| {
                s.cart.add(1, 2);
                Ok(())
            })
            .unwrap();
        let order = service.place_order(sid, address(), false).unwrap();
        assert_eq!(order.id, "BFX-001");
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(
            order.estimated_delivery,
            Some(order.date + Duration::days(5))
        );
        assert!(sessions.get(sid).unwrap().cart.is_empty());
        assert_eq!(service.catalog.get(1).unwrap().stock, 148);
    }

    #[test]
    fn save_address_stores_it_on_the_account() {
        let (service, sessions) = checkout();
        let sid = sessions.create().unwrap();
        sessions.attach_user(sid, 103).unwrap();
        sessions
            .update(sid, |s| {
                s.cart.add(3, 1);
                Ok(())
            })
            .unwrap();
        service.place_order(sid, address(), true).unwrap();
        let charlie = service.users.get(103).unwrap();
        assert_eq!(charlie.address.unwrap().street, "123 Maple St");
    }
}
