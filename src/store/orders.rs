//! Order store: placement, tracking, and fulfillment status
//!
//! Order ids are human-facing and sequential (`BFX-001`, `BFX-002`, ...);
//! the store assigns them under the write lock so concurrent checkouts
//! cannot collide.

use crate::core::error::{StoreError, StoreResult};
use crate::model::{Order, OrderStatus};
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

struct OrdersInner {
    orders: IndexMap<String, Order>,
    next_seq: u32,
}

#[derive(Clone)]
pub struct OrderStore {
    inner: Arc<RwLock<OrdersInner>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::with_orders(Vec::new())
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        let next_seq = orders
            .iter()
            .filter_map(|o| o.id.strip_prefix("BFX-")?.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let orders = orders.into_iter().map(|o| (o.id.clone(), o)).collect();
        Self {
            inner: Arc::new(RwLock::new(OrdersInner { orders, next_seq })),
        }
    }

    pub fn list(&self) -> StoreResult<Vec<Order>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        Ok(inner.orders.values().cloned().collect())
    }

    pub fn get(&self, id: &str) -> StoreResult<Order> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        inner
            .orders
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("order", id))
    }

    pub fn for_customer(&self, customer_id: u32) -> StoreResult<Vec<Order>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        Ok(inner
            .orders
            .values()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect())
    }

    /// Record a new order, assigning the next sequential id. The id on the
    /// incoming order is ignored.
    pub fn place(&self, mut order: Order) -> StoreResult<Order> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        order.id = format!("BFX-{:03}", inner.next_seq);
        inner.next_seq += 1;
        inner.orders.insert(order.id.clone(), order.clone());
        tracing::info!(order_id = %order.id, customer_id = order.customer_id, total = order.total, "order placed");
        Ok(order)
    }

    pub fn set_status(&self, id: &str, status: OrderStatus) -> StoreResult<Order> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        let order = inner
            .orders
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found("order", id))?;
        order.status = status;
        tracing::info!(order_id = %id, status = ?status, "order status changed");
        Ok(order.clone())
    }

    /// Total of every delivered order (admin revenue stat)
    pub fn delivered_revenue(&self) -> StoreResult<f64> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        Ok(inner
            .orders
            .values()
            .filter(|o| o.status == OrderStatus::Delivered)
            .map(|o| o.total)
            .sum())
    }

    pub fn count_with_status(&self, status: OrderStatus) -> StoreResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        Ok(inner
            .orders
            .values()
            .filter(|o| o.status == status)
            .count())
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}
