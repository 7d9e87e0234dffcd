//! Orders, order items, and carrier tracking data

use crate::model::product::Product;
use crate::model::user::Address;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// Static carrier data for tracking display. All of it is fixture; there is
/// no real shipping integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carrier {
    pub name: String,
    pub tracking_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Snapshot of the product at purchase time
    pub product: Product,
    pub quantity: u32,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Human-facing order id, e.g. "BFX-001"
    pub id: String,
    pub customer_id: u32,
    pub customer_name: String,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    /// Items subtotal plus any shipping fee
    pub total: f64,
    pub shipping_address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<Carrier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<NaiveDate>,
}

impl Order {
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}
