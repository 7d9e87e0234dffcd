//! Cart and wishlist state
//!
//! A cart holds product ids and quantities only; prices are resolved
//! against the catalog at read time so a price change is always reflected.
//! Adding an item already in the cart merges quantities, and setting a
//! quantity to zero removes the line.

use crate::core::error::{CartError, StoreError, StoreResult};
use crate::model::{OrderItem, Product};
use crate::store::CatalogStore;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct Cart {
    /// product id -> quantity, in the order lines were first added
    items: IndexMap<u32, u32>,
    wishlist: IndexSet<u32>,
}

/// A cart line joined with its current catalog product
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of a product, merging with an existing line.
    pub fn add(&mut self, product_id: u32, quantity: u32) {
        if quantity == 0 {
            return;
        }
        *self.items.entry(product_id).or_insert(0) += quantity;
    }

    /// Set a line's quantity outright; zero removes the line.
    pub fn set_quantity(&mut self, product_id: u32, quantity: u32) -> StoreResult<()> {
        if !self.items.contains_key(&product_id) {
            return Err(StoreError::Cart(CartError::NotInCart { product_id }));
        }
        if quantity == 0 {
            self.items.shift_remove(&product_id);
        } else {
            self.items.insert(product_id, quantity);
        }
        Ok(())
    }

    pub fn remove(&mut self, product_id: u32) -> StoreResult<()> {
        self.items
            .shift_remove(&product_id)
            .map(|_| ())
            .ok_or(StoreError::Cart(CartError::NotInCart { product_id }))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines (the cart badge)
    pub fn count(&self) -> u32 {
        self.items.values().sum()
    }

    pub fn quantities(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.items.iter().map(|(&id, &qty)| (id, qty))
    }

    /// Join the cart against the catalog. Lines whose product has been
    /// deleted from the catalog are silently dropped.
    pub fn lines(&self, catalog: &CatalogStore) -> StoreResult<Vec<CartLine>> {
        let mut lines = Vec::with_capacity(self.items.len());
        for (&product_id, &quantity) in &self.items {
            match catalog.get(product_id) {
                Ok(product) => lines.push(CartLine { product, quantity }),
                Err(StoreError::NotFound { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(lines)
    }

    pub fn subtotal(&self, catalog: &CatalogStore) -> StoreResult<f64> {
        Ok(self
            .lines(catalog)?
            .iter()
            .map(CartLine::line_total)
            .sum())
    }

    /// Snapshot the cart as order items for checkout.
    pub fn order_items(&self, catalog: &CatalogStore) -> StoreResult<Vec<OrderItem>> {
        Ok(self
            .lines(catalog)?
            .into_iter()
            .map(|line| OrderItem {
                product: line.product,
                quantity: line.quantity,
            })
            .collect())
    }

    /// Toggle wishlist membership; returns whether the product is on the
    /// wishlist afterwards.
    pub fn toggle_wishlist(&mut self, product_id: u32) -> bool {
        if self.wishlist.shift_remove(&product_id) {
            false
        } else {
            self.wishlist.insert(product_id);
            true
        }
    }

    pub fn in_wishlist(&self, product_id: u32) -> bool {
        self.wishlist.contains(&product_id)
    }

    pub fn wishlist(&self) -> Vec<u32> {
        self.wishlist.iter().copied().collect()
    }
}
