//! Product catalog store
//!
//! Products live in an insertion-ordered map so listings are stable without
//! a separate sort pass. All mutation goes through this store; the catalog
//! engine only ever sees cloned snapshots.

use crate::catalog::engine::ALL_CATEGORIES;
use crate::core::error::{StoreError, StoreResult};
use crate::model::{NewProduct, Product};
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use validator::Validate;

struct CatalogInner {
    products: IndexMap<u32, Product>,
    next_id: u32,
}

#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<RwLock<CatalogInner>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let products = products.into_iter().map(|p| (p.id, p)).collect();
        Self {
            inner: Arc::new(RwLock::new(CatalogInner { products, next_id })),
        }
    }

    /// All products in insertion order
    pub fn list(&self) -> StoreResult<Vec<Product>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        Ok(inner.products.values().cloned().collect())
    }

    pub fn get(&self, id: u32) -> StoreResult<Product> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        inner
            .products
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("product", id))
    }

    /// Distinct category labels in first-seen order, with the "All"
    /// sentinel prepended.
    pub fn categories(&self) -> StoreResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for product in inner.products.values() {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        Ok(categories)
    }

    /// Create a product from an admin submission. The store assigns the id;
    /// the rating starts at 0 because no approved reviews exist yet.
    pub fn create(&self, draft: NewProduct) -> StoreResult<Product> {
        draft
            .validate()
            .map_err(StoreError::from_validation)?;
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        let id = inner.next_id;
        inner.next_id += 1;
        let product = Product {
            id,
            name: draft.name,
            category: draft.category,
            price: draft.price,
            image_url: draft.image_url,
            description: draft.description,
            rating: 0.0,
            stock: draft.stock,
            manufacturing_date: draft.manufacturing_date,
        };
        inner.products.insert(id, product.clone());
        tracing::info!(product_id = id, name = %product.name, "product created");
        Ok(product)
    }

    /// Replace an existing product wholesale, keyed by its id.
    pub fn update(&self, product: Product) -> StoreResult<Product> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        if !inner.products.contains_key(&product.id) {
            return Err(StoreError::not_found("product", product.id));
        }
        inner.products.insert(product.id, product.clone());
        Ok(product)
    }

    pub fn delete(&self, id: u32) -> StoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        // shift_remove keeps the listing order of the survivors.
        inner
            .products
            .shift_remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("product", id))
    }

    /// Overwrite the stored aggregate rating; called by review moderation.
    pub fn set_rating(&self, id: u32, rating: f64) -> StoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        let product = inner
            .products
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("product", id))?;
        product.rating = rating;
        Ok(())
    }

    /// Decrement stock for a purchased quantity, saturating at zero.
    pub fn deduct_stock(&self, id: u32, quantity: u32) -> StoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        let product = inner
            .products
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("product", id))?;
        product.stock = product.stock.saturating_sub(quantity);
        Ok(())
    }

    /// Products whose stock is strictly below the threshold
    pub fn low_stock(&self, threshold: u32) -> StoreResult<Vec<Product>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        Ok(inner
            .products
            .values()
            .filter(|p| p.stock < threshold)
            .cloned()
            .collect())
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::demo_products;
    use chrono::NaiveDate;

    #[test]
    fn listing_preserves_seed_order() {
        let store = CatalogStore::with_products(demo_products());
        let ids: Vec<u32> = store.list().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn categories_start_with_the_all_sentinel_and_dedupe() {
        let store = CatalogStore::with_products(demo_products());
        let categories = store.categories().unwrap();
        assert_eq!(categories[0], "All");
        // Two Accessories products, one label.
        assert_eq!(
            categories.iter().filter(|c| *c == "Accessories").count(),
            1
        );
        assert_eq!(categories.len(), 8);
    }

    #[test]
    fn create_assigns_the_next_id_and_zero_rating() {
        let store = CatalogStore::with_products(demo_products());
        let created = store
            .create(NewProduct {
                name: "SoundBar Mini".to_string(),
                category: "Speakers".to_string(),
                price: 79.99,
                image_url: String::new(),
                description: "Compact soundbar.".to_string(),
                stock: 40,
                manufacturing_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            })
            .unwrap();
        assert_eq!(created.id, 9);
        assert_eq!(created.rating, 0.0);
        assert_eq!(store.get(9).unwrap().name, "SoundBar Mini");
    }

    #[test]
    fn delete_keeps_order_of_survivors() {
        let store = CatalogStore::with_products(demo_products());
        store.delete(3).unwrap();
        let ids: Vec<u32> = store.list().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5, 6, 7, 8]);
        assert!(matches!(
            store.get(3),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn deduct_stock_saturates_at_zero() {
        let store = CatalogStore::with_products(demo_products());
        store.deduct_stock(6, 1000).unwrap();
        assert_eq!(store.get(6).unwrap().stock, 0);
    }

    #[test]
    fn low_stock_uses_a_strict_threshold() {
        let store = CatalogStore::with_products(demo_products());
        assert!(store.low_stock(10).unwrap().is_empty());
        let low = store.low_stock(81).unwrap();
        let ids: Vec<u32> = low.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 6]);
    }
}
