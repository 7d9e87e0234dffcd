//! Admin back-office operations
//!
//! Thin glue over the stores: the dashboard aggregates, the product form's
//! new-vs-existing split, and review moderation (the one place a product's
//! aggregate rating changes). Role enforcement happens at the HTTP layer;
//! everything here assumes the caller is already an admin.

use crate::core::error::{StoreError, StoreResult};
use crate::model::{OrderStatus, Product, ProductSubmission, Review, ReviewStatus};
use crate::store::{CatalogStore, OrderStore, ReviewStore, UserStore};
use serde::Serialize;

/// Window for the "new users" dashboard stat
const RECENT_USER_DAYS: i64 = 30;

/// The four headline numbers on the admin dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of totals over delivered orders
    pub total_revenue: f64,
    pub processing_orders: usize,
    /// Accounts created in the last 30 days
    pub new_users: usize,
    /// Products below the low-stock threshold
    pub low_stock_products: usize,
}

#[derive(Clone)]
pub struct Admin {
    catalog: CatalogStore,
    reviews: ReviewStore,
    users: UserStore,
    orders: OrderStore,
}

impl Admin {
    pub fn new(
        catalog: CatalogStore,
        reviews: ReviewStore,
        users: UserStore,
        orders: OrderStore,
    ) -> Self {
        Self {
            catalog,
            reviews,
            users,
            orders,
        }
    }

    pub fn dashboard(&self, low_stock_threshold: u32) -> StoreResult<DashboardStats> {
        Ok(DashboardStats {
            total_revenue: self.orders.delivered_revenue()?,
            processing_orders: self.orders.count_with_status(OrderStatus::Processing)?,
            new_users: self.users.registered_within_days(RECENT_USER_DAYS)?,
            low_stock_products: self.catalog.low_stock(low_stock_threshold)?.len(),
        })
    }

    /// Handle the product form: create drafts, update existing products.
    pub fn save_product(&self, submission: ProductSubmission) -> StoreResult<Product> {
        match submission {
            ProductSubmission::New(draft) => self.catalog.create(draft),
            ProductSubmission::Existing(product) => self.catalog.update(product),
        }
    }

    /// Moderate a review and push the recomputed rating into the catalog.
    ///
    /// A review may outlive its product (the product was deleted); the
    /// status change still applies and the rating write is skipped.
    pub fn moderate_review(&self, review_id: u32, status: ReviewStatus) -> StoreResult<Review> {
        let (review, rating) = self.reviews.moderate(review_id, status)?;
        match self.catalog.set_rating(review.product_id, rating) {
            Ok(()) | Err(StoreError::NotFound { .. }) => Ok(review),
            Err(e) => Err(e),
        }
    }
}
