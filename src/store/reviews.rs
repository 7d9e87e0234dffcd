//! Review store and moderation
//!
//! Customer submissions always enter as `Pending`; only moderation flips a
//! review's status. The aggregate product rating is the average of approved
//! reviews rounded to one decimal, and is recomputed here (and only here)
//! whenever moderation changes the approved set.

use crate::core::error::{StoreError, StoreResult};
use crate::model::{Review, ReviewStatus};
use chrono::Utc;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use validator::Validate;

struct ReviewsInner {
    reviews: IndexMap<u32, Review>,
    next_id: u32,
}

#[derive(Clone)]
pub struct ReviewStore {
    inner: Arc<RwLock<ReviewsInner>>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::with_reviews(Vec::new())
    }

    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        let next_id = reviews.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let reviews = reviews.into_iter().map(|r| (r.id, r)).collect();
        Self {
            inner: Arc::new(RwLock::new(ReviewsInner { reviews, next_id })),
        }
    }

    pub fn list(&self) -> StoreResult<Vec<Review>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        Ok(inner.reviews.values().cloned().collect())
    }

    pub fn get(&self, id: u32) -> StoreResult<Review> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        inner
            .reviews
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("review", id))
    }

    /// Every review for a product, regardless of status (moderation view)
    pub fn for_product(&self, product_id: u32) -> StoreResult<Vec<Review>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        Ok(inner
            .reviews
            .values()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect())
    }

    /// Only approved reviews, the set shown on product pages
    pub fn approved_for_product(&self, product_id: u32) -> StoreResult<Vec<Review>> {
        Ok(self
            .for_product(product_id)?
            .into_iter()
            .filter(|r| r.status == ReviewStatus::Approved)
            .collect())
    }

    /// Submit a customer review; it enters moderation as `Pending` and does
    /// not affect the product rating until approved.
    pub fn submit(&self, product_id: u32, author: &str, rating: u8, comment: &str) -> StoreResult<Review> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        let id = inner.next_id;
        let review = Review {
            id,
            product_id,
            author: author.to_string(),
            rating,
            comment: comment.to_string(),
            date: Utc::now().date_naive(),
            status: ReviewStatus::Pending,
        };
        review.validate().map_err(StoreError::from_validation)?;
        inner.next_id += 1;
        inner.reviews.insert(id, review.clone());
        Ok(review)
    }

    /// Set a review's moderation status and return the product's fresh
    /// aggregate rating; the caller pushes that into the catalog store.
    pub fn moderate(&self, id: u32, status: ReviewStatus) -> StoreResult<(Review, f64)> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        let review = inner
            .reviews
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("review", id))?;
        review.status = status;
        let review = review.clone();
        let rating = average_approved(inner.reviews.values(), review.product_id);
        tracing::info!(
            review_id = id,
            product_id = review.product_id,
            status = ?status,
            rating,
            "review moderated"
        );
        Ok((review, rating))
    }
}

impl Default for ReviewStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Average of approved review ratings, rounded to one decimal; 0 when the
/// product has no approved reviews.
fn average_approved<'a>(reviews: impl Iterator<Item = &'a Review>, product_id: u32) -> f64 {
    let approved: Vec<u32> = reviews
        .filter(|r| r.product_id == product_id && r.status == ReviewStatus::Approved)
        .map(|r| r.rating as u32)
        .collect();
    if approved.is_empty() {
        return 0.0;
    }
    let sum: u32 = approved.iter().sum();
    (sum as f64 / approved.len() as f64 * 10.0).round() / 10.0
}
