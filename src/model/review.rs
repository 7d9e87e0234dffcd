//! Product reviews and moderation status

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Moderation status of a review. Only approved reviews feed the product's
/// aggregate rating or appear as testimonials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewStatus {
    Approved,
    Pending,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u32,
    pub product_id: u32,
    pub author: String,
    /// Star rating, 1 to 5
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
    pub status: ReviewStatus,
}
