//! Product types and the new-vs-existing submission variant

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A catalog product.
///
/// `rating` is a pre-computed aggregate over approved reviews; it is stored
/// here as an opaque field and only recomputed by review moderation
/// ([`crate::store::ReviewStore`]). The catalog engine never derives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable identifier assigned by the catalog store
    pub id: u32,
    pub name: String,
    /// Category label, drawn from an open set
    pub category: String,
    /// Price in currency units, non-negative
    pub price: f64,
    pub image_url: String,
    pub description: String,
    /// Aggregate rating in [0, 5], derived from approved reviews
    pub rating: f64,
    pub stock: u32,
    pub manufacturing_date: NaiveDate,
}

/// A product that has not been assigned an identifier yet.
///
/// Admin "add product" submissions arrive in this shape; the catalog store
/// assigns the id and an initial rating of 0 (no approved reviews yet).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1, max = 60))]
    pub category: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub image_url: String,
    #[validate(length(max = 1000))]
    pub description: String,
    pub stock: u32,
    pub manufacturing_date: NaiveDate,
}

/// Admin product-form submission, resolved explicitly by the caller.
///
/// The two cases are separate variants rather than an optional id, so a
/// save can never silently create when it meant to update.
#[derive(Debug, Clone)]
pub enum ProductSubmission {
    New(NewProduct),
    Existing(Product),
}

impl Product {
    /// Case-insensitive substring match against name or description
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: 1,
            name: "FreePods Pro".to_string(),
            category: "Earbuds".to_string(),
            price: 89.99,
            image_url: String::new(),
            description: "Active Noise Cancellation earbuds.".to_string(),
            rating: 4.5,
            stock: 150,
            manufacturing_date: NaiveDate::from_ymd_opt(2023, 8, 15).unwrap(),
        }
    }

    #[test]
    fn query_match_is_case_insensitive() {
        let p = sample();
        assert!(p.matches_query("pro"));
        assert!(p.matches_query("FREEPODS"));
        assert!(p.matches_query("noise cancellation"));
        assert!(!p.matches_query("speaker"));
    }

    #[test]
    fn new_product_rejects_negative_price() {
        let draft = NewProduct {
            name: "Test".to_string(),
            category: "Misc".to_string(),
            price: -1.0,
            image_url: String::new(),
            description: String::new(),
            stock: 0,
            manufacturing_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn serializes_as_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("manufacturingDate").is_some());
    }
}
