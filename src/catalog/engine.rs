//! Filtering, searching, and sorting over the in-memory product list
//!
//! Both operations are pure: they never mutate their inputs, preserve the
//! relative order of equal elements, and treat an empty result as a valid,
//! non-error outcome.

use crate::core::error::{ArgumentError, StoreResult};
use crate::model::Product;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The sentinel category label meaning "no category constraint"
pub const ALL_CATEGORIES: &str = "All";

/// Category facet: either the "All" sentinel or an exact label.
///
/// Serialized as the plain string the UI sends (`"All"` or a label), but
/// kept as a tagged variant internally so the sentinel is never confused
/// with a real category that happens to be named "All"-ish.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(label) => label,
        }
    }

    /// Whether a product's category label satisfies this filter
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(label) => label == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        if s == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(s.to_string())
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(CategoryFilter::from(s.as_str()))
    }
}

/// Facet filter criteria for the main listing.
///
/// Invariant: `max_price` and `min_rating` are non-negative and
/// `min_rating <= 5`; construction through [`FilterState::new`] enforces
/// this at the boundary rather than coercing bad values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub category: CategoryFilter,
    /// Inclusive upper price bound
    pub max_price: f64,
    /// Inclusive lower rating bound; 0 means "no constraint"
    pub min_rating: f64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            max_price: f64::INFINITY,
            min_rating: 0.0,
        }
    }
}

impl FilterState {
    /// Build a filter state, rejecting malformed bounds.
    pub fn new(
        category: CategoryFilter,
        max_price: f64,
        min_rating: f64,
    ) -> StoreResult<Self> {
        let state = Self {
            category,
            max_price,
            min_rating,
        };
        state.validate()?;
        Ok(state)
    }

    /// Check the bound invariants. Deserialized filter states must pass
    /// through here before reaching the engine.
    pub fn validate(&self) -> StoreResult<()> {
        if self.max_price.is_nan() || self.max_price < 0.0 {
            return Err(ArgumentError::NegativeBound {
                field: "max_price",
                value: self.max_price,
            }
            .into());
        }
        if self.min_rating.is_nan() || self.min_rating < 0.0 {
            return Err(ArgumentError::NegativeBound {
                field: "min_rating",
                value: self.min_rating,
            }
            .into());
        }
        if self.min_rating > 5.0 {
            return Err(ArgumentError::BoundTooLarge {
                field: "min_rating",
                max: 5.0,
                value: self.min_rating,
            }
            .into());
        }
        Ok(())
    }
}

/// Sort keys for the product listing. `Featured` preserves input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    NameAsc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingDesc => "rating-desc",
            SortKey::NameAsc => "name-asc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(SortKey::Featured),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "rating-desc" => Ok(SortKey::RatingDesc),
            "name-asc" => Ok(SortKey::NameAsc),
            other => Err(ArgumentError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Produce the ordered subset of products to display.
///
/// A non-empty (after trimming) search query is the dominant filter: it
/// matches name OR description case-insensitively and the facet constraints
/// are not applied at all. Otherwise the facets apply in sequence: category
/// equality (skipped for the All sentinel), then `price <= max_price`, then
/// `rating >= min_rating`. Each stage preserves the input's relative order.
pub fn filter_products(
    products: &[Product],
    filters: &FilterState,
    search_query: &str,
) -> Vec<Product> {
    let query = search_query.trim();
    if !query.is_empty() {
        return products
            .iter()
            .filter(|p| p.matches_query(query))
            .cloned()
            .collect();
    }

    products
        .iter()
        .filter(|p| filters.category.matches(&p.category))
        .filter(|p| p.price <= filters.max_price)
        .filter(|p| filters.min_rating <= 0.0 || p.rating >= filters.min_rating)
        .cloned()
        .collect()
}

/// Stable sort on the field named by the key. `Featured` is the identity.
///
/// Name comparison is case-insensitive; float comparisons use `total_cmp`
/// with no epsilon handling — exact ties keep their relative input order.
pub fn sort_products(mut products: Vec<Product>, key: SortKey) -> Vec<Product> {
    match key {
        SortKey::Featured => {}
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::RatingDesc => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::NameAsc => {
            products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
    }
    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn product(id: u32, name: &str, category: &str, price: f64, rating: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price,
            image_url: String::new(),
            description: format!("{name} description"),
            rating,
            stock: 10,
            manufacturing_date: NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "FreePods Pro", "Earbuds", 89.99, 4.5),
            product(2, "Powerank 20K", "Power Banks", 45.50, 4.5),
            product(3, "WatchFit 2", "Smart Watches", 120.00, 5.0),
            product(4, "BoomBass Speaker", "Speakers", 65.99, 5.0),
        ]
    }

    #[test]
    fn unconstrained_filter_returns_everything_in_order() {
        let products = catalog();
        let result = filter_products(&products, &FilterState::default(), "");
        assert_eq!(result, products);
    }

    #[test]
    fn category_price_and_rating_apply_in_sequence() {
        let products = catalog();
        let filters = FilterState::new(CategoryFilter::from("Earbuds"), 100.0, 4.0).unwrap();
        let result = filter_products(&products, &filters, "");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn price_bound_is_inclusive() {
        let products = catalog();
        let filters = FilterState::new(CategoryFilter::All, 89.99, 0.0).unwrap();
        let ids: Vec<u32> = filter_products(&products, &filters, "")
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn search_ignores_facets() {
        let products = catalog();
        // Facets would exclude everything; search must still match.
        let filters = FilterState::new(CategoryFilter::from("Speakers"), 0.01, 5.0).unwrap();
        let result = filter_products(&products, &filters, "pro");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "FreePods Pro");
    }

    #[test]
    fn blank_search_is_not_search_mode() {
        let products = catalog();
        let filters = FilterState::new(CategoryFilter::from("Speakers"), 200.0, 0.0).unwrap();
        let result = filter_products(&products, &filters, "   ");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 4);
    }

    #[test]
    fn empty_result_is_valid() {
        let products = catalog();
        let result = filter_products(&products, &FilterState::default(), "zzz-no-match");
        assert!(result.is_empty());
    }

    #[test]
    fn sort_featured_preserves_input_order() {
        let products = catalog();
        assert_eq!(sort_products(products.clone(), SortKey::Featured), products);
    }

    #[test]
    fn sort_price_ascending() {
        let ids: Vec<u32> = sort_products(catalog(), SortKey::PriceAsc)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn sort_is_stable_on_ties() {
        // Products 1 and 2 share a rating; 3 and 4 share a rating.
        let ids: Vec<u32> = sort_products(catalog(), SortKey::RatingDesc)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![3, 4, 1, 2]);
    }

    #[test]
    fn sort_name_is_case_insensitive() {
        let mut products = catalog();
        products[0].name = "aero Headset".to_string();
        let names: Vec<String> = sort_products(products, SortKey::NameAsc)
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(names[0], "aero Headset");
        assert_eq!(names[1], "BoomBass Speaker");
    }

    #[test]
    fn sort_is_idempotent() {
        let once = sort_products(catalog(), SortKey::PriceAsc);
        let twice = sort_products(once.clone(), SortKey::PriceAsc);
        assert_eq!(once, twice);
    }

    #[test]
    fn sort_preserves_multiset() {
        let mut before: Vec<u32> = catalog().iter().map(|p| p.id).collect();
        for key in [
            SortKey::Featured,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::RatingDesc,
            SortKey::NameAsc,
        ] {
            let mut after: Vec<u32> = sort_products(catalog(), key).iter().map(|p| p.id).collect();
            before.sort_unstable();
            after.sort_unstable();
            assert_eq!(before, after);
        }
    }

    #[test]
    fn negative_bounds_are_rejected() {
        assert!(FilterState::new(CategoryFilter::All, -1.0, 0.0).is_err());
        assert!(FilterState::new(CategoryFilter::All, 100.0, -0.5).is_err());
        assert!(FilterState::new(CategoryFilter::All, 100.0, 5.5).is_err());
    }

    #[test]
    fn unknown_sort_key_is_rejected() {
        assert!("price-sideways".parse::<SortKey>().is_err());
        assert_eq!("price-asc".parse::<SortKey>().unwrap(), SortKey::PriceAsc);
    }

    #[test]
    fn category_sentinel_round_trips() {
        let all: CategoryFilter = serde_json::from_str("\"All\"").unwrap();
        assert_eq!(all, CategoryFilter::All);
        let named: CategoryFilter = serde_json::from_str("\"Earbuds\"").unwrap();
        assert_eq!(named, CategoryFilter::Category("Earbuds".to_string()));
        assert_eq!(serde_json::to_string(&all).unwrap(), "\"All\"");
    }
}
