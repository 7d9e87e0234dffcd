//! Catalog browsing handlers

use crate::catalog::engine::{CategoryFilter, FilterState, SortKey, filter_products, sort_products};
use crate::core::error::StoreResult;
use crate::model::{Product, Review};
use crate::server::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

/// Query string for the product listing
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BrowseQuery {
    pub category: Option<String>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub sort: Option<String>,
    pub search: Option<String>,
}

/// GET /api/products
///
/// The full filtered and sorted result, in display order. The client
/// reveals it incrementally; the server does not paginate here.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> StoreResult<Json<Vec<Product>>> {
    let filters = FilterState::new(
        query
            .category
            .as_deref()
            .map(CategoryFilter::from)
            .unwrap_or_default(),
        query.max_price.unwrap_or(f64::INFINITY),
        query.min_rating.unwrap_or(0.0),
    )?;
    let sort = match query.sort.as_deref() {
        Some(raw) => raw.parse::<SortKey>()?,
        None => SortKey::default(),
    };
    let search = query.search.as_deref().unwrap_or("");

    let products = state.catalog.list()?;
    let result = sort_products(filter_products(&products, &filters, search), sort);
    Ok(Json(result))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    /// Approved reviews only
    pub reviews: Vec<Review>,
}

/// GET /api/products/{id}
pub async fn product_detail(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> StoreResult<Json<ProductDetail>> {
    let product = state.catalog.get(id)?;
    let reviews = state.reviews.approved_for_product(id)?;
    Ok(Json(ProductDetail { product, reviews }))
}

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> StoreResult<Json<Vec<String>>> {
    Ok(Json(state.catalog.categories()?))
}

#[derive(Debug, Deserialize)]
pub struct SubmitReview {
    pub author: String,
    pub rating: u8,
    pub comment: String,
}

/// POST /api/products/{id}/reviews
pub async fn submit_review(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(body): Json<SubmitReview>,
) -> StoreResult<Json<Review>> {
    // Reviews for unknown products are rejected up front.
    state.catalog.get(id)?;
    let review = state
        .reviews
        .submit(id, &body.author, body.rating, &body.comment)?;
    Ok(Json(review))
}
