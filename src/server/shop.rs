//! Shopping handlers: sessions, cart, wishlist, checkout, orders, support

use crate::core::error::StoreResult;
use crate::model::{Address, ContactMessage, MeetingRequest, NewMeetingRequest, NewWarrantyClaim, Order, WarrantyClaim};
use crate::server::{AppState, SessionId};
use crate::shop::cart::CartLine;
use crate::shop::checkout::CheckoutQuote;
use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreated {
    pub session_id: uuid::Uuid,
}

/// POST /api/sessions
pub async fn create_session(State(state): State<AppState>) -> StoreResult<Json<SessionCreated>> {
    let session_id = state.sessions.create()?;
    Ok(Json(SessionCreated { session_id }))
}

/// What the cart drawer renders
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartLine>,
    /// Total units across all lines
    pub count: u32,
    pub subtotal: f64,
    pub wishlist: Vec<u32>,
}

/// GET /api/cart
pub async fn view_cart(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> StoreResult<Json<CartView>> {
    let session = state.sessions.get(session_id)?;
    let items = session.cart.lines(&state.catalog)?;
    let subtotal = items.iter().map(CartLine::line_total).sum();
    Ok(Json(CartView {
        count: session.cart.count(),
        wishlist: session.cart.wishlist(),
        items,
        subtotal,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCart {
    pub product_id: u32,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// POST /api/cart/items
pub async fn add_to_cart(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Json(body): Json<AddToCart>,
) -> StoreResult<Json<serde_json::Value>> {
    // Only catalog products can be added.
    state.catalog.get(body.product_id)?;
    let count = state.sessions.update(session_id, |session| {
        session.cart.add(body.product_id, body.quantity);
        Ok(session.cart.count())
    })?;
    Ok(Json(serde_json::json!({ "count": count })))
}

#[derive(Debug, Deserialize)]
pub struct SetQuantity {
    pub quantity: u32,
}

/// PUT /api/cart/items/{id}
pub async fn set_cart_quantity(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Path(product_id): Path<u32>,
    Json(body): Json<SetQuantity>,
) -> StoreResult<Json<serde_json::Value>> {
    let count = state.sessions.update(session_id, |session| {
        session.cart.set_quantity(product_id, body.quantity)?;
        Ok(session.cart.count())
    })?;
    Ok(Json(serde_json::json!({ "count": count })))
}

/// DELETE /api/cart/items/{id}
pub async fn remove_from_cart(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Path(product_id): Path<u32>,
) -> StoreResult<Json<serde_json::Value>> {
    let count = state.sessions.update(session_id, |session| {
        session.cart.remove(product_id)?;
        Ok(session.cart.count())
    })?;
    Ok(Json(serde_json::json!({ "count": count })))
}

/// POST /api/wishlist/{id}
pub async fn toggle_wishlist(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Path(product_id): Path<u32>,
) -> StoreResult<Json<serde_json::Value>> {
    state.catalog.get(product_id)?;
    let in_wishlist = state
        .sessions
        .update(session_id, |session| Ok(session.cart.toggle_wishlist(product_id)))?;
    Ok(Json(
        serde_json::json!({ "productId": product_id, "inWishlist": in_wishlist }),
    ))
}

/// GET /api/checkout/quote
pub async fn checkout_quote(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> StoreResult<Json<CheckoutQuote>> {
    Ok(Json(state.checkout.quote(session_id)?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrder {
    pub address: Address,
    #[serde(default)]
    pub save_address: bool,
}

/// POST /api/checkout
pub async fn place_order(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Json(body): Json<PlaceOrder>,
) -> StoreResult<Json<Order>> {
    let order = state
        .checkout
        .place_order(session_id, body.address, body.save_address)?;
    Ok(Json(order))
}

/// GET /api/orders — the logged-in customer's order history
pub async fn my_orders(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> StoreResult<Json<Vec<Order>>> {
    let user_id = state.sessions.require_user(session_id)?;
    Ok(Json(state.orders.for_customer(user_id)?))
}

/// GET /api/orders/{id}/track — public tracking by order id
pub async fn track_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StoreResult<Json<Order>> {
    Ok(Json(state.orders.get(&id)?))
}

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(body): Json<ContactForm>,
) -> StoreResult<Json<ContactMessage>> {
    let message = state
        .support
        .submit_message(&body.name, &body.email, &body.subject, &body.message)?;
    Ok(Json(message))
}

/// POST /api/meetings
pub async fn book_meeting(
    State(state): State<AppState>,
    Json(body): Json<NewMeetingRequest>,
) -> StoreResult<Json<MeetingRequest>> {
    Ok(Json(state.support.book_meeting(body)?))
}

/// POST /api/warranty-claims
pub async fn file_claim(
    State(state): State<AppState>,
    Json(body): Json<NewWarrantyClaim>,
) -> StoreResult<Json<WarrantyClaim>> {
    Ok(Json(state.support.file_claim(body)?))
}
