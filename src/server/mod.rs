//! HTTP surface: router, shared state, and the session extractor
//!
//! One flat REST API over the in-memory stores. Sessions are identified by
//! an opaque id the client sends in the `x-session-id` header; handlers
//! that need one use the [`SessionId`] extractor. All error responses go
//! through [`crate::core::error::StoreError`]'s `IntoResponse`.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod chat;
pub mod shop;

use crate::admin::Admin;
use crate::chat::{Assistant, RuleBasedAssistant};
use crate::config::StoreConfig;
use crate::core::error::{ArgumentError, StoreError};
use crate::shop::{Checkout, SessionStore};
use crate::store::{CatalogStore, OrderStore, ReviewStore, SupportStore, UserStore, seed};
use anyhow::Result;
use axum::{
    Json, Router,
    extract::FromRequestParts,
    http::request::Parts,
    routing::{delete, get, post, put},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub const SESSION_HEADER: &str = "x-session-id";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<StoreConfig>,
    pub catalog: CatalogStore,
    pub reviews: ReviewStore,
    pub users: UserStore,
    pub orders: OrderStore,
    pub support: SupportStore,
    pub sessions: SessionStore,
    pub checkout: Checkout,
    pub admin: Admin,
    pub assistant: Arc<dyn Assistant>,
}

impl AppState {
    /// Wire up stores seeded with the demo fixtures.
    pub fn seeded(config: StoreConfig) -> Result<Self> {
        let catalog = CatalogStore::with_products(seed::demo_products());
        let reviews = ReviewStore::with_reviews(seed::demo_reviews());
        let users = UserStore::with_users(seed::demo_users());
        let orders = OrderStore::with_orders(seed::demo_orders());
        let support = SupportStore::with_messages(seed::demo_messages());
        let sessions = SessionStore::new();
        let checkout = Checkout::new(
            catalog.clone(),
            orders.clone(),
            users.clone(),
            sessions.clone(),
            config.shipping_policy(),
        );
        let admin = Admin::new(
            catalog.clone(),
            reviews.clone(),
            users.clone(),
            orders.clone(),
        );
        Ok(Self {
            config: Arc::new(config),
            catalog,
            reviews,
            users,
            orders,
            support,
            sessions,
            checkout,
            admin,
            assistant: Arc::new(RuleBasedAssistant::new()?),
        })
    }
}

/// The session id a client carries in the `x-session-id` header
pub struct SessionId(pub Uuid);

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = StoreError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(SESSION_HEADER)
            .ok_or(StoreError::Argument(ArgumentError::Invalid {
                field: SESSION_HEADER,
                reason: "header is required".to_string(),
            }))?;
        let raw = header
            .to_str()
            .map_err(|_| StoreError::Argument(ArgumentError::Invalid {
                field: SESSION_HEADER,
                reason: "header is not valid text".to_string(),
            }))?;
        let id = raw
            .parse::<Uuid>()
            .map_err(|e| StoreError::Argument(ArgumentError::Invalid {
                field: SESSION_HEADER,
                reason: e.to_string(),
            }))?;
        Ok(SessionId(id))
    }
}

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/products", get(catalog::list_products))
        .route("/api/products/{id}", get(catalog::product_detail))
        .route("/api/products/{id}/reviews", post(catalog::submit_review))
        .route("/api/categories", get(catalog::list_categories))
        .route("/api/chat", post(chat::chat))
        .route("/api/sessions", post(shop::create_session))
        .route("/api/cart", get(shop::view_cart))
        .route("/api/cart/items", post(shop::add_to_cart))
        .route("/api/cart/items/{id}", put(shop::set_cart_quantity))
        .route("/api/cart/items/{id}", delete(shop::remove_from_cart))
        .route("/api/wishlist/{id}", post(shop::toggle_wishlist))
        .route("/api/checkout/quote", get(shop::checkout_quote))
        .route("/api/checkout", post(shop::place_order))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/me", get(auth::current_user))
        .route("/api/orders", get(shop::my_orders))
        .route("/api/orders/{id}/track", get(shop::track_order))
        .route("/api/contact", post(shop::submit_contact))
        .route("/api/meetings", post(shop::book_meeting))
        .route("/api/warranty-claims", post(shop::file_claim))
        .route("/api/admin/stats", get(admin::dashboard))
        .route("/api/admin/products", post(admin::create_product))
        .route("/api/admin/products/{id}", put(admin::update_product))
        .route("/api/admin/products/{id}", delete(admin::delete_product))
        .route("/api/admin/orders", get(admin::list_orders))
        .route("/api/admin/orders/{id}/status", put(admin::set_order_status))
        .route("/api/admin/users", get(admin::list_users))
        .route("/api/admin/users/{id}/role", put(admin::set_user_role))
        .route("/api/admin/messages", get(admin::list_messages))
        .route(
            "/api/admin/messages/{id}/status",
            put(admin::set_message_status),
        )
        .route("/api/admin/reviews", get(admin::list_reviews))
        .route(
            "/api/admin/reviews/{id}/status",
            put(admin::moderate_review),
        )
        .route("/api/admin/meetings", get(admin::list_meetings))
        .route(
            "/api/admin/meetings/{id}/status",
            put(admin::set_meeting_status),
        )
        .route("/api/admin/claims", get(admin::list_claims))
        .route("/api/admin/claims/{id}/status", put(admin::set_claim_status))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Serve the application with graceful shutdown
///
/// Binds to the configured address, serves requests, and handles SIGTERM
/// and SIGINT (Ctrl+C) for graceful shutdown.
pub async fn serve(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr.clone();
    let app = build_router(state);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
