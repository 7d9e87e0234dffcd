//! Admin back-office handlers
//!
//! Every handler here re-checks the caller's role; the router does not
//! carry a separate auth layer. Admin tables paginate through the shared
//! query/pagination shapes.

use crate::admin::DashboardStats;
use crate::core::error::{AuthError, StoreError, StoreResult};
use crate::core::query::{PaginatedResponse, QueryParams};
use crate::model::{
    ClaimStatus, ContactMessage, MeetingRequest, MeetingStatus, MessageStatus, NewProduct, Order,
    OrderStatus, Product, ProductSubmission, Review, ReviewStatus, User, UserRole, WarrantyClaim,
};
use crate::server::{AppState, SessionId};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

/// Resolve the session to a user and require an admin role.
fn require_admin(state: &AppState, session_id: uuid::Uuid) -> StoreResult<User> {
    let user_id = state.sessions.require_user(session_id)?;
    let user = state.users.get(user_id)?;
    if !user.role.is_admin() {
        return Err(StoreError::Auth(AuthError::Forbidden));
    }
    Ok(user)
}

/// GET /api/admin/stats
pub async fn dashboard(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> StoreResult<Json<DashboardStats>> {
    require_admin(&state, session_id)?;
    let stats = state
        .admin
        .dashboard(state.config.admin.low_stock_threshold)?;
    Ok(Json(stats))
}

/// POST /api/admin/products
pub async fn create_product(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Json(draft): Json<NewProduct>,
) -> StoreResult<Json<Product>> {
    require_admin(&state, session_id)?;
    Ok(Json(state.admin.save_product(ProductSubmission::New(draft))?))
}

/// PUT /api/admin/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Path(id): Path<u32>,
    Json(mut product): Json<Product>,
) -> StoreResult<Json<Product>> {
    require_admin(&state, session_id)?;
    // The path wins over whatever id the body carries.
    product.id = id;
    Ok(Json(
        state.admin.save_product(ProductSubmission::Existing(product))?,
    ))
}

/// DELETE /api/admin/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Path(id): Path<u32>,
) -> StoreResult<Json<serde_json::Value>> {
    require_admin(&state, session_id)?;
    state.catalog.delete(id)?;
    Ok(Json(serde_json::json!({ "deleted": id })))
}

/// GET /api/admin/orders?page=&limit=
pub async fn list_orders(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Query(params): Query<QueryParams>,
) -> StoreResult<Json<PaginatedResponse<Order>>> {
    require_admin(&state, session_id)?;
    let orders = state.orders.list()?;
    Ok(Json(params.paginate(&orders)))
}

#[derive(Debug, Deserialize)]
pub struct SetOrderStatus {
    pub status: OrderStatus,
}

/// PUT /api/admin/orders/{id}/status
pub async fn set_order_status(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Path(id): Path<String>,
    Json(body): Json<SetOrderStatus>,
) -> StoreResult<Json<Order>> {
    require_admin(&state, session_id)?;
    Ok(Json(state.orders.set_status(&id, body.status)?))
}

/// GET /api/admin/users?page=&limit=
pub async fn list_users(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Query(params): Query<QueryParams>,
) -> StoreResult<Json<PaginatedResponse<User>>> {
    require_admin(&state, session_id)?;
    let users = state.users.list()?;
    Ok(Json(params.paginate(&users)))
}

#[derive(Debug, Deserialize)]
pub struct SetUserRole {
    pub role: UserRole,
}

/// PUT /api/admin/users/{id}/role
pub async fn set_user_role(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Path(id): Path<u32>,
    Json(body): Json<SetUserRole>,
) -> StoreResult<Json<User>> {
    require_admin(&state, session_id)?;
    Ok(Json(state.users.set_role(id, body.role)?))
}

/// GET /api/admin/messages
pub async fn list_messages(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> StoreResult<Json<Vec<ContactMessage>>> {
    require_admin(&state, session_id)?;
    Ok(Json(state.support.messages()?))
}

#[derive(Debug, Deserialize)]
pub struct SetMessageStatus {
    pub status: MessageStatus,
}

/// PUT /api/admin/messages/{id}/status
pub async fn set_message_status(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Path(id): Path<u32>,
    Json(body): Json<SetMessageStatus>,
) -> StoreResult<Json<ContactMessage>> {
    require_admin(&state, session_id)?;
    Ok(Json(state.support.set_message_status(id, body.status)?))
}

/// GET /api/admin/reviews — every review, all statuses
pub async fn list_reviews(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> StoreResult<Json<Vec<Review>>> {
    require_admin(&state, session_id)?;
    Ok(Json(state.reviews.list()?))
}

#[derive(Debug, Deserialize)]
pub struct ModerateReview {
    pub status: ReviewStatus,
}

/// PUT /api/admin/reviews/{id}/status
pub async fn moderate_review(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Path(id): Path<u32>,
    Json(body): Json<ModerateReview>,
) -> StoreResult<Json<Review>> {
    require_admin(&state, session_id)?;
    Ok(Json(state.admin.moderate_review(id, body.status)?))
}

/// GET /api/admin/meetings
pub async fn list_meetings(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> StoreResult<Json<Vec<MeetingRequest>>> {
    require_admin(&state, session_id)?;
    Ok(Json(state.support.meetings()?))
}

#[derive(Debug, Deserialize)]
pub struct SetMeetingStatus {
    pub status: MeetingStatus,
}

/// PUT /api/admin/meetings/{id}/status
pub async fn set_meeting_status(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Path(id): Path<u32>,
    Json(body): Json<SetMeetingStatus>,
) -> StoreResult<Json<MeetingRequest>> {
    require_admin(&state, session_id)?;
    Ok(Json(state.support.set_meeting_status(id, body.status)?))
}

/// GET /api/admin/claims
pub async fn list_claims(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> StoreResult<Json<Vec<WarrantyClaim>>> {
    require_admin(&state, session_id)?;
    Ok(Json(state.support.claims()?))
}

#[derive(Debug, Deserialize)]
pub struct SetClaimStatus {
    pub status: ClaimStatus,
}

/// PUT /api/admin/claims/{id}/status
pub async fn set_claim_status(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Path(id): Path<u32>,
    Json(body): Json<SetClaimStatus>,
) -> StoreResult<Json<WarrantyClaim>> {
    require_admin(&state, session_id)?;
    Ok(Json(state.support.set_claim_status(id, body.status)?))
}
