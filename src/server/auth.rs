//! Authentication handlers: login, registration, logout
//!
//! There is no token scheme. Logging in binds the user to the caller's
//! session; the session id header is the only credential afterwards.

use crate::core::error::StoreResult;
use crate::model::User;
use crate::server::{AppState, SessionId};
use axum::{Json, extract::State};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Json(body): Json<LoginRequest>,
) -> StoreResult<Json<User>> {
    let user = state.users.login(&body.email, &body.password)?;
    state.sessions.attach_user(session_id, user.id)?;
    Ok(Json(user))
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// POST /api/auth/register
///
/// Registration logs the new account in on the caller's session.
pub async fn register(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Json(body): Json<RegisterRequest>,
) -> StoreResult<Json<User>> {
    let user = state.users.register(&body.name, &body.email, &body.password)?;
    state.sessions.attach_user(session_id, user.id)?;
    Ok(Json(user))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> StoreResult<Json<serde_json::Value>> {
    state.sessions.detach_user(session_id)?;
    Ok(Json(serde_json::json!({ "loggedOut": true })))
}

/// GET /api/me
pub async fn current_user(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> StoreResult<Json<User>> {
    let user_id = state.sessions.require_user(session_id)?;
    Ok(Json(state.users.get(user_id)?))
}
