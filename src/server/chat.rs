//! Chat widget handler

use crate::chat::AssistantReply;
use crate::core::error::StoreResult;
use crate::server::AppState;
use axum::{Json, extract::State};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

/// POST /api/chat
///
/// An assistant failure is not the widget's problem: it degrades to the
/// apology reply instead of an error status.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> StoreResult<Json<AssistantReply>> {
    let products = state.catalog.list()?;
    let reply = match state.assistant.reply(&body.query, &products).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!("assistant failed: {e:#}");
            AssistantReply::apology()
        }
    };
    Ok(Json(reply))
}
