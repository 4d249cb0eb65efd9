//! Client-side logging hook.

use axum::Json;
use axum::body::Bytes;
use tracing::info;

use crate::dto::{SuccessResponse, UserMessageBody};

/// Log the latest user message. Never fails.
///
/// POST /user-message
pub async fn record(body: Bytes) -> Json<SuccessResponse> {
    let body: UserMessageBody = serde_json::from_slice(&body).unwrap_or_default();

    let content = body
        .messages
        .last()
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .unwrap_or("");
    info!(messages = body.messages.len(), content, "Received user message");

    Json(SuccessResponse { success: true })
}
