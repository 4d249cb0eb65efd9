//! Chat forwarding handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use chatgate_core::ChatRequest;
use serde_json::Value;
use tracing::{Instrument, info_span, warn};
use uuid::Uuid;

use super::{api_key_from, provider_from};
use crate::dto::ChatBody;
use crate::error::HttpError;
use crate::state::AppState;

/// Validate the model and forward the conversation to the provider.
///
/// POST /chat
///
/// Returns the provider's JSON body unmodified on success. Errors are JSON
/// `{ error, status, type }` with 400 for caller problems and 500 for any
/// upstream failure.
pub async fn forward(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, HttpError> {
    let span = info_span!("chat", request_id = %Uuid::new_v4());

    async move {
        let body: ChatBody = serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to parse chat body: {e}");
            HttpError::BadRequest(e.to_string())
        })?;

        let request = ChatRequest::new(
            provider_from(&headers, &state.default_provider),
            body.model.unwrap_or_else(|| state.fallback_model.clone()),
            api_key_from(&headers),
            body.messages,
        );

        let result = state.gateway.chat(&request).await.map_err(|e| {
            warn!(kind = e.kind(), status = e.status_code(), "Chat request failed: {e}");
            HttpError::from(e)
        })?;

        Ok(Json(result))
    }
    .instrument(span)
    .await
}
