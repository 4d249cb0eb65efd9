//! Model listing handler.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use tracing::debug;

use super::{api_key_from, provider_from};
use crate::dto::ModelsResponse;
use crate::state::AppState;

/// List the provider's known model ids, sorted and de-duplicated.
///
/// GET /models
pub async fn list(State(state): State<AppState>, headers: HeaderMap) -> Json<ModelsResponse> {
    let provider = provider_from(&headers, &state.default_provider);
    let api_key = api_key_from(&headers);
    debug!(provider = %provider, "GET /models");

    let models = state
        .gateway
        .list_models(&provider, api_key.as_deref())
        .await;
    Json(ModelsResponse { models })
}
