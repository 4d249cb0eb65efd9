//! HTTP handlers for the front door.
//!
//! Handlers only parse headers and bodies; all routing and validation
//! decisions are made by `ChatGateway`.

pub mod chat;
pub mod models;
pub mod user_message;

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;

/// Header naming the target provider.
pub const PROVIDER_HEADER: &str = "x-provider";

/// Provider named by the request, or `default` when absent or blank.
pub(crate) fn provider_from(headers: &HeaderMap, default: &str) -> String {
    headers
        .get(PROVIDER_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// API key from `Authorization: Bearer <key>`, if any.
pub(crate) fn api_key_from(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let key = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();
    (!key.is_empty()).then(|| key.to_string())
}
