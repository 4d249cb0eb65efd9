//! Route definitions and router construction.

use axum::Router;
use axum::routing::{get, post};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use crate::bootstrap::{CorsConfig, GatewayContext};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Gateway endpoints, state not yet applied.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/models", get(handlers::models::list))
        .route("/chat", post(handlers::chat::forward))
        .route("/user-message", post(handlers::user_message::record))
}

/// Create the router with the gateway endpoints only.
///
/// For serving the chat page as well, use [`create_spa_router`].
pub fn create_router(ctx: GatewayContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .merge(api_routes().with_state(state).layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// Create a router with the gateway endpoints and the static chat page.
///
/// Only `GET /` is served from `static_dir`, as `index.html`. Nothing else in
/// the directory is reachable, so secrets such as `.env` or a providers file
/// living next to the page stay private.
pub fn create_spa_router<P: AsRef<Path>>(
    ctx: GatewayContext,
    static_dir: P,
    cors_config: &CorsConfig,
) -> Router {
    let index_path = static_dir.as_ref().join("index.html");

    create_router(ctx, cors_config).route_service("/", ServeFile::new(index_path))
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
