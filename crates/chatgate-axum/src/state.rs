//! Shared application state type.

use crate::bootstrap::GatewayContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// Holds the single `ChatGateway` (and with it the model cache) for the
/// life of the server.
pub type AppState = Arc<GatewayContext>;
