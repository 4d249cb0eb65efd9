#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{
    CorsConfig, DEFAULT_FALLBACK_MODEL, GatewayContext, ServerConfig, bootstrap,
    bootstrap_with_transport, start_server,
};
pub use error::HttpError;
pub use routes::{create_router, create_spa_router};
pub use state::AppState;
