//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where the gateway is wired together for the
//! web adapter: registry, transport and model cache are created here once and
//! shared with every handler.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chatgate_core::{
    ChatGateway, DEFAULT_PROVIDER, ProviderRegistry, ReqwestTransport, TransportConfig,
    UpstreamTransport,
};
use tokio::net::TcpListener;
use tracing::info;

/// Model used when a chat body does not name one.
pub const DEFAULT_FALLBACK_MODEL: &str = "openai/gpt-3.5-turbo";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Optional directory holding the chat page (`index.html`).
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Provider table, fixed for the life of the server.
    pub registry: ProviderRegistry,
    /// Upstream HTTP client settings.
    pub transport: TransportConfig,
    /// Provider used when `X-Provider` is absent.
    pub default_provider: String,
    /// Model used when the chat body omits `model`.
    pub fallback_model: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            static_dir: None,
            cors: CorsConfig::default(),
            registry: ProviderRegistry::builtin(),
            transport: TransportConfig::default(),
            default_provider: DEFAULT_PROVIDER.to_string(),
            fallback_model: DEFAULT_FALLBACK_MODEL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Create config with built-in providers and default ports.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Set the static directory for page serving.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    #[must_use]
    pub fn with_registry(mut self, registry: ProviderRegistry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }
}

/// Application context for the Axum adapter.
pub struct GatewayContext {
    /// Registry, model cache and forwarder.
    pub gateway: ChatGateway,
    /// Provider used when `X-Provider` is absent.
    pub default_provider: String,
    /// Model used when the chat body omits `model`.
    pub fallback_model: String,
}

/// Build the gateway with the production reqwest transport.
pub fn bootstrap(config: &ServerConfig) -> Result<GatewayContext> {
    let transport = ReqwestTransport::new(&config.transport)?;
    Ok(bootstrap_with_transport(config, Arc::new(transport)))
}

/// Build the gateway around an arbitrary transport.
pub fn bootstrap_with_transport(
    config: &ServerConfig,
    transport: Arc<dyn UpstreamTransport>,
) -> GatewayContext {
    info!(
        target: "chatgate.bootstrap",
        providers = ?config.registry.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        default_provider = %config.default_provider,
        timeout_secs = config.transport.timeout().as_secs(),
        "Gateway configured"
    );

    GatewayContext {
        gateway: ChatGateway::new(config.registry.clone(), transport),
        default_provider: config.default_provider.clone(),
        fallback_model: config.fallback_model.clone(),
    }
}

/// Start the web server and run until Ctrl-C.
///
/// If `config.static_dir` is set, also serves the chat page.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config)?;

    let app = if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
        crate::routes::create_spa_router(ctx, static_dir, &config.cors)
    } else {
        crate::routes::create_router(ctx, &config.cors)
    };

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("chatgate listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("chatgate shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
