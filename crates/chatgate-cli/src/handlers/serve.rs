//! Serve command handler.

use std::time::Duration;

use anyhow::Result;
use chatgate_axum::{ServerConfig, start_server};
use chatgate_core::{ProviderRegistry, TransportConfig};
use tracing::{info, warn};

use crate::commands::ServeArgs;

/// Translate CLI options into a server configuration.
pub fn server_config(args: &ServeArgs, registry: ProviderRegistry) -> ServerConfig {
    let mut config = ServerConfig::with_defaults()
        .with_host(args.host.clone())
        .with_port(args.port)
        .with_registry(registry)
        .with_transport(
            TransportConfig::new().with_timeout(Duration::from_secs(args.timeout_secs)),
        );

    config.default_provider.clone_from(&args.default_provider);
    config.fallback_model.clone_from(&args.fallback_model);

    if !args.allow_origins.is_empty() {
        config = config.with_allowed_origins(args.allow_origins.clone());
    }
    if !args.no_static {
        config = config.with_static_dir(args.static_dir.clone());
    }
    config
}

/// Execute the serve command. Runs until Ctrl-C.
pub async fn execute(args: &ServeArgs, registry: ProviderRegistry) -> Result<()> {
    if registry.lookup(&args.default_provider).is_err() {
        warn!(
            provider = %args.default_provider,
            "Default provider is not registered; requests without X-Provider will be rejected"
        );
    }

    let config = server_config(args, registry);
    info!(
        host = %config.host,
        port = config.port,
        static_dir = ?config.static_dir,
        "Starting chatgate"
    );
    start_server(config).await
}
