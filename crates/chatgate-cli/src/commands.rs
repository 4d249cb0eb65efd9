//! Available subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP gateway
    Serve(ServeArgs),

    /// Show the configured providers
    Providers,
}

/// Options for `chatgate serve`.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "CHATGATE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "CHATGATE_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Directory holding the chat page (index.html)
    #[arg(long, env = "CHATGATE_STATIC_DIR", default_value = ".")]
    pub static_dir: PathBuf,

    /// Serve the API only, without the chat page
    #[arg(long)]
    pub no_static: bool,

    /// Upstream request timeout in seconds
    #[arg(long, env = "CHATGATE_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,

    /// Allowed CORS origin (repeatable; allows all origins when omitted)
    #[arg(long = "allow-origin")]
    pub allow_origins: Vec<String>,

    /// Provider used when a request has no X-Provider header
    #[arg(long, env = "CHATGATE_DEFAULT_PROVIDER", default_value = chatgate_core::DEFAULT_PROVIDER)]
    pub default_provider: String,

    /// Model used when a chat body has no model
    #[arg(long, env = "CHATGATE_FALLBACK_MODEL", default_value = chatgate_axum::DEFAULT_FALLBACK_MODEL)]
    pub fallback_model: String,
}
