//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Local gateway between a browser chat client and hosted LLM providers.
#[derive(Parser)]
#[command(name = "chatgate")]
#[command(about = "Route browser chat requests to LLM providers")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// JSON file with extra or overriding provider definitions
    #[arg(long = "providers-file", env = "CHATGATE_PROVIDERS_FILE", global = true)]
    pub providers_file: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
