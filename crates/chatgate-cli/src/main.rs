//! CLI entry point - the composition root.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chatgate_cli::{Cli, Commands, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    let registry = handlers::load_registry(cli.providers_file.as_deref())?;

    match command {
        Commands::Serve(args) => handlers::serve::execute(&args, registry).await?,
        Commands::Providers => handlers::providers::execute(&registry),
    }

    Ok(())
}
