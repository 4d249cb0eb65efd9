//! Command handlers.

pub mod providers;
pub mod serve;

use std::path::Path;

use anyhow::{Context, Result};
use chatgate_core::ProviderRegistry;

/// Built-in providers, extended by `providers_file` when given.
pub fn load_registry(providers_file: Option<&Path>) -> Result<ProviderRegistry> {
    let registry = ProviderRegistry::builtin();
    match providers_file {
        Some(path) => registry
            .extend_from_file(path)
            .with_context(|| format!("loading providers from {}", path.display())),
        None => Ok(registry),
    }
}
