//! Providers command handler.

use std::fmt::Write;

use chatgate_core::{ProviderConfig, ProviderRegistry};

/// Render the provider table.
pub fn render(registry: &ProviderRegistry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<12} {:<6} {:<10} CHAT ENDPOINT", "NAME", "AUTH", "MODELS");
    for provider in registry.iter() {
        let _ = writeln!(
            out,
            "{:<12} {:<6} {:<10} {}",
            provider.name,
            if provider.requires_auth { "yes" } else { "no" },
            catalog_source(provider),
            provider.chat_url
        );
    }
    out
}

fn catalog_source(provider: &ProviderConfig) -> &'static str {
    if provider.static_models.as_ref().is_some_and(|m| !m.is_empty()) {
        "static"
    } else if provider.models_url.is_some() {
        "live"
    } else {
        "any"
    }
}

/// Execute the providers command.
pub fn execute(registry: &ProviderRegistry) {
    print!("{}", render(registry));
}
