//! Per-provider model cache.
//!
//! Population is lazy: the first listing or validation call for a provider
//! fills its entry, either from the registry's static catalog or from a live
//! fetch of the provider's listing endpoint. A non-empty entry is never
//! replaced or expired. Failed or empty fetches are not cached, so the next
//! call retries.
//!
//! Concurrent first calls may each fetch; the first non-empty insert wins.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::{GatewayError, GatewayResult};
use crate::providers::{ProviderConfig, ProviderRegistry};
use crate::transport::{UpstreamRequest, UpstreamTransport};

/// Shared model cache, one entry per provider.
pub struct ModelCatalog {
    registry: Arc<ProviderRegistry>,
    transport: Arc<dyn UpstreamTransport>,
    entries: RwLock<HashMap<String, Arc<[String]>>>,
}

impl ModelCatalog {
    pub fn new(registry: Arc<ProviderRegistry>, transport: Arc<dyn UpstreamTransport>) -> Self {
        Self {
            registry,
            transport,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Sorted, de-duplicated model ids for `provider`.
    ///
    /// Empty means "cannot validate": unknown provider, no listing endpoint,
    /// or the listing fetch failed.
    pub async fn get_models(&self, provider: &str, api_key: Option<&str>) -> Arc<[String]> {
        if let Some(models) = self.cached(provider).await {
            return models;
        }

        if let Some(models) = self.registry.static_models(provider) {
            return self.populate(provider, models.to_vec()).await;
        }

        let Ok(config) = self.registry.lookup(provider) else {
            debug!(provider, "No catalog for unknown provider");
            return empty();
        };

        if config.models_url.is_none() {
            debug!(provider, "Provider has no listing endpoint");
            return empty();
        }

        match self.fetch_listing(config, api_key).await {
            Ok(models) => self.populate(provider, models).await,
            Err(e) => {
                warn!(provider, error = %e, "Model listing unavailable; validation will fail open");
                empty()
            }
        }
    }

    /// The cached entry for `provider`, without triggering population.
    pub async fn cached(&self, provider: &str) -> Option<Arc<[String]>> {
        self.entries.read().await.get(provider).cloned()
    }

    /// Insert `models` unless an entry already exists; return the winning entry.
    async fn populate(&self, provider: &str, mut models: Vec<String>) -> Arc<[String]> {
        models.sort();
        models.dedup();

        if models.is_empty() {
            return empty();
        }

        let mut entries = self.entries.write().await;
        let entry = entries
            .entry(provider.to_string())
            .or_insert_with(|| {
                info!(provider, count = models.len(), "Cached model list");
                Arc::from(models)
            });
        Arc::clone(entry)
    }

    async fn fetch_listing(
        &self,
        config: &ProviderConfig,
        api_key: Option<&str>,
    ) -> GatewayResult<Vec<String>> {
        let failed = |reason: String| GatewayError::ListingFetchFailed {
            provider: config.name.clone(),
            reason,
        };

        let url = config
            .models_url
            .as_deref()
            .ok_or_else(|| failed("no listing endpoint".to_string()))?;

        let mut request = UpstreamRequest::get(url);
        if config.requires_auth
            && let Some(key) = api_key.filter(|k| !k.is_empty())
        {
            request = request.bearer(key);
        }

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| failed(e.to_string()))?;

        if !response.is_success() {
            return Err(failed(format!(
                "status {}: {}",
                response.status, response.body
            )));
        }

        let body: Value =
            serde_json::from_str(&response.body).map_err(|e| failed(e.to_string()))?;

        config
            .listing
            .parse_ids(&body)
            .ok_or_else(|| failed(format!("unexpected listing shape for {:?}", config.listing)))
    }
}

fn empty() -> Arc<[String]> {
    Arc::from(Vec::<String>::new())
}
