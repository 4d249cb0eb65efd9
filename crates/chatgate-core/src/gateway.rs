//! Gateway facade.
//!
//! Wires the registry, model catalog, validator and forwarder around a single
//! transport. Adapters hold one `ChatGateway` for the life of the process.

use std::sync::Arc;

use crate::catalog::ModelCatalog;
use crate::domain::{ChatRequest, ChatResult};
use crate::error::GatewayResult;
use crate::forwarder::ChatForwarder;
use crate::providers::ProviderRegistry;
use crate::transport::UpstreamTransport;
use crate::validator::ModelValidator;

pub struct ChatGateway {
    registry: Arc<ProviderRegistry>,
    catalog: Arc<ModelCatalog>,
    forwarder: ChatForwarder,
}

impl ChatGateway {
    pub fn new(registry: ProviderRegistry, transport: Arc<dyn UpstreamTransport>) -> Self {
        let registry = Arc::new(registry);
        let catalog = Arc::new(ModelCatalog::new(
            Arc::clone(&registry),
            Arc::clone(&transport),
        ));
        let validator = ModelValidator::new(Arc::clone(&catalog));
        let forwarder = ChatForwarder::new(Arc::clone(&registry), validator, transport);

        Self {
            registry,
            catalog,
            forwarder,
        }
    }

    /// Sorted, de-duplicated model ids for `provider` (empty if unknown).
    pub async fn list_models(&self, provider: &str, api_key: Option<&str>) -> Vec<String> {
        self.catalog.get_models(provider, api_key).await.to_vec()
    }

    /// Validate and forward one chat request.
    pub async fn chat(&self, request: &ChatRequest) -> GatewayResult<ChatResult> {
        self.forwarder.forward(request).await
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }
}
