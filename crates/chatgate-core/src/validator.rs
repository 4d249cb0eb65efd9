//! Model id validation with a fail-open policy.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::ModelCatalog;

/// Decides whether a (provider, model) pair may be forwarded.
///
/// If the provider's model list is empty (unknown provider, no listing
/// endpoint, or the listing fetch failed) every model id is accepted.
/// Otherwise the id must be in the list.
#[derive(Clone)]
pub struct ModelValidator {
    catalog: Arc<ModelCatalog>,
}

impl ModelValidator {
    pub fn new(catalog: Arc<ModelCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn is_valid(&self, provider: &str, model: &str, api_key: Option<&str>) -> bool {
        let models = self.catalog.get_models(provider, api_key).await;
        if models.is_empty() {
            debug!(provider, model, "No model list available; accepting model");
            return true;
        }
        models.binary_search_by(|m| m.as_str().cmp(model)).is_ok()
    }
}
