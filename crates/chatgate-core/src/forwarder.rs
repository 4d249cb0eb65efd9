//! Chat forwarding.
//!
//! Resolves the provider, checks credentials and the model id, builds the
//! provider-specific request and relays the upstream result. The upstream body
//! is returned as parsed JSON without any normalization across providers.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info};

use crate::domain::{ChatRequest, ChatResult, Message};
use crate::error::{GatewayError, GatewayResult};
use crate::providers::{ProviderConfig, ProviderRegistry};
use crate::transport::{UpstreamRequest, UpstreamTransport};
use crate::validator::ModelValidator;

/// Characters of message content shown in diagnostic logs.
const LOG_CONTENT_CHARS: usize = 100;

/// Characters of the API key shown in diagnostic logs.
const LOG_KEY_CHARS: usize = 6;

pub struct ChatForwarder {
    registry: Arc<ProviderRegistry>,
    validator: ModelValidator,
    transport: Arc<dyn UpstreamTransport>,
}

impl ChatForwarder {
    pub fn new(
        registry: Arc<ProviderRegistry>,
        validator: ModelValidator,
        transport: Arc<dyn UpstreamTransport>,
    ) -> Self {
        Self {
            registry,
            validator,
            transport,
        }
    }

    /// Forward `request` to its provider and return the provider's JSON body.
    pub async fn forward(&self, request: &ChatRequest) -> GatewayResult<ChatResult> {
        let config = self.registry.lookup(&request.provider)?;

        log_request(request);

        let api_key = request.api_key.as_deref();
        if config.requires_auth && api_key.is_none() {
            return Err(GatewayError::MissingCredential {
                provider: config.name.clone(),
            });
        }

        if !self
            .validator
            .is_valid(&config.name, &request.model, api_key)
            .await
        {
            return Err(GatewayError::InvalidModel {
                provider: config.name.clone(),
                model: request.model.clone(),
            });
        }

        let upstream = build_upstream_request(config, request);

        info!(
            provider = %config.name,
            model = %request.model,
            url = %config.chat_url,
            "Forwarding chat request"
        );

        let response = self.transport.send(upstream).await.map_err(|e| {
            error!(provider = %config.name, error = %e, "Upstream unreachable");
            GatewayError::UpstreamUnreachable(e.to_string())
        })?;

        info!(provider = %config.name, status = response.status, "Upstream responded");

        if !response.is_success() {
            error!(
                provider = %config.name,
                status = response.status,
                body = %response.body,
                "Upstream returned an error"
            );
            return Err(GatewayError::UpstreamError {
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str::<Value>(&response.body).map_err(|e| {
            error!(provider = %config.name, error = %e, "Upstream body is not JSON");
            GatewayError::UpstreamError {
                status: response.status,
                body: format!("Invalid JSON from upstream: {e}"),
            }
        })
    }
}

/// Build the outbound chat call for `config`.
///
/// Messages go out exactly as received.
pub fn build_upstream_request(config: &ProviderConfig, request: &ChatRequest) -> UpstreamRequest {
    let mut upstream = UpstreamRequest::post_json(&config.chat_url, request.upstream_body());

    if config.requires_auth
        && let Some(key) = request.api_key.as_deref()
    {
        upstream = upstream.bearer(key);
    }

    for (name, value) in &config.extra_headers {
        upstream = upstream.header(name, value);
    }

    upstream
}

fn log_request(request: &ChatRequest) {
    info!(
        provider = %request.provider,
        model = %request.model,
        messages = request.messages.len(),
        api_key = %mask_key(request.api_key.as_deref()),
        "Received chat request"
    );
    for (i, message) in request.messages.iter().enumerate() {
        debug!(
            index = i,
            role = %message.role,
            name = message.name.as_deref().unwrap_or(""),
            content = %preview(message),
            "Chat message"
        );
    }
}

fn preview(message: &Message) -> String {
    let text = message.content_text();
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(LOG_CONTENT_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

fn mask_key(key: Option<&str>) -> String {
    key.map_or_else(
        || "<none>".to_string(),
        |k| format!("{}...", k.chars().take(LOG_KEY_CHARS).collect::<String>()),
    )
}
