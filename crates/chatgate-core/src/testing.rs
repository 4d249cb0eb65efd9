//! Test doubles for adapters.
//!
//! Enabled with the `test-utils` feature.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::transport::{TransportError, UpstreamRequest, UpstreamResponse, UpstreamTransport};

/// Transport that answers from canned responses and records every request.
///
/// Responses are matched by URL substring, first registration wins. Unmatched
/// URLs fail with a connection error.
#[derive(Default)]
pub struct FakeTransport {
    routes: Vec<(String, Result<UpstreamResponse, TransportError>)>,
    seen: Mutex<Vec<UpstreamRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer URLs containing `url_contains` with `status` and a JSON body.
    #[must_use]
    pub fn with_json(self, url_contains: &str, status: u16, body: &Value) -> Self {
        self.with_response(url_contains, Ok(UpstreamResponse::json(status, body)))
    }

    #[must_use]
    pub fn with_response(
        mut self,
        url_contains: &str,
        response: Result<UpstreamResponse, TransportError>,
    ) -> Self {
        self.routes.push((url_contains.to_string(), response));
        self
    }

    /// Every request sent so far, in order.
    pub fn requests(&self) -> Vec<UpstreamRequest> {
        self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }

    /// Number of requests whose URL contains `url_contains`.
    pub fn count(&self, url_contains: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.url.contains(url_contains))
            .count()
    }
}

#[async_trait]
impl UpstreamTransport for FakeTransport {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, TransportError> {
        let response = self
            .routes
            .iter()
            .find(|(pattern, _)| request.url.contains(pattern.as_str()))
            .map_or_else(
                || Err(TransportError::Connect(format!("no route for {}", request.url))),
                |(_, response)| response.clone(),
            );

        if let Ok(mut seen) = self.seen.lock() {
            seen.push(request);
        }
        response
    }
}
