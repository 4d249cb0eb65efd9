//! Upstream transport port.
//!
//! The catalog and the forwarder talk to providers only through
//! [`UpstreamTransport`], so tests can swap in canned responses and the
//! production build uses [`crate::http::ReqwestTransport`].

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// HTTP method of an upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully-built upstream request.
#[derive(Clone, PartialEq)]
pub struct UpstreamRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl UpstreamRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post_json(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
        }
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {token}"))
    }

    /// Case-insensitive header lookup.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

// Hand-written so credentials never end up in logs.
impl fmt::Debug for UpstreamRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(k, v)| {
                if k.eq_ignore_ascii_case("authorization") {
                    (k.as_str(), "<redacted>")
                } else {
                    (k.as_str(), v.as_str())
                }
            })
            .collect();
        f.debug_struct("UpstreamRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body", &self.body)
            .finish()
    }
}

/// Status and raw body of an upstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, body.to_string())
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// The request never produced an HTTP response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("{0}")]
    Other(String),
}

/// Sends requests to provider endpoints.
#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    /// Send `request` and return whatever status the upstream answered with.
    ///
    /// Non-2xx statuses are NOT errors at this layer.
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_authorization() {
        let req = UpstreamRequest::get("https://example.test/models").bearer("sk-secret");
        let rendered = format!("{req:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let req = UpstreamRequest::post_json("https://example.test", serde_json::json!({}))
            .bearer("k");
        assert_eq!(req.header_value("authorization"), Some("Bearer k"));
        assert_eq!(req.header_value("content-type"), Some("application/json"));
        assert_eq!(req.header_value("x-missing"), None);
    }

    #[test]
    fn test_success_range() {
        assert!(UpstreamResponse::new(200, "").is_success());
        assert!(UpstreamResponse::new(204, "").is_success());
        assert!(!UpstreamResponse::new(302, "").is_success());
        assert!(!UpstreamResponse::new(500, "").is_success());
    }
}
