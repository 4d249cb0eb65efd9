//! Shared helpers for front door integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use chatgate_axum::{CorsConfig, ServerConfig, bootstrap_with_transport, create_router};
use chatgate_core::testing::FakeTransport;

pub const OPENROUTER_MODELS: &str = "openrouter.ai/api/v1/models";
pub const OPENROUTER_CHAT: &str = "openrouter.ai/api/v1/chat/completions";
pub const DEEPSEEK_CHAT: &str = "api.deepseek.com/chat/completions";

/// A successful chat completion body.
pub fn completion(text: &str) -> Value {
    json!({
        "id": "gen-1",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": text}}]
    })
}

/// Router over the built-in providers, answered by `transport`.
pub fn router(transport: &Arc<FakeTransport>) -> Router {
    let config = ServerConfig::with_defaults();
    let ctx = bootstrap_with_transport(&config, transport.clone());
    create_router(ctx, &CorsConfig::AllowAll)
}

/// Send one request and return the status and JSON body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn get_models(provider: Option<&str>, key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/models");
    if let Some(provider) = provider {
        builder = builder.header("X-Provider", provider);
    }
    if let Some(key) = key {
        builder = builder.header("Authorization", format!("Bearer {key}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_chat(provider: Option<&str>, key: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/chat")
        .header("Content-Type", "application/json");
    if let Some(provider) = provider {
        builder = builder.header("X-Provider", provider);
    }
    if let Some(key) = key {
        builder = builder.header("Authorization", format!("Bearer {key}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}
