//! Axum-specific error types and mappings.
//!
//! Maps `GatewayError` to HTTP status codes and JSON response bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chatgate_core::GatewayError;
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request body could not be parsed.
    #[error("Invalid request body: {0}")]
    BadRequest(String),

    /// Routing, validation or upstream failure from the core.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
    /// Stable error type discriminant for client-side handling
    #[serde(rename = "type")]
    error_type: &'static str,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "InvalidRequest"),
            Self::Gateway(err) => (
                StatusCode::from_u16(err.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                err.kind(),
            ),
        };

        let body = ErrorBody {
            error: self.to_string(),
            status: status.as_u16(),
            error_type,
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_status_mapping() {
        let response = HttpError::from(GatewayError::InvalidModel {
            provider: "openrouter".into(),
            model: "x/y".into(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = HttpError::from(GatewayError::UpstreamError {
            status: 429,
            body: "slow down".into(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_bad_request_status() {
        let response = HttpError::BadRequest("expected value".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
