//! Error types for the gateway core.
//!
//! `GatewayError` is the single error type surfaced by the registry, the model
//! catalog and the chat forwarder. Adapters map it to their own transport
//! (HTTP status + JSON body) using [`GatewayError::status_code`] and
//! [`GatewayError::kind`].

use thiserror::Error;

/// Result type alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors produced while routing, validating or forwarding a chat request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The provider name is not registered.
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// The provider requires an API key and none was supplied.
    #[error("No API key provided for provider '{provider}'")]
    MissingCredential {
        /// Provider that requires the key
        provider: String,
    },

    /// The model id is not in the provider's known model list.
    #[error("Invalid model id: {model}")]
    InvalidModel {
        /// Provider the model was checked against
        provider: String,
        /// The rejected model id
        model: String,
    },

    /// The upstream could not be reached (timeout, DNS, connection refused).
    #[error("Failed to reach upstream: {0}")]
    UpstreamUnreachable(String),

    /// The upstream answered with a failure, or with a body we could not parse.
    #[error("{body}")]
    UpstreamError {
        /// Upstream HTTP status (informational only, never forwarded)
        status: u16,
        /// Upstream response body, verbatim
        body: String,
    },

    /// Fetching a provider's model listing failed.
    ///
    /// Never surfaced to callers: the catalog logs it and degrades to an
    /// empty list, which makes validation fail open.
    #[error("Failed to fetch model list for '{provider}': {reason}")]
    ListingFetchFailed {
        /// Provider whose listing failed
        provider: String,
        /// What went wrong
        reason: String,
    },
}

impl GatewayError {
    /// HTTP status code a caller should see for this error.
    ///
    /// Caller input problems are 400. Every upstream-side failure is 500,
    /// regardless of the status the upstream itself reported.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::UnsupportedProvider(_)
            | Self::MissingCredential { .. }
            | Self::InvalidModel { .. } => 400,
            Self::UpstreamUnreachable(_)
            | Self::UpstreamError { .. }
            | Self::ListingFetchFailed { .. } => 500,
        }
    }

    /// Stable discriminant for client-side handling.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedProvider(_) => "UnsupportedProvider",
            Self::MissingCredential { .. } => "MissingCredential",
            Self::InvalidModel { .. } => "InvalidModel",
            Self::UpstreamUnreachable(_) => "UpstreamUnreachable",
            Self::UpstreamError { .. } => "UpstreamError",
            Self::ListingFetchFailed { .. } => "ListingFetchFailed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_errors_are_400() {
        assert_eq!(GatewayError::UnsupportedProvider("x".into()).status_code(), 400);
        assert_eq!(
            GatewayError::MissingCredential {
                provider: "deepseek".into()
            }
            .status_code(),
            400
        );
        assert_eq!(
            GatewayError::InvalidModel {
                provider: "openrouter".into(),
                model: "nope".into()
            }
            .status_code(),
            400
        );
    }

    #[test]
    fn test_upstream_errors_are_500_even_for_upstream_4xx() {
        let err = GatewayError::UpstreamError {
            status: 401,
            body: r#"{"error":"unauthorized"}"#.into(),
        };
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.kind(), "UpstreamError");
        assert_eq!(err.to_string(), r#"{"error":"unauthorized"}"#);

        assert_eq!(
            GatewayError::UpstreamUnreachable("connection refused".into()).status_code(),
            500
        );
    }

    #[test]
    fn test_invalid_model_message_names_model() {
        let err = GatewayError::InvalidModel {
            provider: "openrouter".into(),
            model: "nonexistent/model".into(),
        };
        assert!(err.to_string().contains("nonexistent/model"));
        assert_eq!(err.kind(), "InvalidModel");
    }
}
