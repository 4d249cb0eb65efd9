#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod catalog;
pub mod domain;
pub mod error;
pub mod forwarder;
pub mod gateway;
pub mod http;
pub mod providers;
pub mod transport;
pub mod validator;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use catalog::ModelCatalog;
pub use domain::{ChatRequest, ChatResult, Message};
pub use error::{GatewayError, GatewayResult};
pub use forwarder::ChatForwarder;
pub use gateway::ChatGateway;
pub use http::{ReqwestTransport, TransportConfig};
pub use providers::{
    DEFAULT_PROVIDER, ListingFormat, ProviderConfig, ProviderFileError, ProviderRegistry,
};
pub use transport::{
    Method, TransportError, UpstreamRequest, UpstreamResponse, UpstreamTransport,
};
pub use validator::ModelValidator;
