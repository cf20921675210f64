//! Client SDK for the idea generation service
//!
//! The generation service runs a crew of role-playing agents over a submitted
//! idea and answers with the agents' conversation plus a synthesized final
//! document. This crate owns the wire format of that exchange and hides the
//! transport behind the [`GenerationClient`] trait, so the terminal front end
//! can be driven by the real HTTP client or by an in-memory double in tests.

use async_trait::async_trait;
use std::sync::Arc;

pub mod error;
pub mod http_client;
pub mod types;

pub use error::ClientError;
pub use types::*;

/// GenerationClient trait for talking to the generation service
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Submit one idea and wait for the complete result
    async fn generate(&self, request: GenerateRequest) -> Result<GenerationResult, ClientError>;

    /// Check that the service is reachable
    async fn health_check(&self) -> Result<(), ClientError>;
}

pub type GenerationClientRef = Arc<dyn GenerationClient>;

/// Factory for creating GenerationClient instances
pub struct GenerationClientFactory;

impl GenerationClientFactory {
    /// Create an HTTP client for a remote service
    pub fn create_http_client(base_url: String) -> GenerationClientRef {
        Arc::new(http_client::HttpGenerationClient::new(base_url))
    }
}
