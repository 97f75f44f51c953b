//! Model provider seam and its error type.

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use super::GenerateContentResponse;

/// Errors from model provider operations.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("API key not configured: export {0} in the server's environment (.env files are not read)")]
    MissingApiKey(String),
    #[error("Invalid model endpoint {url}: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
    #[error("Model request failed: {0}")]
    RequestFailed(String),
    #[error("Model request timed out")]
    Timeout,
    #[error("Model API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Failed to parse model response: {0}")]
    ParseError(String),
}

impl ModelError {
    /// Whether the provider reported it is temporarily unavailable.
    ///
    /// This is the only condition the retry loop retries on.
    #[must_use]
    pub fn is_overloaded(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status == StatusCode::SERVICE_UNAVAILABLE.as_u16())
    }

    /// HTTP status reported by the provider, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A hosted generative model.
///
/// Implementations are stateless per call and shared across requests.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Send `prompt` as the only user content and return the raw envelope.
    async fn generate(&self, prompt: &str) -> Result<GenerateContentResponse, ModelError>;

    /// Model identifier used for every call.
    fn model(&self) -> &str;
}
