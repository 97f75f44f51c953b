//! HTTP client for a running interview assist server.
//!
//! This is the terminal counterpart of the browser extension: it posts a
//! question to `/api/ai/ask` and returns the JSON payload untouched so the
//! caller can dispatch on its shape.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::answer::AnswerKind;
use crate::server::{AskRequest, ErrorResponse, ASK_PATH};

/// Default server the client talks to.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Default timeout for a whole ask round trip.
///
/// Long enough to cover the server's own model timeout plus retries.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

/// Errors from the ask client.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("Question is empty")]
    EmptyQuestion,

    #[error("Invalid server URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Request to server failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The server answered with an error status.
    #[error("Server returned HTTP {status}: {message}")]
    Server { status: u16, message: String },
}

/// Client for `POST /api/ai/ask`.
#[derive(Debug, Clone)]
pub struct AskClient {
    http: Client,
    endpoint: Url,
}

impl AskClient {
    /// Create a client for the server at `base`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` if the ask endpoint cannot be formed
    /// from `base`, or `ClientError::RequestFailed` if the HTTP client cannot
    /// be built.
    pub fn new(base: &Url) -> Result<Self, ClientError> {
        let endpoint = base.join(ASK_PATH).map_err(|source| ClientError::InvalidUrl {
            url: base.to_string(),
            source,
        })?;
        let http = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self { http, endpoint })
    }

    /// The full ask endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Ask a question and return the server's JSON answer.
    ///
    /// The question is trimmed; an empty question is rejected locally
    /// without contacting the server.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::EmptyQuestion` for a blank question,
    /// `ClientError::Server` with the server's error message for non-2xx
    /// responses and `ClientError::RequestFailed` for transport failures.
    pub async fn ask(&self, question: &str, kind: AnswerKind) -> Result<Value, ClientError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ClientError::EmptyQuestion);
        }

        let request = AskRequest {
            question: question.to_string(),
            kind,
        };

        tracing::debug!(endpoint = %self.endpoint, %kind, "Posting question");
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await.unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Failed to read server error body");
            String::new()
        });
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|body| body.error)
            .unwrap_or(text);
        Err(ClientError::Server {
            status: status.as_u16(),
            message,
        })
    }
}
