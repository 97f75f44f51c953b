//! Gemini REST provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::AiConfig;

use super::types::ApiErrorEnvelope;
use super::{GenerateContentRequest, GenerateContentResponse, ModelError, ModelProvider};

/// Header carrying the Gemini API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Build an HTTP client with proper timeout configuration.
fn build_http_client(connect: Duration, request: Duration) -> Result<Client, ModelError> {
    Client::builder()
        .connect_timeout(connect)
        .timeout(request)
        .build()
        .map_err(|e| ModelError::ClientBuild(e.to_string()))
}

/// Build the `generateContent` URL for a model.
fn endpoint_url(base_url: &str, model: &str) -> Result<Url, ModelError> {
    let raw = format!(
        "{}/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        model
    );
    Url::parse(&raw).map_err(|source| ModelError::InvalidEndpoint { url: raw, source })
}

/// Pull a readable message out of an error response body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| body.trim().to_string())
}

/// Body of an error response, or empty if it could not be read.
fn error_body<E: std::fmt::Display>(body: Result<String, E>) -> String {
    body.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Failed to read Gemini error response body");
        String::new()
    })
}

/// Gemini API provider.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: Client,
    endpoint: Url,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    /// Create a provider from configuration and an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidEndpoint` if the base URL and model do not
    /// form a valid URL, or `ModelError::ClientBuild` if the HTTP client
    /// cannot be created.
    pub fn new(config: &AiConfig, api_key: String) -> Result<Self, ModelError> {
        Ok(Self {
            client: build_http_client(config.connect_timeout(), config.request_timeout())?,
            endpoint: endpoint_url(&config.base_url, &config.model)?,
            api_key,
            model: config.model.clone(),
        })
    }

    /// Create a provider, reading the API key from `config.api_key_env`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::MissingApiKey` if the variable is unset or empty,
    /// plus the errors of [`GeminiProvider::new`].
    pub fn from_config(config: &AiConfig) -> Result<Self, ModelError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ModelError::MissingApiKey(config.api_key_env.clone()))?;
        Self::new(config, api_key)
    }

    /// The full `generateContent` URL this provider posts to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ModelProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<GenerateContentResponse, ModelError> {
        let body = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ModelError::Timeout
                } else {
                    ModelError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(|e| {
                if e.is_timeout() {
                    ModelError::Timeout
                } else {
                    ModelError::ParseError(e.to_string())
                }
            });
        }

        let text = error_body(response.text().await);
        tracing::debug!(status = status.as_u16(), body = %text, "Gemini returned an error status");
        Err(ModelError::Api {
            status: status.as_u16(),
            message: api_error_message(&text),
        })
    }

    fn model(&self) -> &str {
        &self.model
    }
}
