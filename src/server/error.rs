//! Server error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::api::ErrorResponse;
use crate::ai::ModelError;
use crate::assistant::AskError;
use crate::config::ConfigError;

/// Errors returned to HTTP clients.
///
/// Each variant maps to a fixed status and message; no internal detail is
/// exposed.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Invalid question")]
    InvalidQuestion,

    #[error("AI response empty")]
    EmptyResponse,

    #[error("AI model busy. Try again shortly.")]
    ModelBusy,

    #[error("Failed to fetch response")]
    Internal,
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidQuestion => StatusCode::BAD_REQUEST,
            Self::EmptyResponse | Self::ModelBusy => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AskError> for ApiError {
    fn from(err: AskError) -> Self {
        match err {
            AskError::EmptyResponse => {
                tracing::warn!("Model returned an empty answer");
                Self::EmptyResponse
            }
            AskError::ModelBusy(source) => {
                tracing::error!(error = %source, "Model still overloaded after retries");
                Self::ModelBusy
            }
            AskError::Failed(source) => {
                tracing::error!(error = %source, detail = ?source, "Model invocation failed");
                Self::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Errors that can occur while starting or running the server.
#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    /// Failed to bind to address.
    #[error("Failed to bind to {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Server error.
    #[error("Server error: {0}")]
    ServeError(#[source] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Model(#[from] ModelError),
}
