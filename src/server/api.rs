//! Request and error body types for the HTTP API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ApiError;
use crate::answer::AnswerKind;

/// Text served on `GET /`.
pub const ROOT_MESSAGE: &str = "AI Interview Helper Backend Running";

/// A validated request for `POST /api/ai/ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskRequest {
    /// The interview question, never empty.
    pub question: String,
    /// Requested answer kind.
    #[serde(rename = "type")]
    pub kind: AnswerKind,
}

impl AskRequest {
    /// Validate a decoded JSON body.
    ///
    /// `question` must be a non-empty string. `type` is optional; a missing,
    /// non-string or unknown value selects the behavioral kind.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidQuestion` if the question is missing, not a
    /// string or empty.
    pub fn from_json(body: &Value) -> Result<Self, ApiError> {
        let question = body
            .get("question")
            .and_then(Value::as_str)
            .filter(|q| !q.is_empty())
            .ok_or(ApiError::InvalidQuestion)?;

        let kind = body
            .get("type")
            .and_then(Value::as_str)
            .map(AnswerKind::from_tag)
            .unwrap_or_default();

        Ok(Self {
            question: question.to_string(),
            kind,
        })
    }
}

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
