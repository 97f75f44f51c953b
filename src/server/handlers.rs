//! HTTP handlers for the ask API.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tracing::Instrument;
use uuid::Uuid;

use super::api::{AskRequest, ROOT_MESSAGE};
use super::ApiError;
use crate::answer::ShapedAnswer;
use crate::assistant::PromptRouter;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Router answering questions.
    pub router: Arc<PromptRouter>,
}

impl AppState {
    /// Create new app state.
    #[must_use]
    pub fn new(router: PromptRouter) -> Self {
        Self {
            router: Arc::new(router),
        }
    }
}

/// GET / - Liveness text.
pub async fn get_root() -> &'static str {
    ROOT_MESSAGE
}

/// POST /api/ai/ask - Answer an interview question.
///
/// # Errors
///
/// Returns an [`ApiError`] carrying the status and message for the client.
pub async fn post_ask(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ShapedAnswer>, ApiError> {
    let request_id = Uuid::new_v4();

    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(%request_id, error = %rejection, "Rejected unreadable ask body");
        ApiError::InvalidQuestion
    })?;
    let request = AskRequest::from_json(&body)?;

    let span = tracing::info_span!("ask", %request_id, kind = %request.kind);
    async move {
        tracing::info!(question_len = request.question.len(), "Answering question");
        let answer = state.router.ask(&request.question, request.kind).await?;
        tracing::info!("Answer ready");
        Ok::<_, ApiError>(Json(answer))
    }
    .instrument(span)
    .await
}
