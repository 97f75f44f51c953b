//! Outcomes of an ask that did not produce an answer.

use crate::ai::ModelError;

/// Errors from [`super::PromptRouter::ask`].
///
/// These are signals, not user-facing messages; the HTTP layer decides the
/// status code and text.
#[derive(thiserror::Error, Debug)]
pub enum AskError {
    /// The model answered but no text could be extracted.
    #[error("Model response contained no text")]
    EmptyResponse,

    /// The model stayed overloaded through every retry.
    #[error("Model overloaded after retries: {0}")]
    ModelBusy(#[source] ModelError),

    /// Any other model invocation failure.
    #[error("Model invocation failed: {0}")]
    Failed(#[source] ModelError),
}

impl From<ModelError> for AskError {
    fn from(err: ModelError) -> Self {
        if err.is_overloaded() {
            Self::ModelBusy(err)
        } else {
            Self::Failed(err)
        }
    }
}
