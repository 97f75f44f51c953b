//! Prompt router: question in, shaped answer out.

use std::sync::Arc;

use crate::ai::{
    build_prompt, extract_text, generate_with_retry, Delay, ModelProvider, RetryPolicy, TokioDelay,
};
use crate::answer::{shape_answer, AnswerKind, ShapedAnswer};

use super::AskError;

/// Routes questions to the model and shapes the answers.
///
/// Holds no per-request state; one instance serves all requests.
#[derive(Clone)]
pub struct PromptRouter {
    provider: Arc<dyn ModelProvider>,
    policy: RetryPolicy,
    delay: Arc<dyn Delay>,
}

impl std::fmt::Debug for PromptRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptRouter")
            .field("model", &self.provider.model())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl PromptRouter {
    /// Create a router with the default retry policy and a real delay.
    #[must_use]
    pub fn new(provider: Arc<dyn ModelProvider>) -> Self {
        Self {
            provider,
            policy: RetryPolicy::default(),
            delay: Arc::new(TokioDelay),
        }
    }

    /// Set the retry policy (builder pattern).
    #[must_use]
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the delay used between retries (builder pattern).
    #[must_use]
    pub fn with_delay(mut self, delay: Arc<dyn Delay>) -> Self {
        self.delay = delay;
        self
    }

    /// Model identifier of the underlying provider.
    #[must_use]
    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// The active retry policy.
    #[must_use]
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Answer a question of the given kind.
    ///
    /// The caller is responsible for rejecting empty questions.
    ///
    /// # Errors
    ///
    /// Returns `AskError::ModelBusy` when the model stays overloaded through
    /// every retry, `AskError::Failed` for any other model failure and
    /// `AskError::EmptyResponse` when the model returned no text.
    pub async fn ask(&self, question: &str, kind: AnswerKind) -> Result<ShapedAnswer, AskError> {
        let prompt = build_prompt(kind, question);
        tracing::debug!(%kind, prompt_len = prompt.len(), "Built prompt");

        let response =
            generate_with_retry(self.provider.as_ref(), &prompt, &self.policy, self.delay.as_ref())
                .await?;

        let text = extract_text(&response)
            .filter(|text| !text.is_empty())
            .ok_or(AskError::EmptyResponse)?;

        tracing::debug!(%kind, answer_len = text.len(), "Shaping model answer");
        Ok(shape_answer(kind, &text))
    }
}
