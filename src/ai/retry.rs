//! Bounded retry for overloaded model calls.

use std::time::Duration;

use async_trait::async_trait;

use super::{GenerateContentResponse, ModelError, ModelProvider};

/// Default number of retries after the first overloaded call.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Default fixed delay between attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Retry policy: a fixed number of extra attempts with a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Additional attempts after the first overloaded call.
    pub max_retries: u32,
    /// Delay before each additional attempt.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            delay: DEFAULT_RETRY_DELAY,
        }
    }
}

/// Source of the wait between attempts.
#[async_trait]
pub trait Delay: Send + Sync {
    /// Wait for `duration`.
    async fn wait(&self, duration: Duration);
}

/// Real delay backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Call the provider, retrying only while it reports overload.
///
/// Makes at most `policy.max_retries + 1` calls, waiting `policy.delay`
/// before each retry.
///
/// # Errors
///
/// Returns the provider error unchanged when it is not an overload, or the
/// last overload error once retries are exhausted.
pub async fn generate_with_retry(
    provider: &dyn ModelProvider,
    prompt: &str,
    policy: &RetryPolicy,
    delay: &dyn Delay,
) -> Result<GenerateContentResponse, ModelError> {
    let mut retries_left = policy.max_retries;
    loop {
        match provider.generate(prompt).await {
            Ok(response) => return Ok(response),
            Err(e) if e.is_overloaded() && retries_left > 0 => {
                retries_left -= 1;
                tracing::warn!(
                    model = provider.model(),
                    retries_left,
                    delay_ms = u64::try_from(policy.delay.as_millis()).unwrap_or(u64::MAX),
                    "Model overloaded, retrying"
                );
                delay.wait(policy.delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}
