//! Model client: prompts, provider access, retry and text extraction.

mod extract;
mod gemini;
mod prompts;
mod provider;
mod retry;
mod types;

pub use extract::extract_text;
pub use gemini::GeminiProvider;
pub use prompts::{build_prompt, BEHAVIORAL_PROMPT, DSA_PROMPT, SQL_PROMPT, TECH_PROMPT};
pub use provider::{ModelError, ModelProvider};
pub use retry::{
    generate_with_retry, Delay, RetryPolicy, TokioDelay, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY,
};
pub use types::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};
