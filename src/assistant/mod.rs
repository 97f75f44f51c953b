//! Prompt routing from question to shaped answer.

mod error;
mod router;

pub use error::AskError;
pub use router::PromptRouter;
