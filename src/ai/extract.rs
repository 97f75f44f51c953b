//! Plain-text extraction from the provider envelope.

use super::GenerateContentResponse;

/// Extract the answer text from a model response.
///
/// Only the first candidate is used. Its part texts are joined in order with
/// no separator and the result is trimmed. Returns `None` when there is no
/// candidate, or the first candidate has no content or no parts.
#[must_use]
pub fn extract_text(response: &GenerateContentResponse) -> Option<String> {
    let parts = response
        .candidates
        .as_deref()?
        .first()?
        .content
        .as_ref()?
        .parts
        .as_deref()?;

    let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
    Some(text.trim().to_string())
}
