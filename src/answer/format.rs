//! Plain-text normalization for model answers.

/// Longest run of consecutive newlines kept in a formatted answer.
const MAX_NEWLINE_RUN: usize = 2;

/// Normalize answer text for display.
///
/// Converts CRLF line endings to LF, collapses runs of three or more
/// newlines into a single blank line and trims surrounding whitespace.
#[must_use]
pub fn format_answer(text: &str) -> String {
    let unix = text.replace("\r\n", "\n");
    let mut out = String::with_capacity(unix.len());
    let mut run = 0;

    for c in unix.chars() {
        if c == '\n' {
            run += 1;
            if run <= MAX_NEWLINE_RUN {
                out.push(c);
            }
        } else {
            run = 0;
            out.push(c);
        }
    }

    out.trim().to_string()
}
