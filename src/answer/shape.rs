//! Response shaping for each answer kind.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{format_answer, parse_star, AnswerKind, StarRecord};

/// Result of a best-effort structured decode.
///
/// The model does not always honor the JSON-only instruction, so a decode
/// failure is a normal outcome carrying the original text.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    /// The text decoded into the expected structure.
    Parsed(T),
    /// The text was not valid for the expected structure.
    Raw(String),
}

impl<T> Decoded<T> {
    /// Whether the decode succeeded.
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }
}

/// Key under which the unprocessed model text is attached.
pub const RAW_ANSWER_KEY: &str = "rawAnswer";

/// A decoded JSON answer with the model text attached under `rawAnswer`.
///
/// Fields are passed through exactly as the model produced them; nothing is
/// filled in or dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StructuredAnswer(Map<String, Value>);

impl StructuredAnswer {
    /// Attach `raw_answer` to a decoded object, replacing any `rawAnswer`
    /// the model supplied itself.
    #[must_use]
    pub fn new(mut fields: Map<String, Value>, raw_answer: &str) -> Self {
        fields.insert(
            RAW_ANSWER_KEY.to_string(),
            Value::String(raw_answer.to_string()),
        );
        Self(fields)
    }

    /// A field of the answer, `rawAnswer` included.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The model text the answer was decoded from.
    #[must_use]
    pub fn raw_answer(&self) -> &str {
        self.0
            .get(RAW_ANSWER_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// All fields, `rawAnswer` included.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// The success payload of an ask request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ShapedAnswer {
    /// Decoded `dsa` or `sql` answer.
    Structured(StructuredAnswer),
    /// `dsa` or `sql` answer that did not decode.
    Raw {
        #[serde(rename = "type")]
        kind: AnswerKind,
        #[serde(rename = "rawAnswer")]
        raw_answer: String,
    },
    /// Technical explanation.
    Plain { answer: String },
    /// Behavioral answer with its STAR breakdown.
    Star {
        answer: String,
        structured: StarRecord,
    },
}

/// Remove a single Markdown code fence wrapping the whole text, if any.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string (`json`, `sql`, ...) on the opening line.
    match body.split_once('\n') {
        Some((_, inner)) => inner.trim(),
        None => trimmed,
    }
}

/// Strictly decode `text` as JSON into `T`, degrading to the raw text.
///
/// Decoding into `Map<String, Value>` accepts only a JSON object.
#[must_use]
pub fn decode_structured<T: DeserializeOwned>(text: &str) -> Decoded<T> {
    match serde_json::from_str(strip_code_fence(text)) {
        Ok(value) => Decoded::Parsed(value),
        Err(e) => {
            tracing::debug!(error = %e, "Model answer is not the requested JSON, passing raw text");
            Decoded::Raw(text.to_string())
        }
    }
}

/// Shape extracted model text into the payload for `kind`.
///
/// For `dsa` and `sql`, a JSON object is returned as decoded with
/// `rawAnswer` added; any other text, including JSON that is not an object,
/// becomes `{type, rawAnswer}`.
#[must_use]
pub fn shape_answer(kind: AnswerKind, text: &str) -> ShapedAnswer {
    match kind {
        AnswerKind::Dsa | AnswerKind::Sql => match decode_structured::<Map<String, Value>>(text) {
            Decoded::Parsed(fields) => {
                ShapedAnswer::Structured(StructuredAnswer::new(fields, text))
            }
            Decoded::Raw(raw_answer) => ShapedAnswer::Raw { kind, raw_answer },
        },
        AnswerKind::Tech => ShapedAnswer::Plain {
            answer: format_answer(text),
        },
        AnswerKind::Behavioral => {
            let answer = format_answer(text);
            let structured = parse_star(&answer);
            ShapedAnswer::Star { answer, structured }
        }
    }
}
