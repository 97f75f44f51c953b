//! Answer type tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of answer requested for a question.
///
/// Parsing is lenient: anything that is not one of the four known tags
/// falls back to [`AnswerKind::Behavioral`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKind {
    /// Data structures and algorithms, answered as JSON.
    Dsa,
    /// SQL query, answered as JSON.
    Sql,
    /// Technical concept explanation in plain text.
    Tech,
    /// Behavioral question answered with the STAR method.
    #[default]
    Behavioral,
}

impl AnswerKind {
    /// All kinds, in display order.
    pub const ALL: [Self; 4] = [Self::Dsa, Self::Sql, Self::Tech, Self::Behavioral];

    /// Resolve a request tag, falling back to behavioral for unknown values.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "dsa" => Self::Dsa,
            "sql" => Self::Sql,
            "tech" => Self::Tech,
            _ => Self::Behavioral,
        }
    }

    /// The wire tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dsa => "dsa",
            Self::Sql => "sql",
            Self::Tech => "tech",
            Self::Behavioral => "behavioral",
        }
    }

    /// Whether the model is asked to answer with a JSON document.
    #[must_use]
    pub const fn expects_json(self) -> bool {
        matches!(self, Self::Dsa | Self::Sql)
    }
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
