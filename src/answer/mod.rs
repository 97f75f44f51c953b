//! Answer kinds and post-processing of model text.

mod format;
mod kind;
mod shape;
mod star;

pub use format::format_answer;
pub use kind::AnswerKind;
pub use shape::{
    decode_structured, shape_answer, Decoded, ShapedAnswer, StructuredAnswer, RAW_ANSWER_KEY,
};
pub use star::{parse_star, StarRecord, StarSection};
