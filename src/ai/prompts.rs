//! Instruction prompts for each answer kind.

use crate::answer::AnswerKind;

/// Prompt prefix for data-structures/algorithms questions.
pub const DSA_PROMPT: &str = r#"
Respond ONLY in valid JSON.
Do NOT include markdown or explanations outside JSON.

Required JSON format:
{
  "type": "dsa",
  "explanation": {
    "approach": "string",
    "algorithm": ["step 1", "step 2"],
    "edgeCases": ["case 1", "case 2"]
  },
  "code": {
    "language": "javascript",
    "content": "string"
  },
  "complexity": {
    "time": "string",
    "space": "string"
  }
}

Problem:
"#;

/// Prompt prefix for SQL questions.
pub const SQL_PROMPT: &str = r#"
Respond ONLY in valid JSON.

Required JSON format:
{
  "type": "sql",
  "query": "string",
  "explanation": "string",
  "complexity": "string"
}

Problem:
"#;

/// Prompt prefix for technical concept questions.
pub const TECH_PROMPT: &str = r"
You are a technical interviewer.
Explain the concept clearly and concisely.
Use simple language and examples if helpful.

Question:
";

/// Prompt prefix for behavioral questions.
pub const BEHAVIORAL_PROMPT: &str = r"
You are an interview coach.
Always respond using the STAR method in plain text.

Question:
";

/// Build the model prompt for a question.
///
/// Pure and deterministic: the same kind and question always produce the
/// same text. The question is appended verbatim after the template.
#[must_use]
pub fn build_prompt(kind: AnswerKind, question: &str) -> String {
    let template = match kind {
        AnswerKind::Dsa => DSA_PROMPT,
        AnswerKind::Sql => SQL_PROMPT,
        AnswerKind::Tech => TECH_PROMPT,
        AnswerKind::Behavioral => BEHAVIORAL_PROMPT,
    };
    format!("{template}{question}\n")
}
