//! Colored terminal rendering of ask answers.
//!
//! Dispatch follows the shape of the JSON payload: a decoded DSA or SQL
//! answer, a STAR breakdown, a plain answer, then the raw fallback.

use owo_colors::OwoColorize;
use serde_json::Value;

/// Shown when the payload carries nothing renderable.
pub const NO_RESPONSE: &str = "No response from AI";

/// A titled block: colored heading line followed by its body.
fn panel(title: &str, body: &str) -> String {
    format!("{}\n{body}", title.cyan().bold())
}

fn field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn items(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .map(|item| item.as_str().map_or_else(|| item.to_string(), String::from))
                .collect()
        })
        .unwrap_or_default()
}

fn render_dsa(data: &Value) -> String {
    let explanation = &data["explanation"];
    let code = &data["code"];
    let complexity = &data["complexity"];

    let steps: Vec<String> = items(explanation, "algorithm")
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {step}", i + 1))
        .collect();
    let edge_cases: Vec<String> = items(explanation, "edgeCases")
        .iter()
        .map(|case| format!("- {case}"))
        .collect();
    let complexity = match complexity.as_str() {
        Some(summary) => summary.to_string(),
        None => format!(
            "{} {}\n{} {}",
            "Time:".bold(),
            field(complexity, "time"),
            "Space:".bold(),
            field(complexity, "space")
        ),
    };

    [
        panel("Approach", field(explanation, "approach")),
        panel("Algorithm", &steps.join("\n")),
        panel("Edge Cases", &edge_cases.join("\n")),
        panel(
            &format!("Code ({})", field(code, "language")),
            &field(code, "content").green().to_string(),
        ),
        panel("Complexity", &complexity),
    ]
    .join("\n\n")
}

fn render_sql(data: &Value) -> String {
    [
        panel("SQL Query", &field(data, "query").green().to_string()),
        panel("Explanation", field(data, "explanation")),
        panel("Complexity", field(data, "complexity")),
    ]
    .join("\n\n")
}

fn render_star(star: &Value) -> String {
    [
        ("Situation", "situation"),
        ("Task", "task"),
        ("Action", "action"),
        ("Result", "result"),
    ]
    .iter()
    .map(|(title, key)| panel(title, field(star, key)))
    .collect::<Vec<_>>()
    .join("\n\n")
}

/// Render an ask payload for the terminal.
#[must_use]
pub fn render_answer(data: &Value) -> String {
    let kind = field(data, "type");

    if kind == "dsa" && data.get("explanation").is_some_and(Value::is_object) {
        return render_dsa(data);
    }
    if kind == "sql" && !field(data, "query").is_empty() {
        return render_sql(data);
    }
    if let Some(star) = data.get("structured").filter(|s| s.is_object()) {
        return render_star(star);
    }

    let answer = field(data, "answer");
    if !answer.is_empty() {
        return answer.to_string();
    }

    let raw = field(data, "rawAnswer");
    if raw.is_empty() {
        NO_RESPONSE.dimmed().to_string()
    } else {
        raw.to_string()
    }
}

/// Print an ask payload to stdout.
pub fn print_answer(data: &Value) {
    println!("{}", render_answer(data));
}

/// Print an error line to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message.red());
}
