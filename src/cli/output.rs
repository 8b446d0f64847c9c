//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::args::{OutputFormat, TextMetricsArgs};
use crate::error::Result;
use crate::scoring::keyword::KeywordCount;
use crate::scoring::readability::ReadabilityStats;
use crate::scoring::sentiment::SentimentLabel;

/// Result structure for word counting.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordCountResult {
    pub word_count: usize,
}

/// Result structure for sentiment scoring.
#[derive(Debug, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: f32,
    pub label: SentimentLabel,
}

/// Result structure for keyword extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordsResult {
    pub keywords: Vec<KeywordCount>,
}

/// Result structure for complexity scoring.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComplexityResult {
    pub complexity: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readability: Option<ReadabilityStats>,
}

/// Result structure for reading-time estimation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadingTimeResult {
    pub reading_time: u32,
    pub word_count: usize,
}

/// Render a result in the specified format.
pub fn render_result<T: Serialize>(
    message: &str,
    result: &T,
    args: &TextMetricsArgs,
) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => render_human(message, result, args),
        OutputFormat::Json => render_json(result, args),
    }
}

fn render_human<T: Serialize>(message: &str, result: &T, args: &TextMetricsArgs) -> Result<String> {
    let mut lines = Vec::new();
    if args.verbosity() > 1 {
        lines.push(message.to_string());
        lines.push(String::new());
    }

    let value = serde_json::to_value(result)?;
    match &value {
        Value::Object(obj) => {
            for (key, val) in obj {
                push_field(&mut lines, key, val, 0);
            }
        }
        _ => lines.push(format_value(&value)),
    }

    Ok(lines.join("\n"))
}

fn push_field(lines: &mut Vec<String>, key: &str, value: &Value, depth: usize) {
    let indent = "  ".repeat(depth);
    let label = humanize_key(key);

    match value {
        Value::Object(obj) => {
            lines.push(format!("{indent}{label}:"));
            for (k, v) in obj {
                push_field(lines, k, v, depth + 1);
            }
        }
        Value::Array(items) if items.iter().all(Value::is_object) && !items.is_empty() => {
            lines.push(format!("{indent}{label}:"));
            for item in items {
                lines.push(format!("{indent}  - {}", format_compact_object(item)));
            }
        }
        _ => lines.push(format!("{indent}{label}: {}", format_value(value))),
    }
}

/// "reading_time" -> "Reading time"
fn humanize_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Keyword counts print as "coding (3)"; other objects as "k=v" pairs.
fn format_compact_object(value: &Value) -> String {
    if let (Some(word), Some(count)) = (
        value.get("word").and_then(Value::as_str),
        value.get("count").and_then(Value::as_u64),
    ) {
        return format!("{word} ({count})");
    }

    match value.as_object() {
        Some(obj) => obj
            .iter()
            .map(|(k, v)| format!("{k}={}", format_value(v)))
            .collect::<Vec<_>>()
            .join(", "),
        None => format_value(value),
    }
}

/// Format a JSON value for display.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{f:.3}"),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) if arr.is_empty() => "(none)".to_string(),
        Value::Array(arr) => arr.iter().map(format_value).collect::<Vec<_>>().join(", "),
        Value::Object(_) => format_compact_object(value),
        Value::Null => "null".to_string(),
    }
}

fn render_json<T: Serialize>(result: &T, args: &TextMetricsArgs) -> Result<String> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
