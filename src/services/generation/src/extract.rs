//! Recovering a JSON object from free-form model output
//!
//! Models occasionally wrap the requested JSON in prose, fence it, or leave
//! a trailing comma. The repair sequence here is a fixed, deterministic
//! patch list (slice to the brace region, then strip trailing commas)
//! applied in order with a re-parse after each step. Nothing resembling a
//! general JSON-repair grammar is attempted.

use crate::error::PipelineError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static TRAILING_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*([}\]])").expect("trailing comma pattern"));

/// Locate and parse the first balanced `{...}` region in `raw`.
///
/// Fails with `NoJsonFound` when no brace pair exists at all, and with
/// `MalformedJson` (carrying the parser's message) when the region resists
/// every repair.
pub fn extract_json_object(raw: &str) -> Result<Map<String, Value>, PipelineError> {
    let start = raw.find('{');
    let end = raw.rfind('}');

    let (start, end) = match (start, end) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => return Err(PipelineError::NoJsonFound),
    };

    // First attempt: the raw text as-is. Succeeds when the model obeyed the
    // "JSON only" instruction.
    let mut last_error = match try_parse(raw.trim()) {
        Ok(object) => return Ok(object),
        Err(e) => e,
    };

    // Repair 1: slice away prose before the first `{` and after the last `}`.
    let sliced = &raw[start..=end];
    match try_parse(sliced) {
        Ok(object) => return Ok(object),
        Err(e) => last_error = e,
    }

    // Repair 2: strip trailing commas before a closing brace or bracket.
    let repaired = TRAILING_COMMA.replace_all(sliced, "$1");
    match try_parse(&repaired) {
        Ok(object) => return Ok(object),
        Err(e) => last_error = e,
    }

    Err(PipelineError::MalformedJson(last_error))
}

fn try_parse(candidate: &str) -> Result<Map<String, Value>, String> {
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(format!("expected a JSON object, got {}", kind_of(&other))),
        Err(e) => Err(e.to_string()),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
