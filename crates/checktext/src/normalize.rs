//! Reply normalization
//!
//! Turns the provider's free-form reply into the canonical
//! [`ClassificationResult`]. Total by construction: the structured path
//! handles well-formed JSON (fenced or bare), and the keyword fallback
//! guarantees a usable verdict from any other reply, trading precision for
//! availability.

use checktext_core::{ClassificationResult, UNKNOWN_LANGUAGE};
use serde_json::Value;
use tracing::debug;

/// Confidence substituted when the reply carries no usable score.
const NEUTRAL_CONFIDENCE: f32 = 0.5;

/// Keywords whose presence in an unparsable reply marks the text profane.
const FALLBACK_KEYWORDS: [&str; 4] = ["true", "profane", "toxic", "inappropriate"];

/// Normalize a raw model reply into the canonical verdict. Never fails.
pub fn normalize(raw: &str) -> ClassificationResult {
    let stripped = strip_fences(raw);

    match serde_json::from_str::<Value>(stripped) {
        Ok(Value::Object(fields)) => {
            let is_profane = fields.get("isProfane").is_some_and(is_truthy);
            let confidence = fields
                .get("confidence")
                .and_then(Value::as_f64)
                .map_or(NEUTRAL_CONFIDENCE, |c| c.clamp(0.0, 1.0) as f32);
            let language = fields
                .get("language")
                .and_then(Value::as_str)
                .filter(|l| !l.is_empty())
                .unwrap_or(UNKNOWN_LANGUAGE);

            let mut result = ClassificationResult::new(is_profane, confidence, language);
            if let Some(details) = fields.get("details").and_then(Value::as_str) {
                result = result.with_details(details);
            }
            result
        }
        _ => {
            debug!(reply_len = raw.len(), "structured parse failed, using keyword fallback");
            fallback(raw)
        }
    }
}

/// Strip Markdown code-fence markers (```json / ```) and surrounding
/// whitespace so a fenced reply reaches the JSON parser bare.
fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// JS-style truthiness: null, false, 0, NaN, and "" are falsy; everything
/// else (including the string "false") is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn fallback(raw: &str) -> ClassificationResult {
    let lower = raw.to_lowercase();
    let is_profane = FALLBACK_KEYWORDS.iter().any(|kw| lower.contains(kw));

    ClassificationResult::new(is_profane, NEUTRAL_CONFIDENCE, UNKNOWN_LANGUAGE)
        .with_details("Fallback parsing used")
}
