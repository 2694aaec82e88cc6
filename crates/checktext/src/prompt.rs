//! Prompt template rendering

/// Substitution marker replaced with the subject text.
pub const TEXT_MARKER: &str = "{TEXT}";

/// Default classification prompt.
///
/// Asks the model for a fixed JSON object so the structured path of the
/// normalizer can do a strict parse; the fallback path covers models that
/// answer in prose anyway.
pub const DEFAULT_PROMPT_TEMPLATE: &str = r#"Analyze the following text for profanity, toxicity, hate speech, or inappropriate language in any language.

Text to analyze:
{TEXT}

Respond with ONLY a JSON object in exactly this shape, with no other text:
{"isProfane": boolean, "confidence": number between 0 and 1, "language": "ISO language code", "details": "short explanation"}"#;

/// Substitute `subject` into `template`.
///
/// Performs a single, first-occurrence, literal replacement of `{TEXT}`;
/// the subject is inserted raw, with no escaping. A template without the
/// marker is returned unchanged.
pub fn render(template: &str, subject: &str) -> String {
    template.replacen(TEXT_MARKER, subject, 1)
}
