//! Core types for CheckText

use serde::{Deserialize, Serialize};

/// Language code used when the model did not report one.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// The canonical verdict returned for every checked text.
///
/// This is the only type crossing the crate boundary as output; `confidence`
/// always lands in `[0.0, 1.0]` regardless of which parsing path produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Whether the text was judged profane/toxic
    pub is_profane: bool,

    /// Confidence score (0.0-1.0)
    pub confidence: f32,

    /// ISO-ish language code reported by the model, or "unknown"
    pub language: String,

    /// Free-form explanation, when the model supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ClassificationResult {
    /// Create a result, clamping `confidence` into `[0.0, 1.0]`.
    pub fn new(is_profane: bool, confidence: f32, language: impl Into<String>) -> Self {
        Self {
            is_profane,
            confidence: confidence.clamp(0.0, 1.0),
            language: language.into(),
            details: None,
        }
    }

    /// Attach a details string.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// The fixed clean verdict for blank input, produced without a provider
    /// call.
    pub fn clean_empty() -> Self {
        Self::new(false, 1.0, UNKNOWN_LANGUAGE).with_details("Empty text")
    }

    /// Degraded verdict substituted for a failed batch item.
    pub fn degraded(message: impl AsRef<str>) -> Self {
        Self::new(false, 0.0, UNKNOWN_LANGUAGE)
            .with_details(format!("Error: {}", message.as_ref()))
    }
}
