//! Provider capability trait and the Gemini implementation
//!
//! Judgment is fully outsourced: the checker only needs one operation,
//! `generate(model, prompt) -> text`. Anything implementing [`TextProvider`]
//! can stand in for the real service, which is what the test suite does.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::CheckerConfig;

/// Failure raised by a provider before the checker wraps it.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Transport-level failure (DNS, TLS, connect, body read)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status from the service
    #[error("provider returned status {0}")]
    Status(u16),

    /// Response body did not contain a usable text candidate
    #[error("provider returned no text candidates")]
    NoCandidates,
}

/// Capability interface for the external generative service.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send `prompt` to `model` and return the raw reply text.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, ProviderError>;

    /// Provider name, for logging.
    fn name(&self) -> &str;
}

// ── Gemini REST shapes ───────────────────────────────────────────────────────

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

// ── Gemini provider ──────────────────────────────────────────────────────────

/// [`TextProvider`] backed by the Gemini `generateContent` REST endpoint.
pub struct GeminiProvider {
    api_key: String,
    http: reqwest::Client,
}

impl GeminiProvider {
    /// Build a provider from the checker configuration.
    pub fn new(config: &CheckerConfig) -> Self {
        Self {
            api_key: config.api_key().to_string(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TextProvider for GeminiProvider {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        // The v1beta endpoint authenticates via the ?key= query parameter.
        let url = format!(
            "{GEMINI_API_BASE}/{model}:generateContent?key={key}",
            key = self.api_key,
        );

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let parsed: GenerateResponse = response.json().await?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(ProviderError::NoCandidates)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckerConfig;

    #[test]
    fn debug_redacts_api_key() {
        let config = CheckerConfig::new("super-secret").unwrap();
        let provider = GeminiProvider::new(&config);
        assert!(!format!("{provider:?}").contains("super-secret"));
    }

    #[test]
    fn response_shape_extracts_first_candidate() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}]}},
                {"content": {"parts": [{"text": "other"}]}}
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text);
        assert_eq!(text.as_deref(), Some("first"));
    }

    #[test]
    fn empty_candidates_deserialize_cleanly() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
