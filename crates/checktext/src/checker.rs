//! The TextChecker facade
//!
//! Single-text pipeline: validate input → render prompt → execute the
//! provider call against a deadline → normalize the reply. Batch mode runs
//! the same pipeline per item, in order, demoting per-item failures to
//! degraded results so one bad item never aborts the batch.

use std::sync::Arc;
use std::time::Duration;

use checktext_core::{ClassificationResult, Error, Result};
use tracing::{debug, warn};

use crate::config::{CheckerConfig, ConfigView};
use crate::normalize::normalize;
use crate::prompt::render;
use crate::provider::{GeminiProvider, TextProvider};

/// Profanity/toxicity checker delegating judgment to a [`TextProvider`].
///
/// Holds no mutable state, so a single instance is safe to share across
/// concurrent calls as long as the provider is reentrant.
pub struct TextChecker {
    config: CheckerConfig,
    provider: Arc<dyn TextProvider>,
}

impl TextChecker {
    /// Create a checker backed by the default Gemini provider.
    pub fn new(config: CheckerConfig) -> Self {
        let provider = Arc::new(GeminiProvider::new(&config));
        Self { config, provider }
    }

    /// Create a checker with an injected provider (deterministic stubs in
    /// tests, alternative services in production).
    pub fn with_provider(config: CheckerConfig, provider: Arc<dyn TextProvider>) -> Self {
        Self { config, provider }
    }

    /// Read-only view of the non-secret configuration.
    pub fn config(&self) -> ConfigView {
        self.config.view()
    }

    /// Classify a single text.
    ///
    /// Fails with `INVALID_INPUT` for an empty string and `ANALYSIS_FAILED`
    /// for any provider fault, deadline expiry, or blank reply.
    /// Whitespace-only text short-circuits to a fixed clean verdict without
    /// a provider call.
    pub async fn check_text(&self, text: &str) -> Result<ClassificationResult> {
        if text.is_empty() {
            return Err(Error::invalid_input("text must be a non-empty string"));
        }
        if text.trim().is_empty() {
            debug!("blank text, returning clean verdict without a provider call");
            return Ok(ClassificationResult::clean_empty());
        }

        let prompt = render(self.config.prompt_template(), text);
        let raw = self.execute(&prompt).await?;
        Ok(normalize(&raw))
    }

    /// Classify a batch of texts sequentially.
    ///
    /// The output has the same length and order as the input. A failure on
    /// one item is demoted to a degraded result at that position; the batch
    /// itself never fails.
    pub async fn check_texts(&self, texts: &[String]) -> Vec<ClassificationResult> {
        let mut results = Vec::with_capacity(texts.len());
        for (index, text) in texts.iter().enumerate() {
            match self.check_text(text).await {
                Ok(result) => results.push(result),
                Err(err) => {
                    warn!(index, code = err.code(), "batch item failed, demoting to degraded result");
                    results.push(ClassificationResult::degraded(err.to_string()));
                }
            }
        }
        results
    }

    /// Run the provider call against the configured deadline and reject
    /// blank replies. Deadline expiry drops the in-flight request, so the
    /// loser of the race is cancelled rather than left running.
    async fn execute(&self, prompt: &str) -> Result<String> {
        let deadline = Duration::from_millis(self.config.timeout_ms());
        let call = self.provider.generate(self.config.model(), prompt);

        let raw = match tokio::time::timeout(deadline, call).await {
            Ok(Ok(raw)) => raw,
            Ok(Err(provider_err)) => {
                warn!(provider = self.provider.name(), "provider call failed");
                return Err(Error::analysis(provider_err));
            }
            Err(elapsed) => {
                warn!(
                    provider = self.provider.name(),
                    timeout_ms = self.config.timeout_ms(),
                    "provider call timed out"
                );
                return Err(Error::analysis(elapsed));
            }
        };

        if raw.trim().is_empty() {
            return Err(Error::analysis("provider returned an empty response"));
        }
        Ok(raw)
    }
}

impl std::fmt::Debug for TextChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextChecker")
            .field("config", &self.config)
            .field("provider", &self.provider.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;
    use async_trait::async_trait;

    struct FixedProvider(String);

    #[async_trait]
    impl TextProvider for FixedProvider {
        async fn generate(&self, _model: &str, _prompt: &str) -> std::result::Result<String, ProviderError> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn checker_with_reply(reply: &str) -> TextChecker {
        let config = CheckerConfig::new("test-key").unwrap();
        TextChecker::with_provider(config, Arc::new(FixedProvider(reply.to_string())))
    }

    #[tokio::test]
    async fn empty_text_is_rejected_synchronously() {
        let checker = checker_with_reply(r#"{"isProfane": true}"#);
        let err = checker.check_text("").await.unwrap_err();
        assert_eq!(err.code(), "INVALID_INPUT");
    }

    #[tokio::test]
    async fn blank_reply_is_an_analysis_failure() {
        let checker = checker_with_reply("   \n  ");
        let err = checker.check_text("some text").await.unwrap_err();
        assert_eq!(err.code(), "ANALYSIS_FAILED");
    }

    #[tokio::test]
    async fn structured_reply_flows_through_normalizer() {
        let checker = checker_with_reply(r#"{"isProfane": true, "confidence": 0.9, "language": "en"}"#);
        let result = checker.check_text("you absolute walnut").await.unwrap();
        assert!(result.is_profane);
        assert_eq!(result.confidence, 0.9);
        assert_eq!(result.language, "en");
    }

    #[tokio::test]
    async fn config_view_is_exposed() {
        let checker = checker_with_reply("{}");
        let view = checker.config();
        assert_eq!(view.model, crate::config::DEFAULT_MODEL);
    }
}
