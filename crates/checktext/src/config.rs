//! Checker configuration

use checktext_core::{Error, Result};
use serde::Serialize;

use crate::prompt::DEFAULT_PROMPT_TEMPLATE;

/// Default Gemini model used when none is specified.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-001";

/// Default per-request deadline in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Immutable configuration for a [`TextChecker`](crate::TextChecker).
///
/// Constructed once via [`CheckerConfig::new`] plus builder overrides; the
/// API key is validated at construction and never exposed afterwards
/// (callers inspect a [`ConfigView`] instead).
#[derive(Clone)]
pub struct CheckerConfig {
    api_key: String,
    model: String,
    timeout_ms: u64,
    prompt_template: String,
}

impl CheckerConfig {
    /// Create a configuration with defaults for everything but the key.
    ///
    /// Fails with `INVALID_CONFIG` when `api_key` is empty or
    /// whitespace-only.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::invalid_config("API key is required"));
        }

        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            prompt_template: DEFAULT_PROMPT_TEMPLATE.to_string(),
        })
    }

    /// Override the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the per-request deadline.
    ///
    /// A zero value falls back to the default rather than being rejected,
    /// preserving the falsy-to-default policy: `timeout_ms > 0 ? given :
    /// default`.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = if timeout_ms > 0 {
            timeout_ms
        } else {
            DEFAULT_TIMEOUT_MS
        };
        self
    }

    /// Override the prompt template. The template should contain the
    /// `{TEXT}` marker; see [`crate::prompt::render`].
    pub fn with_prompt_template(mut self, template: impl Into<String>) -> Self {
        self.prompt_template = template.into();
        self
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The configured deadline in milliseconds.
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// The configured prompt template.
    pub fn prompt_template(&self) -> &str {
        &self.prompt_template
    }

    /// Read-only view of the non-secret settings.
    pub fn view(&self) -> ConfigView {
        ConfigView {
            model: self.model.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}

// Manual impl: the API key must not leak through debug logs.
impl std::fmt::Debug for CheckerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckerConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("timeout_ms", &self.timeout_ms)
            .finish_non_exhaustive()
    }
}

/// The non-secret subset of [`CheckerConfig`] exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigView {
    /// Model name used for classification requests
    pub model: String,

    /// Per-request deadline in milliseconds
    pub timeout_ms: u64,
}
