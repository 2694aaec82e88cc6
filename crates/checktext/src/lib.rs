//! CheckText
//!
//! A client-side profanity/toxicity checking facade. Judgment is delegated
//! to an external generative model (Gemini by default); this crate owns the
//! parts with actual design decisions: deterministic prompt construction, a
//! single bounded-time request, and normalization of the model's free-form
//! reply into a strict [`ClassificationResult`].
//!
//! ```no_run
//! use checktext::{CheckerConfig, TextChecker};
//!
//! # async fn run() -> checktext_core::Result<()> {
//! let config = CheckerConfig::new(std::env::var("GEMINI_API_KEY").unwrap())?
//!     .with_timeout_ms(5_000);
//! let checker = TextChecker::new(config);
//!
//! let verdict = checker.check_text("you absolute walnut").await?;
//! println!("profane: {} ({:.2})", verdict.is_profane, verdict.confidence);
//! # Ok(())
//! # }
//! ```

pub mod checker;
pub mod config;
pub mod normalize;
pub mod prompt;
pub mod provider;

pub use checker::TextChecker;
pub use config::{CheckerConfig, ConfigView, DEFAULT_MODEL, DEFAULT_TIMEOUT_MS};
pub use normalize::normalize;
pub use prompt::{render, DEFAULT_PROMPT_TEMPLATE, TEXT_MARKER};
pub use provider::{GeminiProvider, ProviderError, TextProvider};

pub use checktext_core::{ClassificationResult, Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::checker::TextChecker;
    pub use crate::config::{CheckerConfig, ConfigView};
    pub use crate::provider::TextProvider;
    pub use checktext_core::{ClassificationResult, Error, Result};
}
