//! Error types for CheckText

/// Result type alias using CheckText's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used for cause chaining on analysis failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Core error type for CheckText operations.
///
/// Every variant carries a stable machine-readable code (see [`Error::code`])
/// so callers can branch without matching on display strings. Analysis
/// failures keep the underlying condition (transport fault, timeout, blank
/// reply) as a `source` for diagnostics, but never surface it as the primary
/// message.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad construction input (missing or blank API key)
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Bad call arguments, rejected before any I/O
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Any failure during the request/response cycle
    #[error("text analysis failed")]
    AnalysisFailed {
        /// The underlying condition, retained for diagnostics
        #[source]
        cause: Option<BoxError>,
    },
}

impl Error {
    /// Create a new configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a new input-validation error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new analysis error wrapping the underlying condition
    pub fn analysis(cause: impl Into<BoxError>) -> Self {
        Self::AnalysisFailed {
            cause: Some(cause.into()),
        }
    }

    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::AnalysisFailed { .. } => "ANALYSIS_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(Error::invalid_config("no key").code(), "INVALID_CONFIG");
        assert_eq!(Error::invalid_input("empty").code(), "INVALID_INPUT");
        assert_eq!(Error::analysis("boom").code(), "ANALYSIS_FAILED");
    }

    #[test]
    fn analysis_message_does_not_leak_cause() {
        let err = Error::analysis("connection reset by peer");
        assert_eq!(err.to_string(), "text analysis failed");
    }

    #[test]
    fn analysis_cause_is_reachable_via_source() {
        use std::error::Error as _;

        let err = Error::analysis("deadline elapsed");
        let source = err.source().expect("cause should be attached");
        assert_eq!(source.to_string(), "deadline elapsed");
    }
}
