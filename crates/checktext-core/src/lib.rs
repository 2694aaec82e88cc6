//! CheckText Core
//!
//! Shared types and error taxonomy for the CheckText facade.
//!
//! This crate provides:
//! - The canonical [`ClassificationResult`] verdict type
//! - The [`Error`] taxonomy with stable machine-readable codes

pub mod error;
pub mod types;

pub use error::{BoxError, Error, Result};
pub use types::{ClassificationResult, UNKNOWN_LANGUAGE};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::ClassificationResult;
}
