//! Cross-cutting error types for narration-qa.
//!
//! Domain-specific errors (`ConfigError`, `ParserError`, `CheckError`) live in
//! their own crates and converge in `nqa-cli` through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any narration-qa crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (shape, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
