//! Parser error types for nqa-parser.

use std::path::PathBuf;

/// Errors that can occur while turning an artifact into literal trees.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Unsupported artifact format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("JSON parse failed: {0}")]
    Json(#[from] serde_json::Error),
}
