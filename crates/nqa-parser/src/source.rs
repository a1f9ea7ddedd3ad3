//! Artifact format detection and the shared literal-tree entry point.

use std::path::Path;

use ast_grep_language::SupportLang;
use serde_json::Value;

use crate::error::ParserError;
use crate::literal::parse_literals;

/// Source formats an authored artifact can come in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    TypeScript,
    Tsx,
    JavaScript,
    /// A structured record, parsed with `serde_json`.
    Json,
}

impl SourceFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ParserError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            "ts" | "mts" | "cts" => Ok(Self::TypeScript),
            "tsx" => Ok(Self::Tsx),
            "js" | "mjs" | "cjs" => Ok(Self::JavaScript),
            "json" => Ok(Self::Json),
            _ => Err(ParserError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// The ast-grep language for source formats; `None` for JSON.
    #[must_use]
    pub const fn language(self) -> Option<SupportLang> {
        match self {
            Self::TypeScript => Some(SupportLang::TypeScript),
            Self::Tsx => Some(SupportLang::Tsx),
            Self::JavaScript => Some(SupportLang::JavaScript),
            Self::Json => None,
        }
    }
}

/// Turn artifact text into the literal trees the walkers consume.
///
/// Source formats never fail: tree-sitter recovers from syntax errors and
/// whatever literals it still finds are returned. JSON must parse as a whole.
pub fn parse_document(source: &str, format: SourceFormat) -> Result<Vec<Value>, ParserError> {
    match format.language() {
        Some(lang) => Ok(parse_literals(source, lang)),
        None => Ok(vec![serde_json::from_str(source)?]),
    }
}
