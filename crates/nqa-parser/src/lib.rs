//! # nqa-parser
//!
//! Loaders that turn authored course artifacts into normalized records.
//!
//! Authored scripts and scene configuration are TypeScript modules. Rather
//! than scanning their text with patterns, the source is parsed with ast-grep
//! and every object/array literal is converted into a `serde_json::Value`
//! tree ([`literal`]). Structured JSON script records skip that step. Both
//! paths feed the same tree walkers ([`script`], [`scenes`]), which accept
//! sections, lines, and scene entries at any nesting depth.

pub mod error;
pub mod literal;
pub mod numbers;
pub mod scenes;
pub mod script;
pub mod source;

pub use error::ParserError;
pub use numbers::extract_numbers;
pub use scenes::{extract_scene_entries, parse_scenes};
pub use script::{extract_script_lines, parse_script};
pub use source::{SourceFormat, parse_document};
