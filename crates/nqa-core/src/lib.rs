//! # nqa-core
//!
//! Core types shared across all narration-qa crates.
//!
//! This crate provides:
//! - Script and scene records produced by the loaders in `nqa-parser`
//! - The persisted audio manifest shape written by the synthesis tooling
//! - The structured narration script record upstream tooling should emit
//! - The two-tier finding taxonomy and the aggregated check report
//! - Cross-cutting error types

pub mod errors;
pub mod findings;
pub mod manifest;
pub mod records;
pub mod report;
pub mod script;

pub use errors::CoreError;
pub use findings::{Finding, Severity, Stage};
pub use manifest::{AudioFileEntry, Manifest};
pub use records::{SceneEntry, ScriptLine};
pub use report::{Report, ReportSummary, VoiceSummary};
pub use script::{NarrationLine, NarrationScript, NarrationSection};
