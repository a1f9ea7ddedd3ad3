//! # nqa-schema
//!
//! JSON Schema generation, validation, and registry for narration-qa.
//!
//! Types are defined in `nqa-core` with `#[derive(JsonSchema)]`. This crate
//! builds their schemas once and validates untrusted JSON (audio manifests
//! written by the synthesis tooling, structured script records) before it is
//! deserialized, so a malformed file is reported with every violation rather
//! than only the first serde error.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
