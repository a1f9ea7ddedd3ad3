//! Finding severity, provenance stages, and the finding record itself.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Two-tier severity. Only `Error` blocks the pass verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// The check stage that produced a finding.
///
/// Declaration order is report order: artifact presence, identity
/// reconciliation, content matching, audio integrity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Artifacts,
    Reconcile,
    Content,
    Audio,
}

impl Stage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Artifacts => "artifacts",
            Self::Reconcile => "reconcile",
            Self::Content => "content",
            Self::Audio => "audio",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Finding
// ---------------------------------------------------------------------------

/// A single consistency finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub stage: Stage,
    /// Line id or voice key the finding is about, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

impl Finding {
    #[must_use]
    pub fn error(stage: Stage, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            stage,
            subject: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(stage: Stage, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            stage,
            subject: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}] {}", self.severity, self.stage, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_order_matches_report_order() {
        let mut stages = vec![Stage::Audio, Stage::Content, Stage::Artifacts, Stage::Reconcile];
        stages.sort();
        assert_eq!(
            stages,
            vec![Stage::Artifacts, Stage::Reconcile, Stage::Content, Stage::Audio]
        );
    }

    #[test]
    fn constructors_set_severity() {
        let err = Finding::error(Stage::Reconcile, "missing scene configuration: l2");
        let warn = Finding::warning(Stage::Audio, "short").with_subject("l1");
        assert!(err.is_error());
        assert!(!warn.is_error());
        assert_eq!(warn.subject.as_deref(), Some("l1"));
    }

    #[test]
    fn display_includes_severity_and_stage() {
        let finding = Finding::error(Stage::Content, "boom");
        assert_eq!(finding.to_string(), "[error/content] boom");
    }

    #[test]
    fn subject_is_omitted_from_json_when_absent() {
        let json = serde_json::to_value(Finding::warning(Stage::Artifacts, "x")).unwrap();
        assert!(json.get("subject").is_none());
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["stage"], "artifacts");
    }
}
