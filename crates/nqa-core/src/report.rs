//! The aggregated result of one course check.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::findings::{Finding, Severity};

/// Audio file count for one voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VoiceSummary {
    pub voice: String,
    pub audio_files: usize,
}

/// Artifact sizes seen by the check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportSummary {
    pub script_lines: usize,
    pub scene_entries: usize,
    pub voices: Vec<VoiceSummary>,
}

/// Ordered findings for one course plus the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Report {
    pub course_id: String,
    pub summary: ReportSummary,
    /// All findings in stage order; insertion order within a stage.
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Warning)
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Pass iff there are no errors. Warnings never fail a check.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::findings::Stage;

    fn report(findings: Vec<Finding>) -> Report {
        Report {
            course_id: "demo".into(),
            summary: ReportSummary::default(),
            findings,
        }
    }

    #[test]
    fn warnings_alone_pass() {
        let r = report(vec![
            Finding::warning(Stage::Reconcile, "orphan"),
            Finding::warning(Stage::Audio, "short"),
        ]);
        assert!(r.passed());
        assert_eq!(r.warning_count(), 2);
        assert_eq!(r.error_count(), 0);
    }

    #[test]
    fn any_error_fails() {
        let r = report(vec![
            Finding::warning(Stage::Reconcile, "orphan"),
            Finding::error(Stage::Audio, "tiny"),
        ]);
        assert!(!r.passed());
        assert_eq!(r.errors().next().map(|f| f.message.as_str()), Some("tiny"));
    }

    #[test]
    fn empty_report_passes() {
        assert!(report(Vec::new()).passed());
    }
}
