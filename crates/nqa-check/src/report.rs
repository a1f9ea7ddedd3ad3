//! Report aggregation and plain-text rendering.

use std::fmt::Write as _;

use nqa_core::{Finding, Report, ReportSummary};

/// Per-stage finding lists, in report order.
#[derive(Debug, Default)]
pub struct StageFindings {
    pub artifacts: Vec<Finding>,
    pub reconcile: Vec<Finding>,
    pub content: Vec<Finding>,
    pub audio: Vec<Finding>,
}

/// Concatenate stage outputs into a report.
#[must_use]
pub fn aggregate(course_id: &str, summary: ReportSummary, stages: StageFindings) -> Report {
    let StageFindings {
        artifacts,
        reconcile,
        content,
        audio,
    } = stages;
    let findings = [artifacts, reconcile, content, audio].into_iter().flatten().collect();
    Report {
        course_id: course_id.to_string(),
        summary,
        findings,
    }
}

/// Render a report for a terminal, errors first. At most `warning_cap`
/// warnings are listed; the counts are always the true totals.
#[must_use]
pub fn render_text(report: &Report, warning_cap: usize) -> String {
    let mut out = String::new();
    let summary = &report.summary;

    let _ = writeln!(out, "Narration check: {}", report.course_id);
    let _ = writeln!(out, "  script lines:  {}", summary.script_lines);
    let _ = writeln!(out, "  scene entries: {}", summary.scene_entries);
    for voice in &summary.voices {
        let _ = writeln!(out, "  audio ({}): {}", voice.voice, voice.audio_files);
    }

    let error_count = report.error_count();
    let warning_count = report.warning_count();

    if error_count > 0 {
        let _ = writeln!(out, "\nErrors ({error_count}):");
        for finding in report.errors() {
            let _ = writeln!(out, "  x [{}] {}", finding.stage, finding.message);
        }
    }

    if warning_count > 0 {
        let _ = writeln!(out, "\nWarnings ({warning_count}):");
        for finding in report.warnings().take(warning_cap) {
            let _ = writeln!(out, "  ! [{}] {}", finding.stage, finding.message);
        }
        if warning_count > warning_cap {
            let _ = writeln!(out, "  ... and {} more warnings", warning_count - warning_cap);
        }
    }

    let verdict = if report.passed() { "PASS" } else { "FAIL" };
    let _ = writeln!(
        out,
        "\n{verdict}: {error_count} error(s), {warning_count} warning(s)"
    );
    out
}
