//! # nqa-check
//!
//! Cross-source consistency checking for one narration course.
//!
//! A check reads the artifacts named by a [`CourseLayout`] and runs four
//! stages, each returning its own ordered findings:
//!
//! 1. **artifacts**: script, scene configuration, voice directories and
//!    manifests are present ([`artifacts`], [`voices`])
//! 2. **reconcile**: line ids agree across sources ([`reconcile`])
//! 3. **content**: structured scenes agree with what the line says ([`content`])
//! 4. **audio**: manifests agree with thresholds and the files on disk ([`audio`])
//!
//! The [`report`] module concatenates them. A course passes iff there are no
//! error-level findings.

pub mod artifacts;
pub mod audio;
pub mod content;
pub mod error;
pub mod reconcile;
pub mod report;
pub mod settings;
pub mod voices;

use std::path::Path;

use nqa_config::{CourseLayout, NqaConfig};
use nqa_core::{Report, ReportSummary, VoiceSummary};
use nqa_schema::SchemaRegistry;
use tracing::info;

pub use error::CheckError;
pub use report::render_text;
pub use settings::CheckSettings;

/// Run every stage against one course layout.
///
/// # Errors
///
/// Fails only when a manifest is malformed or an existing artifact cannot be
/// read. Everything else is a finding on the returned report.
pub fn check(layout: &CourseLayout, settings: &CheckSettings) -> Result<Report, CheckError> {
    let registry = SchemaRegistry::new();

    let (authored, mut artifact_findings) = artifacts::load_authored(layout)?;
    let (loaded_voices, voice_findings) = voices::load_voices(layout, &registry)?;
    artifact_findings.extend(voice_findings);

    let reconciliation = reconcile::reconcile(
        &authored.script_lines,
        &authored.scene_entries,
        &loaded_voices,
    );
    let content_findings = content::match_content(&reconciliation.pairs, settings);
    let audio_findings = audio::check_audio(&loaded_voices, settings);

    let summary = ReportSummary {
        script_lines: authored.script_lines.len(),
        scene_entries: authored.scene_entries.len(),
        voices: loaded_voices
            .iter()
            .map(|v| VoiceSummary {
                voice: v.key().to_string(),
                audio_files: v.audio_count(),
            })
            .collect(),
    };

    let report = report::aggregate(
        &layout.course_id,
        summary,
        report::StageFindings {
            artifacts: artifact_findings,
            reconcile: reconciliation.findings,
            content: content_findings,
            audio: audio_findings,
        },
    );

    info!(
        course = %report.course_id,
        errors = report.error_count(),
        warnings = report.warning_count(),
        passed = report.passed(),
        "check complete"
    );
    Ok(report)
}

/// Resolve `course_id` under `project_root` with `config` and check it.
///
/// # Errors
///
/// As [`check`].
pub fn check_course(
    config: &NqaConfig,
    project_root: &Path,
    course_id: &str,
) -> Result<Report, CheckError> {
    let layout = CourseLayout::resolve(config, project_root, course_id);
    check(&layout, &CheckSettings::from_config(config))
}
