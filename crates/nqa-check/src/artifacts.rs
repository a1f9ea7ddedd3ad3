//! Artifact presence stage: read and parse the script and the scene
//! configuration a layout points at.

use std::path::{Path, PathBuf};

use nqa_config::ArtifactLocation;
use nqa_config::CourseLayout;
use nqa_core::{Finding, SceneEntry, ScriptLine, Stage};
use nqa_parser::{SourceFormat, parse_scenes, parse_script};
use tracing::debug;

use crate::error::CheckError;

/// Parsed authored artifacts. Absent artifacts load as empty.
#[derive(Debug, Clone, Default)]
pub struct AuthoredArtifacts {
    pub script_lines: Vec<ScriptLine>,
    pub scene_entries: Vec<SceneEntry>,
}

/// Load the script and scene configuration, reporting absence as findings.
///
/// # Errors
///
/// Returns [`CheckError::Io`] when a resolved artifact exists but cannot be
/// read.
pub fn load_authored(
    layout: &CourseLayout,
) -> Result<(AuthoredArtifacts, Vec<Finding>), CheckError> {
    let mut findings = Vec::new();

    let script_lines = match locate(&layout.script, "script", &mut findings) {
        Some((path, format)) => parse_script(&read(path)?, format),
        None => Vec::new(),
    };
    let scene_entries = match locate(&layout.scenes, "scene configuration", &mut findings) {
        Some((path, format)) => parse_scenes(&read(path)?, format),
        None => Vec::new(),
    };

    debug!(
        course = %layout.course_id,
        lines = script_lines.len(),
        scenes = scene_entries.len(),
        "loaded authored artifacts"
    );

    Ok((
        AuthoredArtifacts {
            script_lines,
            scene_entries,
        },
        findings,
    ))
}

fn locate<'a>(
    location: &'a ArtifactLocation,
    what: &str,
    findings: &mut Vec<Finding>,
) -> Option<(&'a Path, SourceFormat)> {
    let Some(path) = location.resolved.as_deref() else {
        findings.push(Finding::error(
            Stage::Artifacts,
            format!("{what} not found (tried: {})", join_paths(&location.candidates)),
        ));
        return None;
    };

    match SourceFormat::from_path(path) {
        Ok(format) => Some((path, format)),
        Err(error) => {
            findings.push(Finding::error(Stage::Artifacts, format!("{what}: {error}")));
            None
        }
    }
}

fn read(path: &Path) -> Result<String, CheckError> {
    std::fs::read_to_string(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn join_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "no candidates".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use nqa_config::VoicesConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_artifacts_are_errors_listing_candidates() {
        let root = tempfile::tempdir().unwrap();
        let layout = CourseLayout::resolve(
            &nqa_config::NqaConfig::default(),
            root.path(),
            "basic-arithmetic",
        );

        let (artifacts, findings) = load_authored(&layout).unwrap();
        assert!(artifacts.script_lines.is_empty());
        assert_eq!(findings.len(), 2);
        assert!(findings[0].message.starts_with("script not found"));
        assert!(findings[0].message.contains("basic-arithmetic.ts"));
        assert!(findings[1].message.starts_with("scene configuration not found"));
        assert!(findings[1].message.contains("basicArithmeticScenes.ts"));
        assert!(findings.iter().all(|f| f.stage == Stage::Artifacts && f.is_error()));
    }

    #[test]
    fn unsupported_override_is_reported() {
        let root = tempfile::tempdir().unwrap();
        let notes = root.path().join("script.md");
        std::fs::write(&notes, "# notes").unwrap();
        let layout = CourseLayout::explicit(
            "demo",
            Some(notes),
            None,
            root.path().join("audio"),
            &VoicesConfig::default(),
        );

        let (_, findings) = load_authored(&layout).unwrap();
        assert!(findings[0].message.contains("Unsupported artifact format"));
        assert_eq!(findings[1].message, "scene configuration not found (tried: no candidates)");
    }
}
