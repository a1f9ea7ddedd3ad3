//! Explicit course → artifact location mapping.
//!
//! A [`CourseLayout`] is resolved once, before a check runs, and handed to the
//! checker. Resolution order for each artifact is: the declared per-course
//! override, then the conventional file names. Every candidate tried is kept
//! on the layout so a missing artifact can be reported with what was searched.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{CourseOverride, NqaConfig, VoicesConfig};

/// Manifest file name inside every voice directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// One artifact's resolved path plus the candidates that were searched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactLocation {
    /// First candidate that exists, if any.
    pub resolved: Option<PathBuf>,
    /// Candidates in priority order.
    pub candidates: Vec<PathBuf>,
}

impl ArtifactLocation {
    /// Pick the first existing candidate.
    #[must_use]
    pub fn first_existing(candidates: Vec<PathBuf>) -> Self {
        let resolved = candidates.iter().find(|path| path.is_file()).cloned();
        Self {
            resolved,
            candidates,
        }
    }

    /// A location declared directly, without searching.
    #[must_use]
    pub fn declared(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::first_existing(vec![path]),
            None => Self::default(),
        }
    }
}

/// Where one voice's audio and manifest live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceLocation {
    /// Voice key implied by the location; the manifest must declare it.
    pub voice_key: String,
    pub dir: PathBuf,
    pub is_primary: bool,
}

impl VoiceLocation {
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.dir.join(MANIFEST_FILE)
    }
}

/// Every artifact location for one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseLayout {
    pub course_id: String,
    pub script: ArtifactLocation,
    pub scenes: ArtifactLocation,
    /// Course audio root; the primary voice lives here.
    pub audio_root: PathBuf,
    /// Primary voice first, then alternates in configured order.
    pub voices: Vec<VoiceLocation>,
}

impl CourseLayout {
    /// Resolve a course against the configured directories and overrides.
    #[must_use]
    pub fn resolve(config: &NqaConfig, project_root: &Path, course_id: &str) -> Self {
        let override_entry = config.courses.get(course_id);
        let scripts_dir = config.paths.scripts_dir_in(project_root);
        let scenes_dir = config.paths.scenes_dir_in(project_root);

        let script_candidates = script_file_names(course_id, override_entry)
            .into_iter()
            .map(|name| scripts_dir.join(name))
            .collect();
        let scene_candidates = scene_file_names(course_id, override_entry)
            .into_iter()
            .map(|name| scenes_dir.join(name))
            .collect();

        let layout = Self {
            course_id: course_id.to_string(),
            script: ArtifactLocation::first_existing(script_candidates),
            scenes: ArtifactLocation::first_existing(scene_candidates),
            audio_root: config.paths.audio_dir_in(project_root).join(course_id),
            voices: Vec::new(),
        }
        .with_voices(&config.voices);

        debug!(
            course = course_id,
            script = ?layout.script.resolved,
            scenes = ?layout.scenes.resolved,
            "resolved course layout"
        );
        layout
    }

    /// Build a layout from paths declared by the caller.
    #[must_use]
    pub fn explicit(
        course_id: &str,
        script: Option<PathBuf>,
        scenes: Option<PathBuf>,
        audio_root: PathBuf,
        voices: &VoicesConfig,
    ) -> Self {
        Self {
            course_id: course_id.to_string(),
            script: ArtifactLocation::declared(script),
            scenes: ArtifactLocation::declared(scenes),
            audio_root,
            voices: Vec::new(),
        }
        .with_voices(voices)
    }

    fn with_voices(mut self, voices: &VoicesConfig) -> Self {
        self.voices = voices
            .all()
            .enumerate()
            .map(|(index, key)| VoiceLocation {
                voice_key: key.to_string(),
                dir: if index == 0 {
                    self.audio_root.clone()
                } else {
                    self.audio_root.join(key)
                },
                is_primary: index == 0,
            })
            .collect();
        self
    }
}

/// Script file names in priority order: override, structured JSON record,
/// authored TypeScript.
#[must_use]
pub fn script_file_names(course_id: &str, override_entry: Option<&CourseOverride>) -> Vec<PathBuf> {
    let mut names = Vec::new();
    if let Some(script) = override_entry.and_then(|o| o.script.clone()) {
        names.push(script);
    }
    names.push(PathBuf::from(format!("{course_id}.json")));
    names.push(PathBuf::from(format!("{course_id}.ts")));
    dedup_in_order(names)
}

/// Scene file names in priority order: override, `camelCase`, dashes
/// removed, verbatim.
#[must_use]
pub fn scene_file_names(course_id: &str, override_entry: Option<&CourseOverride>) -> Vec<PathBuf> {
    let mut names = Vec::new();
    if let Some(scenes) = override_entry.and_then(|o| o.scenes.clone()) {
        names.push(scenes);
    }
    names.push(PathBuf::from(format!("{}Scenes.ts", camel_case(course_id))));
    names.push(PathBuf::from(format!("{}Scenes.ts", course_id.replace('-', ""))));
    names.push(PathBuf::from(format!("{course_id}Scenes.ts")));
    dedup_in_order(names)
}

/// `basic-arithmetic` → `basicArithmetic`. Words after the first are
/// capitalized with the rest lowercased.
#[must_use]
pub fn camel_case(course_id: &str) -> String {
    let mut out = String::with_capacity(course_id.len());
    for (index, word) in course_id.split('-').enumerate() {
        if index == 0 {
            out.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}

fn dedup_in_order(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = BTreeSet::new();
    paths
        .into_iter()
        .filter(|path| seen.insert(path.clone()))
        .collect()
}

/// Course ids discoverable from the script and audio directories, sorted.
///
/// Missing directories contribute nothing.
#[must_use]
pub fn discover_course_ids(config: &NqaConfig, project_root: &Path) -> Vec<String> {
    let mut ids = BTreeSet::new();

    if let Ok(entries) = std::fs::read_dir(config.paths.scripts_dir_in(project_root)) {
        for entry in entries.flatten() {
            let path = entry.path();
            let is_script = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| matches!(ext, "ts" | "json"));
            if is_script && path.is_file() {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.insert(stem.to_string());
                }
            }
        }
    }

    if let Ok(entries) = std::fs::read_dir(config.paths.audio_dir_in(project_root)) {
        for entry in entries.flatten() {
            if entry.path().is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    ids.insert(name.to_string());
                }
            }
        }
    }

    ids.into_iter().collect()
}
