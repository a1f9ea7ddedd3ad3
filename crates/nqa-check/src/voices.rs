//! Audio manifest loading, one voice location at a time.

use std::collections::BTreeMap;
use std::path::Path;

use nqa_config::{CourseLayout, VoiceLocation};
use nqa_core::{Finding, Manifest, Stage};
use nqa_schema::SchemaRegistry;
use nqa_schema::registry::MANIFEST;
use tracing::{debug, warn};

use crate::error::CheckError;

/// The `*.mp3` files present in a voice directory, by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiskAudio {
    pub files: BTreeMap<String, u64>,
}

impl DiskAudio {
    /// List `*.mp3` files directly inside `dir`. An unreadable directory
    /// lists as empty.
    #[must_use]
    pub fn scan(dir: &Path) -> Self {
        let mut files = BTreeMap::new();
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(error) => {
                warn!(dir = %dir.display(), %error, "cannot list audio directory");
                return Self { files };
            }
        };
        for entry in entries.flatten() {
            let path = entry.path();
            let is_mp3 = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("mp3"));
            if !is_mp3 {
                continue;
            }
            if let (Some(name), Ok(meta)) = (entry.file_name().to_str(), entry.metadata()) {
                if meta.is_file() {
                    files.insert(name.to_string(), meta.len());
                }
            }
        }
        Self { files }
    }

    #[must_use]
    pub fn size_of(&self, file_name: &str) -> Option<u64> {
        self.files.get(file_name).copied()
    }
}

/// One voice location with whatever could be loaded from it.
#[derive(Debug, Clone)]
pub struct LoadedVoice {
    pub location: VoiceLocation,
    /// `None` when the directory or its manifest is missing.
    pub manifest: Option<Manifest>,
    pub disk: DiskAudio,
}

impl LoadedVoice {
    /// Number of audio entries the voice declares; 0 without a manifest.
    #[must_use]
    pub fn audio_count(&self) -> usize {
        self.manifest.as_ref().map_or(0, Manifest::file_count)
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.location.voice_key
    }
}

/// Load every voice of a layout, primary first.
///
/// # Errors
///
/// Returns [`CheckError::MalformedManifest`] when a manifest is not JSON,
/// violates the manifest schema, or does not deserialize, and
/// [`CheckError::Io`] when an existing manifest cannot be read.
pub fn load_voices(
    layout: &CourseLayout,
    registry: &SchemaRegistry,
) -> Result<(Vec<LoadedVoice>, Vec<Finding>), CheckError> {
    let mut voices = Vec::with_capacity(layout.voices.len());
    let mut findings = Vec::new();

    for location in &layout.voices {
        let key = location.voice_key.as_str();
        if !location.dir.is_dir() {
            findings.push(
                Finding::error(
                    Stage::Artifacts,
                    format!(
                        "audio directory not found for voice {key}: {}",
                        location.dir.display()
                    ),
                )
                .with_subject(key),
            );
            voices.push(LoadedVoice {
                location: location.clone(),
                manifest: None,
                disk: DiskAudio::default(),
            });
            continue;
        }

        let disk = DiskAudio::scan(&location.dir);
        let manifest_path = location.manifest_path();
        let manifest = if manifest_path.is_file() {
            Some(read_manifest(&manifest_path, registry)?)
        } else {
            findings.push(
                Finding::error(
                    Stage::Artifacts,
                    format!(
                        "manifest not found for voice {key}: {}",
                        manifest_path.display()
                    ),
                )
                .with_subject(key),
            );
            None
        };

        debug!(
            voice = key,
            entries = manifest.as_ref().map_or(0, Manifest::file_count),
            on_disk = disk.files.len(),
            "loaded voice"
        );
        voices.push(LoadedVoice {
            location: location.clone(),
            manifest,
            disk,
        });
    }

    Ok((voices, findings))
}

/// Parse, schema-validate, then deserialize one manifest.
pub fn read_manifest(path: &Path, registry: &SchemaRegistry) -> Result<Manifest, CheckError> {
    let malformed = |reason: String| CheckError::MalformedManifest {
        path: path.to_path_buf(),
        reason,
    };

    let raw = std::fs::read_to_string(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| malformed(format!("invalid JSON: {e}")))?;
    registry
        .validate(MANIFEST, &value)
        .map_err(|e| malformed(e.to_string()))?;
    Manifest::from_value(value).map_err(|e| malformed(e.to_string()))
}
