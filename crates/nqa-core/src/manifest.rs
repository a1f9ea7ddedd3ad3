//! Audio manifest persisted by a synthesis run, one per voice per course.
//!
//! Field names follow the JSON written by the synthesis tooling; the Rust
//! names carry units instead.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// One generated audio file. Identity is `(section_id, line_id)` within a
/// single voice's manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AudioFileEntry {
    pub script_id: String,
    pub section_id: String,
    pub line_id: String,
    pub filename: String,
    /// Path relative to the public asset root.
    #[serde(rename = "path")]
    pub relative_path: String,
    #[serde(rename = "duration")]
    pub duration_secs: f64,
    #[serde(rename = "size")]
    pub size_bytes: u64,
    /// Text the audio was synthesized from.
    pub text: String,
}

/// The durable record of one voice's synthesis run for a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Manifest {
    pub script_id: String,
    /// Full synthesis voice name, e.g. `zh-CN-XiaoxiaoNeural`.
    #[serde(rename = "voice")]
    pub voice_name: String,
    /// Short voice key, e.g. `xiaoxiao`.
    pub voice_key: String,
    pub files: Vec<AudioFileEntry>,
    #[serde(rename = "total_duration")]
    pub total_duration_secs: f64,
    #[serde(rename = "total_size")]
    pub total_size_bytes: u64,
}

impl Manifest {
    /// Deserialize a manifest that has already passed schema validation.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CoreError> {
        serde_json::from_value(value).map_err(|e| CoreError::Validation(e.to_string()))
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn summed_duration_secs(&self) -> f64 {
        self.files.iter().map(|f| f.duration_secs).sum()
    }

    #[must_use]
    pub fn summed_size_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.size_bytes).sum()
    }

    /// Entry for a line id, if the manifest has one.
    #[must_use]
    pub fn entry_for(&self, line_id: &str) -> Option<&AudioFileEntry> {
        self.files.iter().find(|f| f.line_id == line_id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const GENERATED: &str = r#"{
      "script_id": "demo",
      "voice": "zh-CN-XiaoxiaoNeural",
      "voice_key": "xiaoxiao",
      "files": [
        {
          "script_id": "demo",
          "section_id": "intro",
          "line_id": "intro-1",
          "filename": "intro-intro-1.mp3",
          "path": "audio/narrations/demo/intro-intro-1.mp3",
          "duration": 2.5,
          "size": 40000,
          "text": "你好"
        }
      ],
      "total_duration": 2.5,
      "total_size": 40000
    }"#;

    #[test]
    fn parses_generator_output() {
        let manifest: Manifest = serde_json::from_str(GENERATED).unwrap();
        assert_eq!(manifest.voice_name, "zh-CN-XiaoxiaoNeural");
        assert_eq!(manifest.voice_key, "xiaoxiao");
        assert_eq!(manifest.file_count(), 1);
        let entry = &manifest.files[0];
        assert_eq!(entry.relative_path, "audio/narrations/demo/intro-intro-1.mp3");
        assert_eq!(entry.size_bytes, 40000);
        assert!((entry.duration_secs - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn integer_totals_are_accepted() {
        let json = r#"{"script_id":"x","voice":"v","voice_key":"k","files":[],
                       "total_duration":0,"total_size":0}"#;
        let manifest: Manifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.file_count(), 0);
        assert!(manifest.summed_duration_secs().abs() < f64::EPSILON);
    }

    #[test]
    fn from_value_reports_shape_errors() {
        let err = Manifest::from_value(serde_json::json!({ "script_id": "x" })).unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg.contains("voice")));
    }

    #[test]
    fn entry_lookup_by_line_id() {
        let manifest: Manifest = serde_json::from_str(GENERATED).unwrap();
        assert!(manifest.entry_for("intro-1").is_some());
        assert!(manifest.entry_for("intro-2").is_none());
        assert_eq!(manifest.summed_size_bytes(), 40000);
    }
}
