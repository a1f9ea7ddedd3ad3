//! Artifact directory configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_scripts_dir() -> PathBuf {
    PathBuf::from("src/narrations/scripts")
}

fn default_scenes_dir() -> PathBuf {
    PathBuf::from("src/components/NarrationPresenter")
}

fn default_audio_dir() -> PathBuf {
    PathBuf::from("public/audio/narrations")
}

/// Where each artifact family lives, relative to the project root unless
/// absolute.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Narration scripts (`{course}.json` / `{course}.ts`).
    #[serde(default = "default_scripts_dir")]
    pub scripts_dir: PathBuf,

    /// Scene configuration files (`{name}Scenes.ts`).
    #[serde(default = "default_scenes_dir")]
    pub scenes_dir: PathBuf,

    /// Generated audio, one subdirectory per course.
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            scripts_dir: default_scripts_dir(),
            scenes_dir: default_scenes_dir(),
            audio_dir: default_audio_dir(),
        }
    }
}

impl PathsConfig {
    #[must_use]
    pub fn scripts_dir_in(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.scripts_dir)
    }

    #[must_use]
    pub fn scenes_dir_in(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.scenes_dir)
    }

    #[must_use]
    pub fn audio_dir_in(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.audio_dir)
    }
}
