//! # nqa-config
//!
//! Layered configuration loading for narration-qa using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NQA_*` prefix, `__` as separator)
//! 2. Project-level `.nqa/config.toml`
//! 3. User-level `~/.config/nqa/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `NQA_THRESHOLDS__MIN_AUDIO_BYTES` -> `thresholds.min_audio_bytes`,
//! `NQA_VOICES__PRIMARY` -> `voices.primary`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use nqa_config::{CourseLayout, NqaConfig};
//!
//! let root = Path::new(".");
//! let config = NqaConfig::load_with_dotenv(root).expect("config");
//! let layout = CourseLayout::resolve(&config, root, "basic-arithmetic");
//! println!("scenes: {:?}", layout.scenes.resolved);
//! ```

mod content;
mod courses;
mod error;
pub mod layout;
mod paths;
mod thresholds;
mod voices;

pub use content::ContentConfig;
pub use courses::CourseOverride;
pub use error::ConfigError;
pub use layout::{ArtifactLocation, CourseLayout, VoiceLocation};
pub use paths::PathsConfig;
pub use thresholds::ThresholdsConfig;
pub use voices::VoicesConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the project root.
pub const LOCAL_CONFIG_PATH: &str = ".nqa/config.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NqaConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub voices: VoicesConfig,
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default = "courses::default_courses")]
    pub courses: BTreeMap<String, CourseOverride>,
}

impl Default for NqaConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            voices: VoicesConfig::default(),
            thresholds: ThresholdsConfig::default(),
            content: ContentConfig::default(),
            courses: courses::default_courses(),
        }
    }
}

impl NqaConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the project root (falling back to the current
    /// directory) before building the figment.
    pub fn load_with_dotenv(project_root: &Path) -> Result<Self, ConfigError> {
        let env_path = project_root.join(".env");
        if env_path.exists() {
            let _ = dotenvy::from_path(&env_path);
        } else {
            let _ = dotenvy::dotenv();
        }
        Self::load(project_root)
    }

    /// Build the figment provider chain for a project root.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("NQA_").split("__"))
    }

    /// Reject configurations the checker cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.voices.primary.trim().is_empty() {
            return Err(invalid("voices.primary", "must not be empty"));
        }

        let mut seen = HashSet::new();
        for voice in self.voices.all() {
            if voice.trim().is_empty() {
                return Err(invalid("voices.alternates", "voice keys must not be empty"));
            }
            if !seen.insert(voice) {
                return Err(invalid(
                    "voices.alternates",
                    &format!("voice '{voice}' is listed more than once"),
                ));
            }
        }

        let min_duration = self.thresholds.min_duration_secs;
        if min_duration.is_nan() || min_duration < 0.0 {
            return Err(invalid(
                "thresholds.min_duration_secs",
                "must be a non-negative number",
            ));
        }

        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("nqa").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
