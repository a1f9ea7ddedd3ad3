//! Audio thresholds and report display limits.

use serde::{Deserialize, Serialize};

const fn default_min_audio_bytes() -> u64 {
    1000
}

const fn default_min_duration_secs() -> f64 {
    0.3
}

const fn default_warning_display_cap() -> usize {
    15
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThresholdsConfig {
    /// Audio entries smaller than this are failed syntheses (error).
    #[serde(default = "default_min_audio_bytes")]
    pub min_audio_bytes: u64,

    /// Audio entries shorter than this are suspicious (warning).
    #[serde(default = "default_min_duration_secs")]
    pub min_duration_secs: f64,

    /// Warnings shown in the text report before truncation.
    #[serde(default = "default_warning_display_cap")]
    pub warning_display_cap: usize,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            min_audio_bytes: default_min_audio_bytes(),
            min_duration_secs: default_min_duration_secs(),
            warning_display_cap: default_warning_display_cap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ThresholdsConfig::default();
        assert_eq!(config.min_audio_bytes, 1000);
        assert!((config.min_duration_secs - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.warning_display_cap, 15);
    }
}
