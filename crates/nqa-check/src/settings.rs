//! Check tunables, resolved from configuration.

use std::collections::BTreeSet;

use nqa_config::NqaConfig;

/// Thresholds and section sets a check runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckSettings {
    pub min_audio_bytes: u64,
    pub min_duration_secs: f64,
    pub structured_sections: BTreeSet<String>,
    pub warning_display_cap: usize,
}

impl CheckSettings {
    #[must_use]
    pub fn from_config(config: &NqaConfig) -> Self {
        Self {
            min_audio_bytes: config.thresholds.min_audio_bytes,
            min_duration_secs: config.thresholds.min_duration_secs,
            structured_sections: config.content.structured_sections.iter().cloned().collect(),
            warning_display_cap: config.thresholds.warning_display_cap,
        }
    }

    #[must_use]
    pub fn is_structured(&self, section_id: &str) -> bool {
        self.structured_sections.contains(section_id)
    }
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self::from_config(&NqaConfig::default())
    }
}
