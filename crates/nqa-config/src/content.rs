//! Content matching configuration.

use serde::{Deserialize, Serialize};

fn default_structured_sections() -> Vec<String> {
    ["addition", "subtraction", "multiplication", "division"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Sections whose scenes carry structured operands that must agree with
    /// the spoken line.
    #[serde(default = "default_structured_sections")]
    pub structured_sections: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            structured_sections: default_structured_sections(),
        }
    }
}

impl ContentConfig {
    #[must_use]
    pub fn is_structured(&self, section_id: &str) -> bool {
        self.structured_sections.iter().any(|s| s == section_id)
    }
}
