//! Voice configuration.

use serde::{Deserialize, Serialize};

fn default_primary() -> String {
    "xiaoxiao".to_string()
}

fn default_alternates() -> Vec<String> {
    vec!["yunxi".to_string()]
}

/// Voices expected for every course.
///
/// The primary voice's audio lives directly in the course audio directory;
/// each alternate lives in a subdirectory named after its key.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VoicesConfig {
    #[serde(default = "default_primary")]
    pub primary: String,

    #[serde(default = "default_alternates")]
    pub alternates: Vec<String>,
}

impl Default for VoicesConfig {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            alternates: default_alternates(),
        }
    }
}

impl VoicesConfig {
    /// Primary first, then alternates in configured order.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.alternates.iter().map(String::as_str))
    }
}
