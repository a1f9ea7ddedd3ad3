//! Explicit per-course artifact overrides.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Artifact locations declared for one course. Relative paths resolve
/// against the matching artifact directory (`scripts_dir`, `scenes_dir`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CourseOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenes: Option<PathBuf>,
}

/// Courses whose scene files use a shortened name.
pub(crate) fn default_courses() -> BTreeMap<String, CourseOverride> {
    [
        ("linear-function", "linearScenes.ts"),
        ("quadratic-function", "quadraticScenes.ts"),
        ("conic-sections", "conicScenes.ts"),
    ]
    .into_iter()
    .map(|(course, scenes)| {
        (
            course.to_string(),
            CourseOverride {
                script: None,
                scenes: Some(PathBuf::from(scenes)),
            },
        )
    })
    .collect()
}
