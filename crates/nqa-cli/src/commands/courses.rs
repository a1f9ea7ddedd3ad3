use std::path::Path;

use nqa_config::layout::discover_course_ids;
use nqa_config::{CourseLayout, NqaConfig};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{self, table::TableOptions};

/// What was found on disk for one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRow {
    pub course: String,
    pub script: Option<String>,
    pub scenes: Option<String>,
    /// Voices whose manifest exists.
    pub voices: Vec<String>,
}

/// Handle `nqa courses`.
pub fn handle(flags: &GlobalFlags, project_root: &Path, config: &NqaConfig) -> anyhow::Result<()> {
    let rows = course_rows(config, project_root);
    match flags.format {
        OutputFormat::Text => {
            for row in &rows {
                println!("{}", row.course);
            }
        }
        OutputFormat::Json => output::print_json(&rows)?,
        OutputFormat::Table => {
            println!("{}", output::render_rows(&rows, TableOptions::from_prefs())?);
        }
    }
    Ok(())
}

#[must_use]
pub fn course_rows(config: &NqaConfig, project_root: &Path) -> Vec<CourseRow> {
    discover_course_ids(config, project_root)
        .into_iter()
        .map(|course| {
            let layout = CourseLayout::resolve(config, project_root, &course);
            CourseRow {
                script: file_name(layout.script.resolved.as_deref()),
                scenes: file_name(layout.scenes.resolved.as_deref()),
                voices: layout
                    .voices
                    .iter()
                    .filter(|voice| voice.manifest_path().is_file())
                    .map(|voice| voice.voice_key.clone())
                    .collect(),
                course,
            }
        })
        .collect()
}

fn file_name(path: Option<&Path>) -> Option<String> {
    path.and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rows_report_resolved_artifacts() {
        let root = tempfile::tempdir().unwrap();
        let base = root.path();
        fs::create_dir_all(base.join("src/narrations/scripts")).unwrap();
        fs::write(base.join("src/narrations/scripts/game-theory.ts"), "export const s = {}").unwrap();
        fs::create_dir_all(base.join("src/components/NarrationPresenter")).unwrap();
        fs::write(
            base.join("src/components/NarrationPresenter/gameTheoryScenes.ts"),
            "export const s = []",
        )
        .unwrap();
        fs::create_dir_all(base.join("public/audio/narrations/game-theory/yunxi")).unwrap();
        fs::write(base.join("public/audio/narrations/game-theory/manifest.json"), "{}").unwrap();
        fs::create_dir_all(base.join("public/audio/narrations/orphan-audio")).unwrap();

        let rows = course_rows(&NqaConfig::default(), base);
        assert_eq!(
            rows,
            vec![
                CourseRow {
                    course: "game-theory".into(),
                    script: Some("game-theory.ts".into()),
                    scenes: Some("gameTheoryScenes.ts".into()),
                    voices: vec!["xiaoxiao".into()],
                },
                CourseRow {
                    course: "orphan-audio".into(),
                    script: None,
                    scenes: None,
                    voices: vec![],
                },
            ]
        );
    }
}
