//! Full checks against course trees laid out on disk.

use std::fs;
use std::path::{Path, PathBuf};

use nqa_check::{CheckError, CheckSettings, check, check_course, render_text};
use nqa_config::{CourseLayout, NqaConfig};
use nqa_core::{Severity, Stage};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

const AUDIO_BYTES: usize = 24_000;

/// A project root with the conventional directory layout.
struct Project {
    dir: TempDir,
}

impl Project {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    /// Script with one section; `lines` are `(id, text)`.
    fn script(&self, course: &str, section: &str, lines: &[(&str, &str)]) {
        let body: String = lines
            .iter()
            .map(|(id, text)| format!("        {{ id: '{id}', text: '{text}' }},\n"))
            .collect();
        self.write(
            &format!("src/narrations/scripts/{course}.ts"),
            &format!(
                "export const script = {{\n  id: '{course}',\n  sections: [\n    {{\n      id: '{section}',\n      lines: [\n{body}      ],\n    }},\n  ],\n}}\n"
            ),
        );
    }

    /// Scene file; `entries` are `(line id, params as TS source or "")`.
    fn scenes(&self, file: &str, section: &str, entries: &[(&str, &str)]) {
        let body: String = entries
            .iter()
            .map(|(id, params)| {
                let state = if params.is_empty() {
                    String::new()
                } else {
                    format!(" lineState: {{ params: {params} }},")
                };
                format!("  {{ lineId: '{id}', sectionId: '{section}',{state} }},\n")
            })
            .collect();
        self.write(
            &format!("src/components/NarrationPresenter/{file}"),
            &format!("export const scenes = [\n{body}]\n"),
        );
    }

    /// Manifest plus matching mp3 files for one voice.
    fn voice(&self, course: &str, key: &str, primary: bool, lines: &[(&str, &str)], section: &str) {
        let dir = if primary {
            format!("public/audio/narrations/{course}")
        } else {
            format!("public/audio/narrations/{course}/{key}")
        };
        let files: Vec<serde_json::Value> = lines
            .iter()
            .map(|(id, text)| {
                let filename = format!("{section}-{id}.mp3");
                self.write(&format!("{dir}/{filename}"), &"x".repeat(AUDIO_BYTES));
                json!({
                    "script_id": course,
                    "section_id": section,
                    "line_id": id,
                    "filename": filename,
                    "path": format!("audio/narrations/{course}/{filename}"),
                    "duration": 2.0,
                    "size": AUDIO_BYTES,
                    "text": text,
                })
            })
            .collect();
        let count = files.len();
        let manifest = json!({
            "script_id": course,
            "voice": format!("zh-CN-{key}"),
            "voice_key": key,
            "files": files,
            "total_duration": 2.0 * count as f64,
            "total_size": AUDIO_BYTES * count,
        });
        self.write(
            &format!("{dir}/manifest.json"),
            &serde_json::to_string_pretty(&manifest).unwrap(),
        );
    }

    fn layout(&self, course: &str) -> CourseLayout {
        CourseLayout::resolve(&NqaConfig::default(), self.root(), course)
    }
}

const DEMO_LINES: [(&str, &str); 2] = [("l1", "大家好"), ("l2", "我们开始吧")];

fn demo_project() -> Project {
    let project = Project::new();
    project.script("demo", "intro", &DEMO_LINES);
    project.scenes("demoScenes.ts", "intro", &[("l1", ""), ("l3", "")]);
    project.voice("demo", "xiaoxiao", true, &DEMO_LINES, "intro");
    project.voice("demo", "yunxi", false, &DEMO_LINES, "intro");
    project
}

#[test]
fn demo_course_fails_with_exactly_one_error() {
    let project = demo_project();
    let report = check(&project.layout("demo"), &CheckSettings::default()).unwrap();

    let errors: Vec<&str> = report.errors().map(|f| f.message.as_str()).collect();
    assert_eq!(errors, vec!["missing scene configuration: l2"]);
    assert!(!report.passed());

    let warnings: Vec<&str> = report.warnings().map(|f| f.message.as_str()).collect();
    assert_eq!(warnings, vec!["orphan scene configuration: l3"]);

    assert_eq!(report.summary.script_lines, 2);
    assert_eq!(report.summary.scene_entries, 2);
    assert_eq!(report.summary.voices.len(), 2);
    assert!(report.summary.voices.iter().all(|v| v.audio_files == 2));
}

#[test]
fn consistent_course_passes() {
    let project = Project::new();
    project.script("demo", "intro", &DEMO_LINES);
    project.scenes("demoScenes.ts", "intro", &[("l1", ""), ("l2", "")]);
    project.voice("demo", "xiaoxiao", true, &DEMO_LINES, "intro");
    project.voice("demo", "yunxi", false, &DEMO_LINES, "intro");

    let report = check(&project.layout("demo"), &CheckSettings::default()).unwrap();
    assert!(report.findings.is_empty(), "{:?}", report.findings);
    assert!(report.passed());
}

#[test]
fn operation_mismatch_is_the_only_error() {
    let lines = [("a1", "3 加 2 等于 5")];
    let project = Project::new();
    project.script("basic-arithmetic", "addition", &lines);
    project.scenes(
        "basicArithmeticScenes.ts",
        "addition",
        &[("a1", "{ num1: 3, num2: 2, operation: 'subtraction' }")],
    );
    project.voice("basic-arithmetic", "xiaoxiao", true, &lines, "addition");
    project.voice("basic-arithmetic", "yunxi", false, &lines, "addition");

    let report = check(&project.layout("basic-arithmetic"), &CheckSettings::default()).unwrap();
    let errors: Vec<_> = report.errors().collect();
    assert_eq!(errors.len(), 1, "{:?}", report.findings);
    assert_eq!(errors[0].stage, Stage::Content);
    assert!(errors[0].message.contains("subtraction"));
    assert!(errors[0].message.contains("addition"));
    assert!(!report.passed());
}

#[test]
fn repeated_line_id_reports_the_mismatch_once() {
    let lines = [("a1", "3 加 2 等于 5"), ("a1", "3 加 2 等于 5")];
    let project = Project::new();
    project.script("basic-arithmetic", "addition", &lines);
    project.scenes(
        "basicArithmeticScenes.ts",
        "addition",
        &[("a1", "{ num1: 3, num2: 2, operation: 'subtraction' }")],
    );

    let report = check(&project.layout("basic-arithmetic"), &CheckSettings::default()).unwrap();
    let mismatches = report
        .errors()
        .filter(|f| f.message.starts_with("operation/section mismatch for line a1"))
        .count();
    assert_eq!(mismatches, 1);
    assert!(
        report
            .errors()
            .any(|f| f.message == "duplicate line id in script: a1")
    );
}

#[test]
fn empty_audio_on_disk_fails_the_course() {
    let project = Project::new();
    project.script("demo", "intro", &DEMO_LINES);
    project.scenes("demoScenes.ts", "intro", &[("l1", ""), ("l2", "")]);
    project.voice("demo", "xiaoxiao", true, &DEMO_LINES, "intro");
    project.voice("demo", "yunxi", false, &DEMO_LINES, "intro");
    project.write("public/audio/narrations/demo/intro-l1.mp3", "");

    let report = check(&project.layout("demo"), &CheckSettings::default()).unwrap();
    let errors: Vec<&str> = report.errors().map(|f| f.message.as_str()).collect();
    assert_eq!(
        errors,
        vec!["audio file too small: intro-l1.mp3 (0 bytes on disk, voice xiaoxiao)"]
    );
    assert!(!report.passed());
}

#[test]
fn checking_twice_gives_identical_reports() {
    let project = demo_project();
    let layout = project.layout("demo");
    let first = check(&layout, &CheckSettings::default()).unwrap();
    let second = check(&layout, &CheckSettings::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn malformed_manifest_aborts_naming_the_file() {
    let project = demo_project();
    let path = project.write(
        "public/audio/narrations/demo/yunxi/manifest.json",
        r#"{ "script_id": "demo", "voice": "v", "files": "nope" }"#,
    );

    let err = check(&project.layout("demo"), &CheckSettings::default()).unwrap_err();
    match &err {
        CheckError::MalformedManifest { path: reported, reason } => {
            assert_eq!(reported, &path);
            assert!(reason.contains("Validation failed"), "{reason}");
        }
        other => panic!("expected malformed manifest, got {other}"),
    }
    assert!(err.to_string().contains("yunxi"));
}

#[test]
fn missing_manifest_is_a_finding_not_an_abort() {
    let project = demo_project();
    fs::remove_file(project.root().join("public/audio/narrations/demo/yunxi/manifest.json")).unwrap();

    let report = check(&project.layout("demo"), &CheckSettings::default()).unwrap();
    let first = &report.findings[0];
    assert_eq!(first.stage, Stage::Artifacts);
    assert_eq!(first.severity, Severity::Error);
    assert!(first.message.starts_with("manifest not found for voice yunxi"));
    assert!(
        report
            .errors()
            .any(|f| f.message == "voice yunxi has 0 audio files but primary voice xiaoxiao has 2")
    );
}

#[test]
fn missing_scene_file_lists_candidates() {
    let project = Project::new();
    project.script("game-theory", "intro", &DEMO_LINES);

    let report = check(&project.layout("game-theory"), &CheckSettings::default()).unwrap();
    let scene_error = report
        .errors()
        .find(|f| f.message.starts_with("scene configuration not found"))
        .expect("scene error");
    assert!(scene_error.message.contains("gameTheoryScenes.ts"));
    assert!(scene_error.message.contains("gametheoryScenes.ts"));
    assert!(scene_error.message.contains("game-theoryScenes.ts"));
}

#[test]
fn course_override_picks_short_scene_name() {
    let lines = [("l1", "一次函数")];
    let project = Project::new();
    project.script("linear-function", "intro", &lines);
    project.scenes("linearScenes.ts", "intro", &[("l1", "")]);
    project.voice("linear-function", "xiaoxiao", true, &lines, "intro");
    project.voice("linear-function", "yunxi", false, &lines, "intro");

    let report = check(&project.layout("linear-function"), &CheckSettings::default()).unwrap();
    assert!(report.passed(), "{:?}", report.findings);
}

#[test]
fn project_config_changes_thresholds() {
    let project = demo_project();
    project.scenes("demoScenes.ts", "intro", &[("l1", ""), ("l2", "")]);
    project.write(".nqa/config.toml", "[thresholds]\nmin_audio_bytes = 50000\n");

    let config = NqaConfig::load(project.root()).unwrap();

    let report = check_course(&config, project.root(), "demo").unwrap();
    let too_small = report
        .errors()
        .filter(|f| f.message.starts_with("audio file too small"))
        .count();
    assert_eq!(too_small, 4);
}

#[test]
fn rendered_report_ends_with_verdict() {
    let project = demo_project();
    let report = check(&project.layout("demo"), &CheckSettings::default()).unwrap();
    let text = render_text(&report, 15);
    assert!(text.starts_with("Narration check: demo\n"));
    assert!(text.ends_with("FAIL: 1 error(s), 1 warning(s)\n"));
}
