use std::path::Path;

use anyhow::{Context, bail};
use nqa_check::{CheckSettings, render_text};
use nqa_config::layout::discover_course_ids;
use nqa_config::NqaConfig;

use crate::cli::commands::CheckArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{self, table::TableOptions};

/// Handle `nqa check`.
///
/// Prints the report, then fails when it contains any error so the process
/// exits non-zero.
pub fn handle(
    args: &CheckArgs,
    flags: &GlobalFlags,
    project_root: &Path,
    config: &NqaConfig,
) -> anyhow::Result<()> {
    let Some(course) = args.course.as_deref() else {
        println!("{}", usage(&discover_course_ids(config, project_root)));
        bail!("no course given");
    };

    let report = nqa_check::check_course(config, project_root, course)
        .with_context(|| format!("failed to check course '{course}'"))?;

    match flags.format {
        OutputFormat::Text => {
            let cap = CheckSettings::from_config(config).warning_display_cap;
            print!("{}", render_text(&report, cap));
        }
        OutputFormat::Json => output::print_json(&report)?,
        OutputFormat::Table => {
            println!("{}", output::render_report_table(&report, TableOptions::from_prefs()));
        }
    }

    if !report.passed() {
        bail!(
            "course '{course}' failed with {} error(s)",
            report.error_count()
        );
    }
    Ok(())
}

fn usage(courses: &[String]) -> String {
    let mut out = String::from("Usage: nqa check <COURSE>\n\nAvailable courses:");
    if courses.is_empty() {
        out.push_str("\n  (none found)");
    }
    for course in courses {
        out.push_str("\n  ");
        out.push_str(course);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn usage_lists_courses() {
        let text = usage(&["bayes".to_string(), "fractions".to_string()]);
        assert_eq!(
            text,
            "Usage: nqa check <COURSE>\n\nAvailable courses:\n  bayes\n  fractions"
        );
    }

    #[test]
    fn usage_without_courses_says_none() {
        assert!(usage(&[]).ends_with("(none found)"));
    }

    #[test]
    fn missing_course_argument_fails() {
        let root = tempfile::tempdir().unwrap();
        let flags = GlobalFlags {
            format: OutputFormat::Text,
            quiet: true,
            project: None,
            color: crate::cli::ColorMode::Never,
        };
        let err = handle(
            &CheckArgs { course: None },
            &flags,
            root.path(),
            &NqaConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "no course given");
    }
}
