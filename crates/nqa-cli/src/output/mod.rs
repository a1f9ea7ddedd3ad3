use nqa_core::Report;
use serde::Serialize;
use serde_json::Value;

use crate::ui;

pub mod table;

use table::{TableOptions, render_table};

/// Print a serializable value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One row per finding, followed by the verdict line.
#[must_use]
pub fn render_report_table(report: &Report, options: TableOptions) -> String {
    let rows = report
        .findings
        .iter()
        .map(|finding| {
            vec![
                finding.severity.to_string(),
                finding.stage.to_string(),
                finding.subject.clone().unwrap_or_else(|| "-".to_string()),
                finding.message.clone(),
            ]
        })
        .collect::<Vec<_>>();

    let verdict = if report.passed() { "PASS" } else { "FAIL" };
    let code = if report.passed() { "32" } else { "31" };
    let footer = format!(
        "{}  {} error(s), {} warning(s)",
        ui::paint(verdict, code, options.color),
        report.error_count(),
        report.warning_count()
    );

    if rows.is_empty() {
        return format!("{}: no findings\n{footer}", report.course_id);
    }
    let table = render_table(&["severity", "stage", "subject", "message"], &rows, options);
    format!("{table}\n{footer}")
}

/// Render a list of serializable records as a table, columns in first-seen
/// field order.
pub fn render_rows<T: Serialize>(items: &[T], options: TableOptions) -> anyhow::Result<String> {
    let values = items
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Ok(String::from("(no rows)"));
    }

    let mut headers = Vec::<String>::new();
    for map in values.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }
    if headers.is_empty() {
        let rows = values.iter().map(|v| vec![value_to_cell(v)]).collect::<Vec<_>>();
        return Ok(render_table(&["value"], &rows, options));
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = values
        .iter()
        .map(|value| {
            headers
                .iter()
                .map(|header| value.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    Ok(render_table(&header_refs, &rows, options))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => String::from(if *v { "yes" } else { "no" }),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) => items.iter().map(value_to_cell).collect::<Vec<_>>().join(", "),
        other @ Value::Object(_) => {
            serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>"))
        }
    }
}
