//! Narration script loader.
//!
//! A section is any object carrying a string `id` and an array `lines`, at
//! any depth. Each object in `lines` with a non-empty string `id` and a string
//! `text` becomes a [`ScriptLine`] tagged with the enclosing section id.

use nqa_core::ScriptLine;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::numbers::extract_numbers;
use crate::source::{SourceFormat, parse_document};

/// Parse script text into lines, in source order.
///
/// An unparsable artifact yields no lines.
#[must_use]
pub fn parse_script(source: &str, format: SourceFormat) -> Vec<ScriptLine> {
    match parse_document(source, format) {
        Ok(trees) => {
            let lines = extract_script_lines(&trees);
            debug!(lines = lines.len(), ?format, "parsed narration script");
            lines
        }
        Err(error) => {
            warn!(%error, "narration script could not be parsed");
            Vec::new()
        }
    }
}

/// Walk literal trees and collect every script line.
#[must_use]
pub fn extract_script_lines(trees: &[Value]) -> Vec<ScriptLine> {
    let mut lines = Vec::new();
    for tree in trees {
        walk(tree, &mut lines);
    }
    lines
}

fn walk(value: &Value, out: &mut Vec<ScriptLine>) {
    match value {
        Value::Array(items) => {
            for item in items {
                walk(item, out);
            }
        }
        Value::Object(map) => {
            if let Some((section_id, lines)) = as_section(map) {
                collect_section(section_id, lines, out);
                for (key, child) in map {
                    if key != "lines" {
                        walk(child, out);
                    }
                }
            } else {
                for child in map.values() {
                    walk(child, out);
                }
            }
        }
        _ => {}
    }
}

fn as_section(map: &Map<String, Value>) -> Option<(&str, &Vec<Value>)> {
    let id = map.get("id")?.as_str()?;
    let lines = map.get("lines")?.as_array()?;
    Some((id, lines))
}

fn collect_section(section_id: &str, lines: &[Value], out: &mut Vec<ScriptLine>) {
    for line in lines {
        let id = line.get("id").and_then(Value::as_str).filter(|id| !id.is_empty());
        let text = line.get("text").and_then(Value::as_str);
        match (id, text) {
            (Some(line_id), Some(text)) => out.push(ScriptLine {
                section_id: section_id.to_string(),
                line_id: line_id.to_string(),
                text: text.to_string(),
                numbers: extract_numbers(text),
            }),
            _ => debug!(section = section_id, "skipping line without id or text"),
        }
    }
}
