//! Scene configuration loader.
//!
//! Any object carrying string `lineId` and `sectionId` is a scene entry. Its
//! operands live under `lineState.params`.

use std::collections::BTreeMap;

use nqa_core::SceneEntry;
use serde_json::Value;
use tracing::{debug, warn};

use crate::source::{SourceFormat, parse_document};

/// Parse scene configuration text into entries, in source order.
///
/// Best effort: an unparsable artifact yields no entries.
#[must_use]
pub fn parse_scenes(source: &str, format: SourceFormat) -> Vec<SceneEntry> {
    match parse_document(source, format) {
        Ok(trees) => {
            let entries = extract_scene_entries(&trees);
            debug!(entries = entries.len(), ?format, "parsed scene configuration");
            entries
        }
        Err(error) => {
            warn!(%error, "scene configuration could not be parsed");
            Vec::new()
        }
    }
}

/// Walk literal trees and collect every scene entry.
#[must_use]
pub fn extract_scene_entries(trees: &[Value]) -> Vec<SceneEntry> {
    let mut entries = Vec::new();
    for tree in trees {
        walk(tree, &mut entries);
    }
    entries
}

fn walk(value: &Value, out: &mut Vec<SceneEntry>) {
    match value {
        Value::Array(items) => items.iter().for_each(|item| walk(item, out)),
        Value::Object(map) => {
            if let Some(entry) = as_entry(value) {
                out.push(entry);
            }
            map.values().for_each(|child| walk(child, out));
        }
        _ => {}
    }
}

fn as_entry(value: &Value) -> Option<SceneEntry> {
    let line_id = value.get("lineId")?.as_str()?;
    let section_id = value.get("sectionId")?.as_str()?;
    let line_state = value.get("lineState");

    let params: BTreeMap<String, Value> = line_state
        .and_then(|state| state.get("params"))
        .and_then(Value::as_object)
        .map(|params| params.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default();

    let has_line_state = match line_state {
        None | Some(Value::Null) => false,
        Some(Value::Object(state)) => !state.is_empty(),
        Some(_) => true,
    };

    Some(SceneEntry {
        line_id: line_id.to_string(),
        section_id: section_id.to_string(),
        params,
        has_line_state,
    })
}
