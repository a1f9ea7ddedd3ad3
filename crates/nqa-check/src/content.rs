//! Content matching for structured sections: the scene's declared operands
//! and operation should agree with what the line says.

use nqa_core::{Finding, SceneEntry, ScriptLine, Stage};
use tracing::debug;

use crate::settings::CheckSettings;

/// Check matched pairs whose section is structured.
#[must_use]
pub fn match_content(pairs: &[(&ScriptLine, &SceneEntry)], settings: &CheckSettings) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (line, scene) in pairs {
        if !settings.is_structured(&line.section_id) {
            continue;
        }

        if scene.params.is_empty() {
            if !line.numbers.is_empty() {
                let numbers = line
                    .numbers
                    .iter()
                    .map(i64::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                findings.push(
                    Finding::warning(
                        Stage::Content,
                        format!(
                            "line {} mentions numbers [{numbers}] but its scene has no params",
                            line.line_id
                        ),
                    )
                    .with_subject(&line.line_id),
                );
            }
            continue;
        }

        // Operands are often spoken as words the extractor does not know, so
        // an absent operand only gets logged.
        for operand in scene.operands() {
            if !line.numbers.contains(&operand) {
                debug!(
                    line = %line.line_id,
                    operand,
                    "operand not found in line text"
                );
            }
        }

        if let Some(operation) = scene.operation() {
            if operation != line.section_id {
                findings.push(
                    Finding::error(
                        Stage::Content,
                        format!(
                            "operation/section mismatch for line {}: operation '{operation}' in section '{}'",
                            line.line_id, line.section_id
                        ),
                    )
                    .with_subject(&line.line_id),
                );
            }
        }
    }

    findings
}
