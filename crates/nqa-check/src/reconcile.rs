//! Identity reconciliation across script, scenes, and voice manifests.

use std::collections::{HashMap, HashSet};

use nqa_core::{Finding, SceneEntry, ScriptLine, Stage};

use crate::voices::LoadedVoice;

/// Reconciler output: findings plus the line/scene pairs that matched.
#[derive(Debug, Default)]
pub struct Reconciliation<'a> {
    /// Matched pairs in script order.
    pub pairs: Vec<(&'a ScriptLine, &'a SceneEntry)>,
    pub findings: Vec<Finding>,
}

/// Join script lines, scene entries, and voices by line id.
///
/// Finding order is fixed: missing scenes, orphan scenes, count comparisons,
/// duplicate ids, then per-voice coverage.
#[must_use]
pub fn reconcile<'a>(
    lines: &'a [ScriptLine],
    scenes: &'a [SceneEntry],
    voices: &[LoadedVoice],
) -> Reconciliation<'a> {
    // Later duplicates overwrite earlier ones.
    let scene_by_id: HashMap<&str, &SceneEntry> =
        scenes.iter().map(|s| (s.line_id.as_str(), s)).collect();
    let script_ids: HashSet<&str> = lines.iter().map(|l| l.line_id.as_str()).collect();

    let mut findings = Vec::new();
    let mut pairs = Vec::new();
    let mut paired: HashSet<&str> = HashSet::new();

    for line in lines {
        match scene_by_id.get(line.line_id.as_str()) {
            // Repeated ids pair once; the duplicate finding covers the rest.
            Some(scene) => {
                if paired.insert(line.line_id.as_str()) {
                    pairs.push((line, *scene));
                }
            }
            None => findings.push(
                Finding::error(
                    Stage::Reconcile,
                    format!("missing scene configuration: {}", line.line_id),
                )
                .with_subject(&line.line_id),
            ),
        }
    }

    for scene in scenes {
        if !script_ids.contains(scene.line_id.as_str()) {
            findings.push(
                Finding::warning(
                    Stage::Reconcile,
                    format!("orphan scene configuration: {}", scene.line_id),
                )
                .with_subject(&scene.line_id),
            );
        }
    }

    findings.extend(count_findings(lines.len(), scenes.len(), voices));
    findings.extend(duplicate_findings(
        lines.iter().map(|l| l.line_id.as_str()),
        "duplicate line id in script",
    ));
    findings.extend(duplicate_findings(
        scenes.iter().map(|s| s.line_id.as_str()),
        "duplicate scene configuration",
    ));
    for voice in voices {
        findings.extend(coverage_findings(lines, voice));
    }

    Reconciliation { pairs, findings }
}

fn count_findings(script_count: usize, scene_count: usize, voices: &[LoadedVoice]) -> Vec<Finding> {
    let mut findings = Vec::new();

    if script_count != scene_count {
        findings.push(Finding::error(
            Stage::Reconcile,
            format!(
                "script has {script_count} lines but scene configuration has {scene_count} entries"
            ),
        ));
    }

    if let Some((primary, alternates)) = voices.split_first() {
        let primary_count = primary.audio_count();
        for alternate in alternates {
            let count = alternate.audio_count();
            if count != primary_count {
                findings.push(
                    Finding::error(
                        Stage::Reconcile,
                        format!(
                            "voice {} has {count} audio files but primary voice {} has {primary_count}",
                            alternate.key(),
                            primary.key()
                        ),
                    )
                    .with_subject(alternate.key()),
                );
            }
        }
    }

    for voice in voices {
        let count = voice.audio_count();
        if count != script_count {
            findings.push(
                Finding::warning(
                    Stage::Reconcile,
                    format!(
                        "voice {} has {count} audio files for {script_count} script lines",
                        voice.key()
                    ),
                )
                .with_subject(voice.key()),
            );
        }
    }

    findings
}

/// One error per id that occurs more than once, in order of first repeat.
fn duplicate_findings<'a>(ids: impl Iterator<Item = &'a str>, label: &str) -> Vec<Finding> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut findings = Vec::new();
    for id in ids {
        if !seen.insert(id) && reported.insert(id) {
            findings.push(
                Finding::error(Stage::Reconcile, format!("{label}: {id}")).with_subject(id),
            );
        }
    }
    findings
}

fn coverage_findings(lines: &[ScriptLine], voice: &LoadedVoice) -> Vec<Finding> {
    let Some(manifest) = voice.manifest.as_ref() else {
        return Vec::new();
    };
    let key = voice.key();
    let mut findings = Vec::new();

    let mut covered = HashSet::new();
    for line in lines {
        if !covered.insert(line.line_id.as_str()) {
            continue;
        }
        if manifest.entry_for(&line.line_id).is_none() {
            findings.push(
                Finding::warning(
                    Stage::Reconcile,
                    format!("no audio for line {} in voice {key}", line.line_id),
                )
                .with_subject(&line.line_id),
            );
        }
    }

    let text_by_id: HashMap<&str, &str> = lines
        .iter()
        .map(|l| (l.line_id.as_str(), l.text.as_str()))
        .collect();
    for entry in &manifest.files {
        match text_by_id.get(entry.line_id.as_str()) {
            None => findings.push(
                Finding::warning(
                    Stage::Reconcile,
                    format!("audio for unknown line {} in voice {key}", entry.line_id),
                )
                .with_subject(&entry.line_id),
            ),
            Some(text) if *text != entry.text => findings.push(
                Finding::warning(
                    Stage::Reconcile,
                    format!(
                        "audio generated from outdated text: {} in voice {key}",
                        entry.line_id
                    ),
                )
                .with_subject(&entry.line_id),
            ),
            Some(_) => {}
        }
    }

    findings
}
