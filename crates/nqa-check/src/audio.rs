//! Audio integrity: manifest identity, per-entry thresholds, the files on
//! disk, and manifest totals.

use std::collections::HashSet;

use nqa_core::{Finding, Manifest, Stage};

use crate::settings::CheckSettings;
use crate::voices::LoadedVoice;

/// Check every loaded voice, in layout order.
#[must_use]
pub fn check_audio(voices: &[LoadedVoice], settings: &CheckSettings) -> Vec<Finding> {
    voices
        .iter()
        .flat_map(|voice| check_voice(voice, settings))
        .collect()
}

fn check_voice(voice: &LoadedVoice, settings: &CheckSettings) -> Vec<Finding> {
    let key = voice.key();
    let Some(manifest) = voice.manifest.as_ref() else {
        return voice
            .disk
            .files
            .iter()
            .filter(|(_, size)| **size < settings.min_audio_bytes)
            .map(|(name, size)| too_small_on_disk(name, *size, key).with_subject(key))
            .collect();
    };
    let mut findings = Vec::new();

    if manifest.voice_key != key {
        findings.push(
            Finding::error(
                Stage::Audio,
                format!(
                    "manifest declares voice '{}' but lives in the location of voice '{key}'",
                    manifest.voice_key
                ),
            )
            .with_subject(key),
        );
    }

    for entry in &manifest.files {
        if entry.size_bytes < settings.min_audio_bytes {
            findings.push(
                Finding::error(
                    Stage::Audio,
                    format!(
                        "audio file too small: {} ({} bytes, voice {key})",
                        entry.filename, entry.size_bytes
                    ),
                )
                .with_subject(&entry.line_id),
            );
        }
        if entry.duration_secs < settings.min_duration_secs {
            findings.push(
                Finding::warning(
                    Stage::Audio,
                    format!(
                        "audio suspiciously short: {} ({:.2}s, voice {key})",
                        entry.filename, entry.duration_secs
                    ),
                )
                .with_subject(&entry.line_id),
            );
        }
        match voice.disk.size_of(&entry.filename) {
            None => findings.push(
                Finding::error(
                    Stage::Audio,
                    format!("audio file missing on disk: {} (voice {key})", entry.filename),
                )
                .with_subject(&entry.line_id),
            ),
            // A declared size already below the threshold was reported above.
            Some(actual) if actual < settings.min_audio_bytes && actual != entry.size_bytes => {
                findings.push(
                    too_small_on_disk(&entry.filename, actual, key).with_subject(&entry.line_id),
                );
            }
            Some(actual) if actual != entry.size_bytes => findings.push(
                Finding::warning(
                    Stage::Audio,
                    format!(
                        "audio file size differs from manifest: {} ({actual} bytes on disk, {} declared, voice {key})",
                        entry.filename, entry.size_bytes
                    ),
                )
                .with_subject(&entry.line_id),
            ),
            Some(_) => {}
        }
    }

    let listed: HashSet<&str> = manifest.files.iter().map(|f| f.filename.as_str()).collect();
    for (name, &size) in &voice.disk.files {
        if listed.contains(name.as_str()) {
            continue;
        }
        if size < settings.min_audio_bytes {
            findings.push(too_small_on_disk(name, size, key).with_subject(key));
        }
        findings.push(
            Finding::warning(
                Stage::Audio,
                format!("audio file not listed in manifest: {name} (voice {key})"),
            )
            .with_subject(key),
        );
    }

    findings.extend(total_findings(manifest, key));
    findings
}

fn too_small_on_disk(file_name: &str, size: u64, key: &str) -> Finding {
    Finding::error(
        Stage::Audio,
        format!("audio file too small: {file_name} ({size} bytes on disk, voice {key})"),
    )
}

#[allow(clippy::cast_precision_loss)]
fn total_findings(manifest: &Manifest, key: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    let size_sum = manifest.summed_size_bytes();
    if manifest.total_size_bytes != size_sum {
        findings.push(
            Finding::warning(
                Stage::Audio,
                format!(
                    "manifest total_size {} does not match the sum of its files ({size_sum}) for voice {key}",
                    manifest.total_size_bytes
                ),
            )
            .with_subject(key),
        );
    }

    let duration_sum = manifest.summed_duration_secs();
    let tolerance = 0.01 * (manifest.file_count().max(1) as f64);
    if (manifest.total_duration_secs - duration_sum).abs() > tolerance {
        findings.push(
            Finding::warning(
                Stage::Audio,
                format!(
                    "manifest total_duration {:.2}s does not match the sum of its files ({duration_sum:.2}s) for voice {key}",
                    manifest.total_duration_secs
                ),
            )
            .with_subject(key),
        );
    }

    findings
}
