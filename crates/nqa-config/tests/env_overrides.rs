//! Environment variables take precedence over TOML and defaults.

use figment::Jail;
use nqa_config::NqaConfig;

#[test]
fn env_overrides_thresholds() {
    Jail::expect_with(|jail| {
        jail.set_env("NQA_THRESHOLDS__MIN_AUDIO_BYTES", "2048");
        jail.set_env("NQA_THRESHOLDS__MIN_DURATION_SECS", "0.75");

        let config: NqaConfig = NqaConfig::figment(jail.directory()).extract()?;
        assert_eq!(config.thresholds.min_audio_bytes, 2048);
        assert!((config.thresholds.min_duration_secs - 0.75).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".nqa")).map_err(|e| e.to_string())?;
        jail.create_file(
            ".nqa/config.toml",
            r#"
[voices]
primary = "yunyang"
"#,
        )?;
        jail.set_env("NQA_VOICES__PRIMARY", "xiaoxiao");

        let config: NqaConfig = NqaConfig::figment(jail.directory()).extract()?;
        assert_eq!(config.voices.primary, "xiaoxiao");
        Ok(())
    });
}

#[test]
fn unrelated_env_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("QA_THRESHOLDS__MIN_AUDIO_BYTES", "1");

        let config: NqaConfig = NqaConfig::figment(jail.directory()).extract()?;
        assert_eq!(config.thresholds.min_audio_bytes, 1000);
        Ok(())
    });
}
