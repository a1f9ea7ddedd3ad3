use anyhow::Context;
use nqa_config::NqaConfig;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Handle `nqa config`: show the configuration after every layer is merged.
pub fn handle(flags: &GlobalFlags, config: &NqaConfig) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Json {
        return output::print_json(config);
    }
    print!("{}", render_toml(config)?);
    Ok(())
}

fn render_toml(config: &NqaConfig) -> anyhow::Result<String> {
    toml::to_string_pretty(config).context("failed to serialize configuration as TOML")
}
