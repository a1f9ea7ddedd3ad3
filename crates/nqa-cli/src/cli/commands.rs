use clap::{Args, Subcommand};

/// Top-level commands of the `nqa` binary.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Check one course for consistency across script, scenes, and audio.
    Check(CheckArgs),
    /// List course ids found in the script and audio directories.
    Courses,
    /// Print a registered JSON Schema, or list the names.
    Schema(SchemaArgs),
    /// Print the effective configuration as TOML.
    Config,
}

/// Arguments for `nqa check`.
#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Course id, e.g. `basic-arithmetic`. Omit to list available courses.
    pub course: Option<String>,
}

/// Arguments for `nqa schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (`manifest`, `script`, `report`).
    pub name: Option<String>,
}
