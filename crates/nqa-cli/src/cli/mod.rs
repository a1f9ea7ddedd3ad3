use clap::Parser;

pub mod commands;
pub mod global;

pub use commands::Commands;
pub use global::{ColorMode, GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `nqa` binary.
#[derive(Debug, Parser)]
#[command(
    name = "nqa",
    version,
    about = "narration-qa - consistency checks for narration scripts, scenes, and audio"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json, table
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Colorize output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            project: self.project.clone(),
            color: self.color,
        }
    }
}
