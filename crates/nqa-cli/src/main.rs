use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use nqa_config::NqaConfig;

mod cli;
mod commands;
mod output;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("nqa error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let project_root = resolve_project_root(flags.project.as_deref())?;
    let config = NqaConfig::load_with_dotenv(&project_root)
        .context("failed to load narration-qa configuration")?;
    tracing::debug!(root = %project_root.display(), "configuration loaded");

    commands::dispatch(&cli.command, &flags, &project_root, &config)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("NQA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    let Some(path) = project_override else {
        return std::env::current_dir().context("failed to read current directory");
    };

    let explicit = PathBuf::from(path);
    if explicit.is_dir() {
        return Ok(explicit);
    }
    anyhow::bail!(
        "invalid --project '{}': directory does not exist",
        explicit.display()
    );
}
