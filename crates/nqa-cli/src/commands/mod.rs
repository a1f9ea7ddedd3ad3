use std::path::Path;

use nqa_config::NqaConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod check;
pub mod config;
pub mod courses;
pub mod schema;

/// Route a parsed command to its handler.
pub fn dispatch(
    command: &Commands,
    flags: &GlobalFlags,
    project_root: &Path,
    config: &NqaConfig,
) -> anyhow::Result<()> {
    match command {
        Commands::Check(args) => check::handle(args, flags, project_root, config),
        Commands::Courses => courses::handle(flags, project_root, config),
        Commands::Schema(args) => schema::handle(args, flags),
        Commands::Config => config::handle(flags, config),
    }
}
