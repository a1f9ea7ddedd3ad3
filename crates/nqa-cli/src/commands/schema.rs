use anyhow::bail;
use nqa_schema::SchemaRegistry;

use crate::cli::commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Handle `nqa schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    let Some(name) = args.name.as_deref() else {
        let names = registry.list();
        if flags.format == OutputFormat::Json {
            output::print_json(&names)?;
        } else {
            for name in names {
                println!("{name}");
            }
        }
        return Ok(());
    };

    match registry.get(name) {
        Some(schema) => output::print_json(schema),
        None => bail!(
            "unknown schema '{name}' (available: {})",
            registry.list().join(", ")
        ),
    }
}
