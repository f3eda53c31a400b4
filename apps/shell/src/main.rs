mod cli;
mod logging;
mod shapes;

use crate::cli::{Cli, Commands};
use anyhow::{Context, Result, bail};
use clap::Parser;
use fabrik_factory::FactoryConfig;
use fabrik_factory::config::load_config;
use std::io::{self, Write};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => load_config::<FactoryConfig>(Some(path))
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => FactoryConfig::default(),
    };
    info!(duplicates = ?config.duplicates, "Factory configured");

    let shapes = shapes::builtin(&config)?;
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Keys {} => {
            for key in shapes.keys() {
                let bound = shapes.type_name_of(key.as_str()).unwrap_or("?");
                writeln!(out, "{key}\t{bound}")?;
            }
        },
        Commands::Make { key, shared, count } => {
            if !shapes.contains(key.as_str()) {
                bail!("Unknown shape '{key}' (known: {})", shapes.list_keys().join(", "));
            }
            for _ in 0..count {
                let line = if shared {
                    shapes.try_create_shared(key.as_str())?.to_string()
                } else {
                    shapes.try_create_unique(key.as_str())?.to_string()
                };
                writeln!(out, "{line}")?;
            }
        },
    }

    Ok(())
}
