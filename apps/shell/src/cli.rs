//! # CLI Argument Definitions
//!
//! Command-line structure of the `fabrik` demo shell.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "fabrik")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Build shapes by name from a factory registry")]
pub(crate) struct Cli {
    /// Config file with factory settings (e.g. `fabrik.toml`)
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// List registered keys and the types bound to them
    #[command(alias = "ls")]
    Keys {},
    /// Build one or more instances by key
    Make {
        /// Registered key (e.g. `circle`)
        key: String,
        /// Use shared (reference-counted) handles
        #[arg(long)]
        shared: bool,
        /// Number of instances to build
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
}
