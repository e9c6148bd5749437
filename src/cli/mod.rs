//! Command-line interface for merge-config
//!
//! Takes the existing config and a new-models config, merges the latter into
//! the former, and rewrites the existing file only when something was added.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod merge;
mod utils;

/// Merge custom model entries from a new-models config into an existing config
#[derive(Parser)]
#[command(name = "merge-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    merge: merge::MergeArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for the merge summary.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    merge::run(cli.merge)
}
