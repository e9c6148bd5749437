//! Merge command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::format_summary;
use merge_config::config::{load_document, save_document, DocumentRole};
use merge_config::merge::merge;

#[derive(Args)]
pub struct MergeArgs {
    /// Existing config file; rewritten in place when new models are added
    #[arg(value_name = "EXISTING_CONFIG")]
    pub existing: PathBuf,

    /// Config file supplying candidate models
    #[arg(value_name = "NEW_MODELS_CONFIG")]
    pub new_models: PathBuf,

    /// Report what would be added without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

pub fn run(args: MergeArgs) -> Result<()> {
    // Both inputs must decode before anything is merged or written.
    let existing = load_document(&args.existing, DocumentRole::Existing)?;
    let incoming = load_document(&args.new_models, DocumentRole::Incoming)?;

    let (merged, outcome) = merge(existing, incoming);
    tracing::debug!(
        "Merge result: {} added, {} skipped, {} total",
        outcome.added_count(),
        outcome.skipped,
        merged.entries.len()
    );

    if !outcome.is_noop() && !args.dry_run {
        save_document(&args.existing, &merged)?;
    }

    println!("{}", format_summary(&outcome, args.dry_run));
    Ok(())
}
