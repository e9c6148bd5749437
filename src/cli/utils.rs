//! Shared CLI utilities.

use merge_config::merge::MergeOutcome;

/// One-line summary of a merge. Dry runs also list the models that would be added.
pub fn format_summary(outcome: &MergeOutcome, dry_run: bool) -> String {
    if outcome.is_noop() {
        let line = "✓ No new models to add - all models already exist";
        return if dry_run { format!("(dry run) {line}") } else { line.to_string() };
    }

    if !dry_run {
        return format!("✓ Merged {} new models into config", outcome.added_count());
    }

    let mut lines = vec![format!(
        "(dry run) ✓ Would merge {} new models into config",
        outcome.added_count()
    )];
    lines.extend(outcome.added_models.iter().map(|m| format!("  + {m}")));
    lines.join("\n")
}
