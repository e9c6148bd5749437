//! Merge-by-key of model entries

use crate::domain::{ConfigDocument, ModelEntry};
use std::collections::HashSet;
use tracing::debug;

/// Set of model identifiers already present in a document.
#[derive(Debug, Default, Clone)]
pub struct ModelKeySet {
    keys: HashSet<String>,
}

impl ModelKeySet {
    pub fn from_entries(entries: &[ModelEntry]) -> Self {
        Self { keys: entries.iter().map(|e| e.model.clone()).collect() }
    }

    /// Returns `true` when the key was not present before.
    pub fn insert(&mut self, model: &str) -> bool {
        self.keys.insert(model.to_string())
    }
}

/// What a merge did to the base document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Model keys appended to the base, in append order.
    pub added_models: Vec<String>,
    /// Incoming entries dropped because their key was already taken.
    pub skipped: usize,
}

impl MergeOutcome {
    pub fn added_count(&self) -> usize {
        self.added_models.len()
    }

    /// A no-op merge must leave storage untouched.
    pub fn is_noop(&self) -> bool {
        self.added_models.is_empty()
    }
}

/// Append every entry of `incoming` whose `model` key is not yet in `base`.
///
/// Pre-existing entries keep their position; new ones go at the end in
/// incoming order. A key added earlier in the same merge blocks later
/// duplicates from `incoming`.
pub fn merge(mut base: ConfigDocument, incoming: ConfigDocument) -> (ConfigDocument, MergeOutcome) {
    let mut seen = ModelKeySet::from_entries(&base.entries);
    let mut outcome = MergeOutcome::default();

    for entry in incoming.entries {
        if seen.insert(&entry.model) {
            debug!("Adding model {:?}", entry.model);
            outcome.added_models.push(entry.model.clone());
            base.entries.push(entry);
        } else {
            debug!("Skipping model {:?}: already present", entry.model);
            outcome.skipped += 1;
        }
    }

    (base, outcome)
}
