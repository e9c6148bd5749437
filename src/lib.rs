//! merge-config: merge custom model entries between JSON config files
//!
//! Entries from a new-models document are appended to an existing document
//! when their `model` id is not already present. Existing entries are never
//! reordered or replaced.

pub mod config;
pub mod domain;
pub mod error;
pub mod merge;

pub use domain::{ConfigDocument, ModelEntry};
pub use error::{MergeError, Result};
pub use merge::{merge, MergeOutcome, ModelKeySet};
