//! Config document loading and saving
//!
//! Reads and parses the two input documents, and writes the merged result
//! back with stable 4-space indentation.

pub mod loader;

pub use crate::error::DocumentRole;
pub use loader::{load_document, render_document, save_document};
