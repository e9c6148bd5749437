//! Config file loading and saving

use crate::domain::ConfigDocument;
use crate::error::{DocumentRole, MergeError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

const INDENT: &[u8] = b"    ";

pub fn load_document(path: &Path, role: DocumentRole) -> Result<ConfigDocument> {
    let content = fs::read(path)
        .map_err(|source| MergeError::Read { role, path: path.to_path_buf(), source })?;

    let document: ConfigDocument = serde_json::from_slice(&content)
        .map_err(|source| MergeError::Parse { role, path: path.to_path_buf(), source })?;

    tracing::info!(
        "Loaded {} from {} ({} models)",
        role,
        path.display(),
        document.entries.len()
    );
    Ok(document)
}

/// Serialize with 4-space indentation and no trailing newline.
pub fn render_document(document: &ConfigDocument) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer).map_err(MergeError::Serialize)?;
    Ok(out)
}

/// Overwrite `path` with the rendered document.
///
/// Rendering happens before the file is opened, so a serialization failure
/// leaves the target untouched.
pub fn save_document(path: &Path, document: &ConfigDocument) -> Result<()> {
    let bytes = render_document(document)?;
    fs::write(path, &bytes)
        .map_err(|source| MergeError::Write { path: path.to_path_buf(), source })?;

    tracing::info!("Wrote {} models to {}", document.entries.len(), path.display());
    Ok(())
}
