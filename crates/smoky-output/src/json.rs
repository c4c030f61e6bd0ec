//! Flattened document writer.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use smoky_model::FlattenedDocument;
use tracing::debug;

use crate::common::ensure_parent_dir;
use crate::error::{OutputError, Result};

/// Indentation used for pretty-printed documents.
pub const JSON_INDENT: &[u8] = b"    ";

/// Render the document as pretty-printed JSON with 4-space indentation.
///
/// No trailing newline is appended.
pub fn render_json(document: &FlattenedDocument) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(JSON_INDENT));
    document.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Render and write the document, creating the parent directory if needed.
pub fn write_json_document(document: &FlattenedDocument, path: &Path) -> Result<()> {
    let rendered = render_json(document)?;
    ensure_parent_dir(path)?;
    fs::write(path, rendered).map_err(|e| OutputError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(
        path = %path.display(),
        years = document.years.len(),
        layers = document.layers.len(),
        "wrote JSON document"
    );
    Ok(())
}
