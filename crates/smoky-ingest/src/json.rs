//! Loading of the nested biodiversity JSON documents.
//!
//! Both documents are optional: a missing file yields an empty collection.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// One `year -> total` entry, year key kept as written.
pub type TotalEntry = (String, Value);

/// One `year -> {species -> count}` entry, species in document order.
pub type SpeciesEntry = (String, Vec<(String, Value)>);

/// Reads the yearly totals document (`{"2020": 10, ...}`).
pub fn read_totals(path: &Path) -> Result<Vec<TotalEntry>> {
    let Some(document) = read_optional_object(path)? else {
        return Ok(Vec::new());
    };
    let entries: Vec<TotalEntry> = document.into_iter().collect();
    debug!(path = %path.display(), years = entries.len(), "loaded totals document");
    Ok(entries)
}

/// Reads the per-year species document (`{"2020": {"fox": 3}, ...}`).
pub fn read_species(path: &Path) -> Result<Vec<SpeciesEntry>> {
    let Some(document) = read_optional_object(path)? else {
        return Ok(Vec::new());
    };
    let mut entries = Vec::with_capacity(document.len());
    for (year, counts) in document {
        let Value::Object(counts) = counts else {
            return Err(IngestError::InvalidDocument {
                path: path.to_path_buf(),
                reason: format!("year {year} does not map to an object of species counts"),
            });
        };
        entries.push((year, counts.into_iter().collect()));
    }
    debug!(path = %path.display(), years = entries.len(), "loaded species document");
    Ok(entries)
}

/// Parse a top-level JSON object, or `None` when the file does not exist.
fn read_optional_object(path: &Path) -> Result<Option<Map<String, Value>>> {
    if !path.is_file() {
        info!(path = %path.display(), "optional JSON document not found, treating as empty");
        return Ok(None);
    }
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::from_io(path, e))?;
    let value: Value = serde_json::from_str(&text).map_err(|e| IngestError::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    match value {
        Value::Object(map) => Ok(Some(map)),
        _ => Err(IngestError::InvalidDocument {
            path: path.to_path_buf(),
            reason: "top-level value is not an object".to_string(),
        }),
    }
}
