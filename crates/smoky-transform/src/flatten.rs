//! Flattening of the nested yearly biodiversity documents.

use serde_json::Value;
use smoky_model::{FlattenedDocument, SpeciesRecord, YearRecord};
use tracing::debug;

use crate::error::{Result, TransformError};

/// Parse a year key such as `"2020"` into a positive integer.
pub fn parse_year(key: &str) -> Option<u32> {
    key.trim().parse::<u32>().ok().filter(|year| *year > 0)
}

/// Build the combined document from yearly totals and per-year species counts.
///
/// Entries keep their input order. The two inputs are not cross-checked: a
/// year present in only one of them appears only in the matching list.
pub fn flatten(
    totals: Vec<(String, Value)>,
    species: Vec<(String, Vec<(String, Value)>)>,
) -> Result<FlattenedDocument> {
    let years = totals
        .into_iter()
        .map(|(key, total)| {
            let year = year_or_error(&key, "totals")?;
            Ok(YearRecord { year, total })
        })
        .collect::<Result<Vec<_>>>()?;

    let layers = species
        .into_iter()
        .map(|(key, counts)| {
            let year = year_or_error(&key, "species")?;
            Ok(SpeciesRecord { year, counts })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        years = years.len(),
        layers = layers.len(),
        "flattened biodiversity documents"
    );
    Ok(FlattenedDocument { years, layers })
}

fn year_or_error(key: &str, source_name: &'static str) -> Result<u32> {
    parse_year(key).ok_or_else(|| TransformError::InvalidYear {
        key: key.to_string(),
        source_name,
    })
}
