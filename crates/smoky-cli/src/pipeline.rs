//! Cleaning and flattening pipelines.
//!
//! Each pipeline loads its inputs, transforms them fully in memory, and only
//! then writes its output file.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use smoky_ingest::{LoadedTable, read_csv_table, read_species, read_totals};
use smoky_output::{write_csv_table, write_json_document};
use smoky_transform::{drop_sentinel_rows, flatten, reconcile_last_columns};

use crate::config::FlattenConfig;
use crate::types::{CleanOutcome, FlattenOutcome};

/// Remove sentinel-only rows from a table, merging its two trailing columns first.
///
/// Fails with [`smoky_ingest::IngestError::FileNotFound`] before writing
/// anything when `input` does not exist.
pub fn clean_csv(input: &Path, output: &Path) -> Result<CleanOutcome> {
    let span = info_span!(
        "clean",
        input = %input.display(),
        output = %output.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let LoadedTable {
        mut table,
        mode: parse_mode,
    } = read_csv_table(input)?;
    info!(
        columns = table.width(),
        rows = table.height(),
        mode = %parse_mode,
        "loaded table"
    );

    let reconciliation = reconcile_last_columns(&mut table)
        .with_context(|| format!("merge trailing columns of {}", input.display()))?;
    if let Some(merge) = &reconciliation {
        info!(
            kept = %merge.kept,
            dropped = %merge.dropped,
            filled = merge.filled_from_fallback,
            "merged trailing columns"
        );
    }

    let stats = drop_sentinel_rows(&mut table);
    write_csv_table(&table, output)?;

    info!(
        kept = stats.kept,
        dropped = stats.dropped(),
        duration_ms = start.elapsed().as_millis() as u64,
        "clean complete"
    );
    Ok(CleanOutcome {
        output: output.to_path_buf(),
        kept: stats.kept,
        total: stats.total,
        reconciliation,
        parse_mode,
    })
}

/// Merge the yearly totals and species documents into one flat document.
///
/// Missing inputs are not an error; they leave their output list empty.
pub fn flatten_json(config: &FlattenConfig) -> Result<FlattenOutcome> {
    let span = info_span!("flatten", output = %config.output_path.display());
    let _guard = span.enter();

    let totals_found = config.totals_path.is_file();
    let species_found = config.species_path.is_file();
    let totals = read_totals(&config.totals_path)?;
    let species = read_species(&config.species_path)?;

    let document = flatten(totals, species).with_context(|| {
        format!(
            "flatten {} and {}",
            config.totals_path.display(),
            config.species_path.display()
        )
    })?;
    write_json_document(&document, &config.output_path)?;

    info!(
        years = document.years.len(),
        layers = document.layers.len(),
        "flatten complete"
    );
    Ok(FlattenOutcome {
        output: config.output_path.clone(),
        document,
        totals_found,
        species_found,
    })
}
