use std::path::PathBuf;

use smoky_ingest::ParseMode;
use smoky_model::FlattenedDocument;
use smoky_transform::Reconciliation;

/// Result of cleaning one table.
#[derive(Debug)]
pub struct CleanOutcome {
    pub output: PathBuf,
    /// Rows written.
    pub kept: usize,
    /// Rows loaded, counted after the column merge and before filtering.
    pub total: usize,
    pub reconciliation: Option<Reconciliation>,
    pub parse_mode: ParseMode,
}

impl CleanOutcome {
    /// One-line report printed after a successful run.
    pub fn report_line(&self) -> String {
        format!(
            "Wrote cleaned CSV to {} (kept {} of {} data rows)",
            self.output.display(),
            self.kept,
            self.total
        )
    }
}

/// Result of flattening the biodiversity documents.
#[derive(Debug)]
pub struct FlattenOutcome {
    pub output: PathBuf,
    pub document: FlattenedDocument,
    pub totals_found: bool,
    pub species_found: bool,
}
