//! Input and output locations for the pipelines.

use std::path::PathBuf;

/// Default table cleaned in place when no paths are given.
pub const DEFAULT_CLEAN_PATH: &str = "visibility.csv";

/// Default yearly totals document.
pub const DEFAULT_TOTALS_PATH: &str = "data/biodiversityWormDataYears.json";

/// Default per-year species document.
pub const DEFAULT_SPECIES_PATH: &str = "data/biodiversityWormData.json";

/// Default flattened output document.
pub const DEFAULT_FLATTEN_OUTPUT_PATH: &str = "data/biodiversityWormDataFinal.json";

/// Paths used by the table cleaner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_CLEAN_PATH),
            output_path: PathBuf::from(DEFAULT_CLEAN_PATH),
        }
    }
}

/// Paths used by the biodiversity flattener.
///
/// Both inputs are optional on disk; a missing file contributes no records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenConfig {
    pub totals_path: PathBuf,
    pub species_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            totals_path: PathBuf::from(DEFAULT_TOTALS_PATH),
            species_path: PathBuf::from(DEFAULT_SPECIES_PATH),
            output_path: PathBuf::from(DEFAULT_FLATTEN_OUTPUT_PATH),
        }
    }
}
