//! Input loading for Smoky data preparation.
//!
//! # Features
//!
//! - **CSV Loading**: strict comma-delimited parse with a tolerant fallback that
//!   sniffs the delimiter and skips unparsable lines; UTF-8 BOM is removed
//! - **JSON Documents**: yearly totals and per-year species counts, where a
//!   missing file simply means no data
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use smoky_ingest::{read_csv_table, read_species, read_totals};
//!
//! let loaded = read_csv_table(Path::new("visibility.csv"))?;
//! println!("{} rows via {}", loaded.table.height(), loaded.mode);
//!
//! let totals = read_totals(Path::new("data/biodiversityWormDataYears.json"))?;
//! let species = read_species(Path::new("data/biodiversityWormData.json"))?;
//! ```

mod delimited;
mod error;
mod json;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use delimited::{LoadedTable, ParseMode, read_csv_table, sniff_delimiter};

// === JSON Documents ===
pub use json::{SpeciesEntry, TotalEntry, read_species, read_totals};
