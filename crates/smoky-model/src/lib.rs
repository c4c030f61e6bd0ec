//! Data model shared by the Smoky data preparation crates.
//!
//! - [`Table`]: an in-memory delimited table with a header row, cells kept as
//!   their original text.
//! - [`YearRecord`], [`SpeciesRecord`], [`FlattenedDocument`]: the flat
//!   observation records produced from the nested biodiversity documents.

mod error;
mod records;
mod table;

pub use error::{ModelError, Result};
pub use records::{
    FlattenedDocument, SpeciesRecord, TOTAL_FIELD, YEAR_FIELD, YearRecord,
};
pub use table::Table;
