//! Output writers for Smoky data preparation.
//!
//! - [`write_csv_table`]: comma-delimited table with header row, no index column
//! - [`render_json`] / [`write_json_document`]: flattened records, 4-space indent

mod common;
mod csv_table;
mod error;
mod json;

pub use common::ensure_parent_dir;
pub use csv_table::write_csv_table;
pub use error::{OutputError, Result};
pub use json::{JSON_INDENT, render_json, write_json_document};
