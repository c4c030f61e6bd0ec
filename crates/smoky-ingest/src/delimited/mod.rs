//! Delimited table reading.

mod reader;
mod sniff;

pub use reader::{LoadedTable, ParseMode, read_csv_table};
pub use sniff::sniff_delimiter;
