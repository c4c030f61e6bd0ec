//! CSV file reading with a strict parse and a tolerant fallback.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use smoky_model::Table;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

use super::sniff::sniff_delimiter;

/// How a table was obtained from its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Comma-delimited, every record no wider than the header.
    Strict,
    /// Sniffed delimiter; `skipped` records were dropped as unparsable.
    Tolerant { delimiter: u8, skipped: usize },
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict parse"),
            Self::Tolerant { delimiter, skipped } => write!(
                f,
                "tolerant parse (delimiter {:?}, {skipped} lines skipped)",
                char::from(*delimiter)
            ),
        }
    }
}

/// A table together with the parse mode that produced it.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: Table,
    pub mode: ParseMode,
}

/// Why the strict parse gave up.
#[derive(Debug)]
enum StrictFailure {
    /// No header row at all; the tolerant parse cannot do better.
    Empty,
    /// A record could not be parsed or was wider than the header.
    Malformed(String),
}

/// Reads a delimited file with a header row into a [`Table`].
///
/// The file is decoded as UTF-8 with any byte-order mark removed. A strict
/// comma-delimited parse is tried first. When a record is malformed or wider
/// than the header, the file is parsed again with a sniffed delimiter and the
/// offending lines are skipped. Records shorter than the header are padded
/// with empty cells in both modes.
pub fn read_csv_table(path: &Path) -> Result<LoadedTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path).map_err(|e| IngestError::from_io(path, e))?;
    let text = decode_utf8(path, &bytes)?;

    match parse_strict(&text) {
        Ok(table) => {
            debug!(
                path = %path.display(),
                columns = table.width(),
                rows = table.height(),
                "parsed CSV"
            );
            Ok(LoadedTable {
                table,
                mode: ParseMode::Strict,
            })
        }
        Err(StrictFailure::Empty) => Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        }),
        Err(StrictFailure::Malformed(reason)) => {
            warn!(
                path = %path.display(),
                reason = %reason,
                "strict CSV parse failed, retrying with tolerant parse"
            );
            parse_tolerant(path, &text)
        }
    }
}

/// Decode file bytes as UTF-8, dropping a leading BOM.
fn decode_utf8<'a>(path: &Path, bytes: &'a [u8]) -> Result<Cow<'a, str>> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(IngestError::InvalidUtf8 {
            path: path.to_path_buf(),
        });
    }
    Ok(text)
}

fn parse_strict(text: &str) -> std::result::Result<Table, StrictFailure> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| StrictFailure::Malformed(e.to_string()))?
        .clone();
    if headers.is_empty() {
        return Err(StrictFailure::Empty);
    }
    let width = headers.len();

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| StrictFailure::Malformed(e.to_string()))?;
        if record.len() > width {
            return Err(StrictFailure::Malformed(format!(
                "record {} has {} fields, expected {width}",
                index + 1,
                record.len()
            )));
        }
        rows.push(padded_row(&record, width));
    }
    Table::new(record_strings(&headers), rows).map_err(|e| StrictFailure::Malformed(e.to_string()))
}

fn parse_tolerant(path: &Path, text: &str) -> Result<LoadedTable> {
    let delimiter = sniff_delimiter(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .clone();
    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let width = headers.len();

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        match record {
            Ok(record) if record.len() <= width => rows.push(padded_row(&record, width)),
            Ok(_) | Err(_) => skipped += 1,
        }
    }
    let table =
        Table::new(record_strings(&headers), rows).map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    debug!(
        path = %path.display(),
        delimiter = %char::from(delimiter),
        skipped,
        rows = table.height(),
        "parsed CSV with tolerant parser"
    );
    Ok(LoadedTable {
        table,
        mode: ParseMode::Tolerant { delimiter, skipped },
    })
}

fn record_strings(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

fn padded_row(record: &StringRecord, width: usize) -> Vec<String> {
    let mut row = record_strings(record);
    row.resize(width, String::new());
    row
}
