//! CSV table writer.

use std::path::Path;

use csv::WriterBuilder;
use smoky_model::Table;
use tracing::debug;

use crate::common::ensure_parent_dir;
use crate::error::{OutputError, Result};

/// Write a table as comma-delimited text with its header row.
///
/// Fields are quoted only when needed. No index column is added.
pub fn write_csv_table(table: &Table, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let csv_error = |source: csv::Error| OutputError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new().from_path(path).map_err(csv_error)?;
    writer.write_record(table.headers()).map_err(csv_error)?;
    for row in table.rows() {
        writer.write_record(row).map_err(csv_error)?;
    }
    writer.flush().map_err(|e| OutputError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(
        path = %path.display(),
        rows = table.height(),
        "wrote CSV table"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_text_and_quotes_when_needed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table::new(
            vec!["date".to_string(), "note".to_string()],
            vec![
                vec!["2020-01-01".to_string(), "hazy, light".to_string()],
                vec!["2020-01-02".to_string(), "5.0".to_string()],
            ],
        )
        .unwrap();

        write_csv_table(&table, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "date,note\n2020-01-01,\"hazy, light\"\n2020-01-02,5.0\n"
        );
    }

    #[test]
    fn test_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.csv");
        let table = Table::new(vec!["date".to_string(), "v".to_string()], Vec::new()).unwrap();

        write_csv_table(&table, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "date,v\n");
    }
}
