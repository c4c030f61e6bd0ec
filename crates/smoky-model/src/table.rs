//! Column-ordered table of text cells.

use crate::error::{ModelError, Result};

/// A delimited table loaded in memory.
///
/// The first header is the key column (typically a date). Every row holds
/// exactly one cell per header; cells keep the text they were read with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, rejecting rows whose width differs from the header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let expected = headers.len();
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(ModelError::RaggedRow {
                row,
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns, key column included.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows (the header is not counted).
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first column with the given name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Iterate the cells of one column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .filter_map(move |row| row.get(index).map(String::as_str))
    }

    /// Mutable access to every row, for in-place cell rewrites.
    ///
    /// Row width must not change; use [`Table::remove_column`] for schema edits.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [String]> + '_ {
        self.rows.iter_mut().map(Vec::as_mut_slice)
    }

    /// Drop a column from the schema and from every row, returning its header.
    pub fn remove_column(&mut self, index: usize) -> Result<String> {
        if index >= self.headers.len() {
            return Err(ModelError::ColumnOutOfRange {
                index,
                width: self.headers.len(),
            });
        }
        for row in &mut self.rows {
            row.remove(index);
        }
        Ok(self.headers.remove(index))
    }

    /// Keep only the rows for which `keep` returns true, preserving order.
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[String]) -> bool,
    {
        self.rows.retain(|row| keep(row));
    }

    /// Split the table into headers and rows.
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<String>>) {
        (self.headers, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    fn sample() -> Table {
        Table::new(
            strings(&["date", "a", "b"]),
            vec![strings(&["d1", "1", "2"]), strings(&["d2", "3", "4"])],
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let result = Table::new(
            strings(&["date", "a"]),
            vec![strings(&["d1", "1"]), strings(&["d2"])],
        );
        assert!(matches!(
            result,
            Err(ModelError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_remove_column() {
        let mut table = sample();
        let removed = table.remove_column(2).unwrap();
        assert_eq!(removed, "b");
        assert_eq!(table.headers(), &strings(&["date", "a"])[..]);
        assert_eq!(table.rows()[1], strings(&["d2", "3"]));
    }

    #[test]
    fn test_remove_column_out_of_range() {
        let mut table = sample();
        assert!(matches!(
            table.remove_column(3),
            Err(ModelError::ColumnOutOfRange { index: 3, width: 3 })
        ));
    }

    #[test]
    fn test_retain_rows() {
        let mut table = sample();
        table.retain_rows(|row| row[1] != "1");
        assert_eq!(table.height(), 1);
        assert_eq!(table.rows()[0][0], "d2");
    }

    #[test]
    fn test_column_values() {
        let table = sample();
        assert_eq!(table.column_index("b"), Some(2));
        let values: Vec<&str> = table.column_values(2).collect();
        assert_eq!(values, vec!["2", "4"]);
    }
}
