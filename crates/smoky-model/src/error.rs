use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// A row does not have one cell per header.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Column index outside the table schema.
    #[error("column index {index} out of range for {width} columns")]
    ColumnOutOfRange { index: usize, width: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
