//! Error types for transforms.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// A year key is not a positive integer.
    #[error("invalid year key '{key}' in {source_name} document")]
    InvalidYear {
        key: String,
        source_name: &'static str,
    },

    /// Table schema edit failed.
    #[error(transparent)]
    Model(#[from] smoky_model::ModelError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
