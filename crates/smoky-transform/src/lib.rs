//! In-memory transforms for Smoky data preparation.
//!
//! # Table cleaning
//!
//! Cells equal to the "no data" sentinel `-999` are detected by [`is_sentinel`].
//! [`reconcile_last_columns`] merges the two trailing alternate-measurement
//! columns, preferring the first when it holds data, and
//! [`drop_sentinel_rows`] removes rows whose data columns carry no data.
//!
//! # Record flattening
//!
//! [`flatten`] turns the yearly totals and per-year species documents into a
//! [`smoky_model::FlattenedDocument`].

mod error;
mod filter;
mod flatten;
mod reconcile;
mod sentinel;

pub use error::{Result, TransformError};
pub use filter::{FilterStats, drop_sentinel_rows};
pub use flatten::{flatten, parse_year};
pub use reconcile::{Reconciliation, reconcile_last_columns};
pub use sentinel::{SENTINEL, SENTINEL_TEXT, is_sentinel};
