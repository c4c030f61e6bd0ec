//! Library components of the `smoky` command-line tools.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
