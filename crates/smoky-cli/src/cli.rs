//! CLI argument definitions for the `smoky` tools.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use smoky_cli::config::{
    CleanConfig, DEFAULT_CLEAN_PATH, DEFAULT_FLATTEN_OUTPUT_PATH, DEFAULT_SPECIES_PATH,
    DEFAULT_TOTALS_PATH, FlattenConfig,
};

#[derive(Parser)]
#[command(
    name = "smoky",
    version,
    about = "Prepare Smoky Mountains observation data for visualization",
    long_about = "Prepare park observation data for charting.\n\n\
                  `clean` removes -999 \"no data\" rows from a CSV table, merging its\n\
                  two trailing measurement columns first. `flatten` combines the yearly\n\
                  biodiversity totals and species counts into one JSON document."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Remove rows whose data columns are all -999.
    Clean(CleanArgs),

    /// Combine yearly totals and species counts into one JSON document.
    Flatten(FlattenArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the input CSV.
    #[arg(short = 'i', long = "input", value_name = "PATH", default_value = DEFAULT_CLEAN_PATH)]
    pub input: PathBuf,

    /// Path to the cleaned output CSV (may equal the input).
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = DEFAULT_CLEAN_PATH)]
    pub output: PathBuf,
}

impl From<&CleanArgs> for CleanConfig {
    fn from(args: &CleanArgs) -> Self {
        Self {
            input_path: args.input.clone(),
            output_path: args.output.clone(),
        }
    }
}

#[derive(Parser)]
pub struct FlattenArgs {
    /// JSON document mapping year to total animals spotted.
    #[arg(long = "totals", value_name = "PATH", default_value = DEFAULT_TOTALS_PATH)]
    pub totals: PathBuf,

    /// JSON document mapping year to per-species counts.
    #[arg(long = "species", value_name = "PATH", default_value = DEFAULT_SPECIES_PATH)]
    pub species: PathBuf,

    /// Path of the combined output document.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_FLATTEN_OUTPUT_PATH
    )]
    pub output: PathBuf,
}

impl From<&FlattenArgs> for FlattenConfig {
    fn from(args: &FlattenArgs) -> Self {
        Self {
            totals_path: args.totals.clone(),
            species_path: args.species.clone(),
            output_path: args.output.clone(),
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
