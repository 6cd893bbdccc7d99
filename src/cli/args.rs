//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// Validates CSV files for use in TADC digitised content data imports.
#[derive(Debug, Parser)]
#[command(name = "tadc-import-csv-validator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the CSV file to validate
    pub csv_file: PathBuf,

    /// Number of header rows to skip before validating
    #[arg(allow_hyphen_values = true)]
    pub header_rows: String,

    /// Copy valid rows to a `<name>.fixed.<ext>` file
    #[arg(long)]
    pub fix_missing: bool,

    /// Directory for the fixed output file (defaults to the CSV file's directory)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory for the run log file (defaults to the system temp directory)
    #[arg(long, value_name = "DIR", env = "TADC_VALIDATOR_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Console log level: debug, info, warning, error
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// strftime pattern of legacy request dates to convert (e.g. "%d/%m/%Y")
    #[arg(long, value_name = "FMT")]
    pub old_date_format: Option<String>,
}
