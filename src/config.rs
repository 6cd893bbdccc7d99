//! Run configuration.
//!
//! [`RunConfig`] is built from parsed CLI arguments and validated before any
//! file is opened, so configuration mistakes abort the run up front.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{Result, ValidatorError};
use crate::report::LogLevel;
use crate::row::DateReformat;

/// Settings for one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// CSV file to validate.
    pub input: PathBuf,
    /// Leading rows to skip.
    pub header_rows: usize,
    /// Copy valid rows to the fixed output file.
    pub fix_missing: bool,
    /// Directory receiving the fixed output file.
    pub output_dir: PathBuf,
    /// Directory receiving the run log file.
    pub log_dir: PathBuf,
    /// Threshold for console output.
    pub log_level: LogLevel,
    /// Legacy `strftime` pattern for request dates.
    pub old_date_format: Option<String>,
}

impl RunConfig {
    /// Create a configuration with defaults for everything but the input.
    pub fn new(input: impl Into<PathBuf>, header_rows: usize) -> Self {
        let input = input.into();
        let output_dir = parent_dir(&input);
        Self {
            input,
            header_rows,
            fix_missing: false,
            output_dir,
            log_dir: std::env::temp_dir(),
            log_level: LogLevel::Info,
            old_date_format: None,
        }
    }

    /// Build and validate a configuration from CLI arguments.
    pub fn from_args(cli: &Cli) -> Result<Self> {
        if !cli.csv_file.is_file() {
            return Err(ValidatorError::InputNotFound {
                path: cli.csv_file.clone(),
            });
        }

        let header_rows = parse_header_rows(&cli.header_rows)?;
        let log_level = cli
            .log_level
            .parse::<LogLevel>()
            .map_err(|_| ValidatorError::InvalidLogLevel {
                value: cli.log_level.clone(),
            })?;

        let mut config = Self::new(&cli.csv_file, header_rows);
        config.fix_missing = cli.fix_missing;
        config.log_level = log_level;
        config.old_date_format = cli
            .old_date_format
            .as_ref()
            .filter(|f| !f.trim().is_empty())
            .cloned();
        if let Some(dir) = &cli.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(dir) = &cli.log_dir {
            config.log_dir = dir.clone();
        }
        Ok(config)
    }

    /// Where valid rows are written in fix mode.
    pub fn fixed_output_path(&self) -> PathBuf {
        fixed_output_path(&self.input, &self.output_dir)
    }

    /// Date rewriting configured for this run, if any.
    pub fn date_reformat(&self) -> Option<DateReformat> {
        self.old_date_format.as_deref().map(DateReformat::new)
    }
}

/// Parse the header row count argument.
pub fn parse_header_rows(value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| ValidatorError::InvalidHeaderRows {
            value: value.to_string(),
        })
}

/// `<output_dir>/<stem>.fixed<.ext>` for an input file.
pub fn fixed_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{}.fixed.{}", stem, ext.to_string_lossy()),
        None => format!("{}.fixed", stem),
    };
    output_dir.join(name)
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
