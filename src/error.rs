//! Error types for validator operations.
//!
//! This module defines [`ValidatorError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration variants are fatal and abort a run before any row is read
//! - Row-level variants are contained by the file driver: logged, row skipped
//! - Cell validation failures are never errors; they are
//!   [`RowError`](crate::row::RowError) values collected on the row

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for validator operations.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// Input CSV file does not exist.
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Header row count could not be parsed as a non-negative integer.
    #[error("Invalid header row count '{value}': expected a non-negative integer")]
    InvalidHeaderRows { value: String },

    /// Log level name is not one of the supported levels.
    #[error("Invalid log level '{value}': expected debug, info, warning or error")]
    InvalidLogLevel { value: String },

    /// A data row has fewer cells than the fixed schema expects.
    #[error("Malformed row: expected {expected} cells, found {found}")]
    MalformedRow { expected: usize, found: usize },

    /// Any other failure while processing a single row.
    #[error("Unexpected error processing row {row}: {message}")]
    UnexpectedRow { row: usize, message: String },

    /// CSV decode or encode error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ValidatorError {
    /// Whether this error must abort the run before any row is processed.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InputNotFound { .. }
                | Self::InvalidHeaderRows { .. }
                | Self::InvalidLogLevel { .. }
        )
    }
}

/// Result type alias for validator operations.
pub type Result<T> = std::result::Result<T, ValidatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_not_found_displays_path() {
        let err = ValidatorError::InputNotFound {
            path: PathBuf::from("/data/requests.csv"),
        };
        assert!(err.to_string().contains("/data/requests.csv"));
    }

    #[test]
    fn invalid_header_rows_displays_value() {
        let err = ValidatorError::InvalidHeaderRows {
            value: "two".into(),
        };
        assert!(err.to_string().contains("'two'"));
    }

    #[test]
    fn malformed_row_displays_counts() {
        let err = ValidatorError::MalformedRow {
            expected: 26,
            found: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("26"));
        assert!(msg.contains("3"));
    }

    #[test]
    fn unexpected_row_displays_row_and_message() {
        let err = ValidatorError::UnexpectedRow {
            row: 7,
            message: "invalid utf-8".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("7"));
        assert!(msg.contains("invalid utf-8"));
    }

    #[test]
    fn configuration_variants_are_classified() {
        assert!(ValidatorError::InvalidHeaderRows { value: "x".into() }.is_configuration());
        assert!(ValidatorError::InvalidLogLevel { value: "x".into() }.is_configuration());
        assert!(!ValidatorError::MalformedRow {
            expected: 26,
            found: 1
        }
        .is_configuration());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ValidatorError = io_err.into();
        assert!(matches!(err, ValidatorError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(ValidatorError::InvalidHeaderRows {
                value: "-1".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
