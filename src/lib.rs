//! TADC import validator - pre-screens bulk content-request spreadsheets.
//!
//! Each data row of an import CSV has 26 fixed columns (`A` to `Z`). Every
//! column carries a rule, some of which depend on sibling columns (journal
//! metadata, article vs. chapter sections). The validator checks every row,
//! reports per-row and per-column failures, and can copy valid rows into a
//! separate "fixed" file.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Run configuration
//! - [`error`] - Error types and result aliases
//! - [`report`] - Run-scoped reporting to console and log file
//! - [`row`] - Column rule table and single-row validation
//! - [`validator`] - File driver, CSV sources and sinks, error summary
//!
//! # Example
//!
//! ```
//! use tadc_import_validator::report::MockReporter;
//! use tadc_import_validator::validator::FileValidator;
//! use tadc_import_validator::Result;
//!
//! let rows: Vec<Result<Vec<String>>> = vec![
//!     Ok(vec!["Course Code".to_string()]),
//!     Ok(vec![String::new(); 26]),
//! ];
//!
//! let mut reporter = MockReporter::new();
//! let outcome = FileValidator::new(rows.into_iter(), 1).validate_file(&mut reporter);
//!
//! assert_eq!(outcome.invalid_rows, 1);
//! assert!(reporter.contains("Summary: There were"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod row;
pub mod validator;

pub use error::{Result, ValidatorError};
