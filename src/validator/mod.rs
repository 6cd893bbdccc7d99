//! File-level validation.
//!
//! - [`io`] - Row sources and sinks, with CSV implementations
//! - [`summary`] - Per-row, per-column error summary and report
//! - [`driver`] - The [`FileValidator`] that ties them together

pub mod driver;
pub mod io;
pub mod summary;

pub use driver::{FileValidator, ValidationOutcome};
pub use io::{CsvRowSink, CsvRowSource, RowSink, RowSource};
pub use summary::ErrorSummary;
