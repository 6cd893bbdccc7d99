//! The file driver.
//!
//! [`FileValidator`] streams rows from a [`RowSource`], skips header rows,
//! validates each data row with a fresh [`ImportRow`], gathers failures into
//! an [`ErrorSummary`] and, in fix mode, copies valid rows to a [`RowSink`].

use crate::error::{Result, ValidatorError};
use crate::report::Reporter;
use crate::row::{DateReformat, ImportRow};

use super::io::{RowSink, RowSource};
use super::summary::ErrorSummary;

/// What happened to a single data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowStatus {
    Valid { written: bool },
    Invalid,
}

/// Counts and summary produced by a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Leading rows skipped as headers.
    pub header_rows_skipped: usize,
    /// Data rows read after the headers.
    pub rows_read: usize,
    /// Data rows that passed validation.
    pub valid_rows: usize,
    /// Data rows that failed validation.
    pub invalid_rows: usize,
    /// Data rows that could not be processed at all.
    pub skipped_rows: usize,
    /// Valid rows copied to the fixed output.
    pub fixed_rows_written: usize,
    /// Per-row, per-column failures.
    pub summary: ErrorSummary,
}

impl ValidationOutcome {
    /// Whether every data row was processed and passed.
    pub fn is_clean(&self) -> bool {
        self.summary.is_empty() && self.skipped_rows == 0
    }
}

/// Validates every data row of an import file.
pub struct FileValidator<S: RowSource> {
    source: S,
    header_rows: usize,
    fixed_output: Option<Box<dyn RowSink>>,
    date_reformat: Option<DateReformat>,
}

impl<S: RowSource> FileValidator<S> {
    /// Create a validator that skips `header_rows` leading rows of `source`.
    pub fn new(source: S, header_rows: usize) -> Self {
        Self {
            source,
            header_rows,
            fixed_output: None,
            date_reformat: None,
        }
    }

    /// Copy valid rows to `sink`.
    ///
    /// Rows are echoed unchanged apart from `None` normalization; missing
    /// values are not filled in.
    pub fn with_fixed_output(mut self, sink: Box<dyn RowSink>) -> Self {
        self.fixed_output = Some(sink);
        self
    }

    /// Rewrite legacy dates before validation.
    pub fn with_date_reformat(mut self, date_reformat: Option<DateReformat>) -> Self {
        self.date_reformat = date_reformat;
        self
    }

    /// Whether valid rows are copied to a fixed output.
    pub fn fix_missing(&self) -> bool {
        self.fixed_output.is_some()
    }

    /// Number of leading rows treated as headers.
    pub fn header_rows(&self) -> usize {
        self.header_rows
    }

    /// Consume the source, validating every data row, then render the report.
    ///
    /// Per-row failures are logged and the row skipped; the run always covers
    /// the whole source. The fixed output is closed when this returns.
    pub fn validate_file(mut self, reporter: &mut dyn Reporter) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::default();
        let mut row_counter = 0usize;

        while let Some(next) = self.source.next_row() {
            let row_index = row_counter;
            row_counter += 1;

            if row_index < self.header_rows {
                outcome.header_rows_skipped += 1;
                continue;
            }

            let data_index = row_index - self.header_rows;
            outcome.rows_read += 1;

            match self.process_row(data_index, next, &mut outcome.summary, reporter) {
                Ok(RowStatus::Valid { written }) => {
                    outcome.valid_rows += 1;
                    if written {
                        outcome.fixed_rows_written += 1;
                    }
                }
                Ok(RowStatus::Invalid) => outcome.invalid_rows += 1,
                Err(e) => {
                    outcome.skipped_rows += 1;
                    let e = match e {
                        ValidatorError::MalformedRow { .. } => e,
                        other => ValidatorError::UnexpectedRow {
                            row: data_index + 1,
                            message: other.to_string(),
                        },
                    };
                    reporter.error(&format!("row {} skipped: {}", data_index + 1, e));
                }
            }
        }

        tracing::debug!(
            "Processed {} data rows ({} valid, {} invalid, {} skipped)",
            outcome.rows_read,
            outcome.valid_rows,
            outcome.invalid_rows,
            outcome.skipped_rows
        );

        outcome.summary.render(reporter);
        outcome
    }

    fn process_row(
        &mut self,
        data_index: usize,
        next: Result<Vec<String>>,
        summary: &mut ErrorSummary,
        reporter: &mut dyn Reporter,
    ) -> Result<RowStatus> {
        let values = next?;
        let number = data_index + 1;

        let mut row = ImportRow::with_date_reformat(self.date_reformat.clone());
        row.load(&values)?;

        if row.is_valid() {
            reporter.info(&format!("row {} is valid", number));
            let written = match self.fixed_output.as_mut() {
                Some(sink) => {
                    reporter.debug(&format!("Write output for row {} to fix file", number));
                    sink.write_row(&row.output_for_csv())?;
                    true
                }
                None => false,
            };
            return Ok(RowStatus::Valid { written });
        }

        reporter.error(&format!("row {} is not valid", number));
        for error in row.errors() {
            summary.record(data_index, error);
            reporter.error(&error.to_string());
        }
        Ok(RowStatus::Invalid)
    }
}
