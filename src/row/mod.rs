//! Import row validation.
//!
//! An [`ImportRow`] holds the 26 trimmed cell values of one data row of a
//! TADC import spreadsheet and checks them against the column rule table.
//!
//! # Example
//!
//! ```
//! use tadc_import_validator::row::{Column, ImportRow};
//!
//! let mut row = ImportRow::new();
//! row.load(&vec![""; 26]).unwrap();
//!
//! assert!(!row.is_valid());
//! assert!(row.errors().iter().any(|e| e.column == Column::A));
//! ```

pub mod cells;
pub mod column;
pub mod dates;
pub mod definition;
pub mod rules;

pub use cells::Cells;
pub use column::{Column, COLUMN_COUNT};
pub use dates::{DateReformat, IMPORT_DATE_FORMAT};
pub use definition::{definition, ColumnDefinition};
pub use rules::Rule;

use std::fmt;

use crate::error::{Result, ValidatorError};

/// Columns holding request dates.
const DATE_COLUMNS: [Column; 2] = [Column::D, Column::E];

/// A single failed cell check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// Column whose rule failed.
    pub column: Column,
    /// Human-readable failure message.
    pub message: String,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column {}: {}", self.column, self.message)
    }
}

/// One data row of an import file.
#[derive(Debug, Clone, Default)]
pub struct ImportRow {
    cells: Cells,
    errors: Vec<RowError>,
    date_reformat: Option<DateReformat>,
}

impl ImportRow {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty row that rewrites legacy dates on load.
    pub fn with_date_reformat(date_reformat: Option<DateReformat>) -> Self {
        Self {
            date_reformat,
            ..Self::default()
        }
    }

    /// Load positional values into the row, trimming each one.
    ///
    /// Values past the 26th are ignored. Fewer than 26 values is an error and
    /// leaves the row untouched.
    pub fn load<S: AsRef<str>>(&mut self, values: &[S]) -> Result<()> {
        if values.len() < COLUMN_COUNT {
            return Err(ValidatorError::MalformedRow {
                expected: COLUMN_COUNT,
                found: values.len(),
            });
        }

        let mut cells = Cells::new();
        for (column, value) in Column::ALL.iter().zip(values) {
            cells[*column] = value.as_ref().trim().to_string();
        }

        if let Some(reformat) = &self.date_reformat {
            for column in DATE_COLUMNS {
                if let Some(rewritten) = reformat.apply(cells.get(column)) {
                    tracing::debug!(
                        "Rewrote column {} date '{}' as '{}'",
                        column,
                        cells.get(column),
                        rewritten
                    );
                    cells[column] = rewritten;
                }
            }
        }

        self.cells = cells;
        Ok(())
    }

    /// The row's current cell values.
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Re-run every column rule, replacing the error list.
    pub fn validate(&mut self) {
        let cells = &self.cells;
        self.errors = Column::ALL
            .iter()
            .filter_map(|&column| {
                let def = definition(column);
                let value = cells.get(column);
                if def.rule.check(value, cells) {
                    None
                } else {
                    tracing::trace!("column {} failed rule {}", column, def.rule.id());
                    Some(RowError {
                        column,
                        message: def.failure_message(value),
                    })
                }
            })
            .collect();
    }

    /// Validate the row and report whether it passed.
    ///
    /// Validation is re-run on every call.
    pub fn is_valid(&mut self) -> bool {
        self.validate();
        self.errors.is_empty()
    }

    /// Errors from the most recent validation.
    pub fn errors(&self) -> &[RowError] {
        &self.errors
    }

    /// The 26 values ready to be written as a CSV record.
    ///
    /// Absent values (empty or the literal `None`) are written as empty strings.
    pub fn output_for_csv(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|(_, value)| {
                if value == "None" {
                    String::new()
                } else {
                    value.to_string()
                }
            })
            .collect()
    }

    /// Like [`output_for_csv`](Self::output_for_csv) with a trailing field
    /// listing every error.
    pub fn output_for_invalid_csv(&self) -> Vec<String> {
        let mut output = self.output_for_csv();
        let reasons: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        output.push(reasons.join(", "));
        output
    }
}
