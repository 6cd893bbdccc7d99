//! File-level error summary.
//!
//! Keeps the first message recorded for each (row, column) pair and renders
//! the end-of-run report.

use std::collections::BTreeMap;

use crate::report::Reporter;
use crate::row::{Column, RowError};

/// Per-row, per-column validation failures for a whole file.
///
/// Rows are keyed by their zero-based data row index (header rows excluded).
/// Only the first message for a column in a given row is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSummary {
    rows: BTreeMap<usize, BTreeMap<Column, String>>,
}

impl ErrorSummary {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error unless the column already has one for this row.
    ///
    /// Returns `true` if the error was stored.
    pub fn record(&mut self, row: usize, error: &RowError) -> bool {
        let columns = self.rows.entry(row).or_default();
        if columns.contains_key(&error.column) {
            return false;
        }
        columns.insert(error.column, error.message.clone());
        true
    }

    /// Whether no errors were recorded.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows with at least one error.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of stored (row, column) errors.
    pub fn error_count(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    /// Stored message for a row and column.
    pub fn get(&self, row: usize, column: Column) -> Option<&str> {
        self.rows
            .get(&row)
            .and_then(|columns| columns.get(&column))
            .map(String::as_str)
    }

    /// Iterate over rows in order with their column messages.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BTreeMap<Column, String>)> {
        self.rows.iter().map(|(row, columns)| (*row, columns))
    }

    /// Number of errors per column across the whole file.
    pub fn column_counts(&self) -> BTreeMap<Column, usize> {
        let mut counts = BTreeMap::new();
        for columns in self.rows.values() {
            for column in columns.keys() {
                *counts.entry(*column).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Write the end-of-run report.
    ///
    /// Row numbers are printed one-based.
    pub fn render(&self, reporter: &mut dyn Reporter) {
        if self.is_empty() {
            reporter.info("No errors found. Woohoo!");
            return;
        }

        reporter.info("Errors were found for the following columns");
        for (row, columns) in self.iter() {
            for (column, message) in columns {
                reporter.info(&format!("Row {} column {} : {}", row + 1, column, message));
            }
        }

        reporter.info(&format!(
            "Summary: There were {} errors found in {} rows",
            self.error_count(),
            self.row_count()
        ));
        for (column, count) in self.column_counts() {
            reporter.info(&format!(" - Column {} had {} errors", column, count));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{LogLevel, MockReporter};

    fn error(column: Column, message: &str) -> RowError {
        RowError {
            column,
            message: message.to_string(),
        }
    }

    #[test]
    fn first_message_wins() {
        let mut summary = ErrorSummary::new();
        assert!(summary.record(0, &error(Column::D, "first")));
        assert!(!summary.record(0, &error(Column::D, "second")));

        assert_eq!(summary.get(0, Column::D), Some("first"));
        assert_eq!(summary.error_count(), 1);
    }

    #[test]
    fn counts_rows_errors_and_columns() {
        let mut summary = ErrorSummary::new();
        summary.record(0, &error(Column::A, "a"));
        summary.record(0, &error(Column::V, "v"));
        summary.record(3, &error(Column::V, "v"));

        assert_eq!(summary.row_count(), 2);
        assert_eq!(summary.error_count(), 3);

        let counts = summary.column_counts();
        assert_eq!(counts.get(&Column::A), Some(&1));
        assert_eq!(counts.get(&Column::V), Some(&2));
        assert_eq!(counts.get(&Column::B), None);
    }

    #[test]
    fn empty_summary_renders_success() {
        let mut reporter = MockReporter::new();
        ErrorSummary::new().render(&mut reporter);
        assert_eq!(reporter.at(LogLevel::Info), vec!["No errors found. Woohoo!"]);
    }

    #[test]
    fn report_lists_rows_one_based_then_totals() {
        let mut summary = ErrorSummary::new();
        summary.record(0, &error(Column::V, "bad source"));
        summary.record(2, &error(Column::D, "bad date"));
        summary.record(2, &error(Column::V, "bad source"));

        let mut reporter = MockReporter::new();
        summary.render(&mut reporter);

        assert_eq!(
            reporter.at(LogLevel::Info),
            vec![
                "Errors were found for the following columns",
                "Row 1 column V : bad source",
                "Row 3 column D : bad date",
                "Row 3 column V : bad source",
                "Summary: There were 3 errors found in 2 rows",
                " - Column D had 1 errors",
                " - Column V had 2 errors",
            ]
        );
    }
}
