//! Rewriting request dates from a legacy format.

use chrono::NaiveDate;

use super::rules::is_formatted_date;

/// Format the date rule expects.
pub const IMPORT_DATE_FORMAT: &str = "%Y/%m/%d";

/// Converts dates written in an older `strftime` pattern into
/// [`IMPORT_DATE_FORMAT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateReformat {
    old_format: String,
}

impl DateReformat {
    /// Create a reformatter for dates written as `old_format` (e.g. `%d/%m/%Y`).
    pub fn new(old_format: impl Into<String>) -> Self {
        Self {
            old_format: old_format.into(),
        }
    }

    /// The legacy pattern being converted from.
    pub fn old_format(&self) -> &str {
        &self.old_format
    }

    /// Rewrite `value` if it is an old-format date.
    ///
    /// Returns `None` when the value is blank, already in the import format,
    /// or does not parse with the old pattern.
    pub fn apply(&self, value: &str) -> Option<String> {
        if value.is_empty() || is_formatted_date(value) {
            return None;
        }
        NaiveDate::parse_from_str(value, &self.old_format)
            .ok()
            .map(|date| date.format(IMPORT_DATE_FORMAT).to_string())
    }
}
