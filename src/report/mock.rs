//! Mock reporter for testing.
//!
//! `MockReporter` implements [`Reporter`] and captures every line for later
//! assertion.
//!
//! # Example
//!
//! ```
//! use tadc_import_validator::report::{LogLevel, MockReporter, Reporter};
//!
//! let mut reporter = MockReporter::new();
//! reporter.info("No errors found. Woohoo!");
//!
//! assert!(reporter.contains("Woohoo"));
//! assert_eq!(reporter.at(LogLevel::Info), vec!["No errors found. Woohoo!"]);
//! ```

use super::{LogLevel, Reporter};

/// Reporter that records lines in memory.
#[derive(Debug, Default)]
pub struct MockReporter {
    lines: Vec<(LogLevel, String)>,
}

impl MockReporter {
    /// Create an empty mock reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every captured line with its level, in order.
    pub fn lines(&self) -> &[(LogLevel, String)] {
        &self.lines
    }

    /// Captured lines at exactly `level`.
    pub fn at(&self, level: LogLevel) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.as_str())
            .collect()
    }

    /// Whether any captured line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|(_, msg)| msg.contains(needle))
    }
}

impl Reporter for MockReporter {
    fn log(&mut self, level: LogLevel, msg: &str) {
        self.lines.push((level, msg.to_string()));
    }
}
