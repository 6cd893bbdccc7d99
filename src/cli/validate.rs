//! Validate command implementation.
//!
//! Opens the input file, wires up the optional fixed output and runs the
//! [`FileValidator`] over every row.

use std::time::{Duration, Instant};

use chrono::Local;

use crate::config::RunConfig;
use crate::error::Result;
use crate::report::Reporter;
use crate::validator::{CsvRowSink, CsvRowSource, FileValidator, ValidationOutcome};

use super::command::{Command, CommandResult};

/// The validate command implementation.
pub struct ValidateCommand {
    config: RunConfig,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Get the run configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Validate the configured file and return the run outcome.
    ///
    /// Fails only on setup problems: a missing input or an output file that
    /// cannot be opened. Row problems are part of the outcome.
    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<ValidationOutcome> {
        let config = &self.config;
        reporter.info(&format!("Processing File: {}", config.input.display()));
        reporter.info(&format!("Expecting {} header rows", config.header_rows));

        let source = CsvRowSource::open(&config.input)?;
        let mut validator =
            FileValidator::new(source, config.header_rows).with_date_reformat(config.date_reformat());

        if let Some(note) = date_conversion_note(config) {
            reporter.info(&note);
        }

        if config.fix_missing {
            let path = config.fixed_output_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let sink = CsvRowSink::append(&path)?;
            reporter.info("Will fix missing values");
            reporter.info(&format!("Writing valid rows to {}", path.display()));
            validator = validator.with_fixed_output(Box::new(sink));
        }

        Ok(validator.validate_file(reporter))
    }
}

impl Command for ValidateCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let start = Instant::now();
        reporter.info(&format!(
            "starting at {}",
            Local::now().format("%-I:%M%p on %b %d, %Y")
        ));

        let outcome = self.run(reporter)?;
        tracing::debug!(
            "Run finished with {} errors in {} rows",
            outcome.summary.error_count(),
            outcome.summary.row_count()
        );

        reporter.info(&format!("Running time: {}", format_elapsed(start.elapsed())));

        // Validation errors are reported, not a process failure.
        Ok(CommandResult::success())
    }
}

fn date_conversion_note(config: &RunConfig) -> Option<String> {
    config
        .old_date_format
        .as_ref()
        .map(|f| format!("Converting request dates from '{}' to YYYY/MM/DD", f))
}

/// Format an elapsed time as `H:MM:SS.mmm`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_ms = elapsed.as_millis();
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms / 60_000) % 60;
    let seconds = (total_ms / 1_000) % 60;
    let millis = total_ms % 1_000;
    format!("{}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}
