//! Run-scoped reporting.
//!
//! A validation run writes its progress and final report through a
//! [`Reporter`] that is created when the run starts and passed explicitly to
//! the file driver. There is no process-wide logger for report output.
//!
//! - [`RunLog`] prints to stdout and mirrors to a timestamped log file
//! - [`MockReporter`] captures lines for tests

pub mod level;
pub mod mock;
pub mod run_log;

pub use level::LogLevel;
pub use mock::MockReporter;
pub use run_log::RunLog;

/// Sink for the human-readable lines of a validation run.
pub trait Reporter {
    /// Record one line at `level`.
    fn log(&mut self, level: LogLevel, msg: &str);

    /// Record a debug line.
    fn debug(&mut self, msg: &str) {
        self.log(LogLevel::Debug, msg);
    }

    /// Record an info line.
    fn info(&mut self, msg: &str) {
        self.log(LogLevel::Info, msg);
    }

    /// Record a warning line.
    fn warning(&mut self, msg: &str) {
        self.log(LogLevel::Warning, msg);
    }

    /// Record an error line.
    fn error(&mut self, msg: &str) {
        self.log(LogLevel::Error, msg);
    }
}
