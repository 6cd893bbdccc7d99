//! Console and log file reporter for a single validation run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;

use super::{LogLevel, Reporter};
use crate::error::Result;

/// Reporter that prints to stdout and mirrors every line to a run log file.
///
/// Lines at or above the console level go to stdout. All lines, including
/// debug detail, are written to the log file with a timestamp. The file is
/// flushed when the `RunLog` is dropped.
#[derive(Debug)]
pub struct RunLog {
    console_level: LogLevel,
    file: BufWriter<File>,
    path: PathBuf,
}

impl RunLog {
    /// Create a reporter that also writes `validate_csv_<timestamp>.log`
    /// inside `log_dir`.
    pub fn with_file(console_level: LogLevel, log_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(log_dir)
            .with_context(|| format!("creating log directory {}", log_dir.display()))?;
        let name = format!("validate_csv_{}.log", Local::now().format("%Y%m%d-%H%M%S"));
        let path = log_dir.join(name);
        let file = File::create(&path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing::debug!("Writing run log to {}", path.display());

        Ok(Self {
            console_level,
            file: BufWriter::new(file),
            path,
        })
    }

    /// Path of the run log file.
    pub fn log_path(&self) -> &Path {
        &self.path
    }

    /// Threshold for printing to stdout.
    pub fn console_level(&self) -> LogLevel {
        self.console_level
    }
}

impl Reporter for RunLog {
    fn log(&mut self, level: LogLevel, msg: &str) {
        if level >= self.console_level {
            println!("{}", msg);
        }

        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        if let Err(e) = writeln!(self.file, "[{}] {}: {}", stamp, level, msg) {
            tracing::warn!("Failed to write run log: {}", e);
        }
    }
}

impl Drop for RunLog {
    fn drop(&mut self) {
        let _ = self.file.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_receives_all_levels() {
        let temp = TempDir::new().unwrap();
        let path = {
            let mut log = RunLog::with_file(LogLevel::Error, temp.path()).unwrap();
            assert_eq!(log.console_level(), LogLevel::Error);
            log.debug("row 1 is valid");
            log.info("No errors found. Woohoo!");
            log.log_path().to_path_buf()
        };

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("validate_csv_"));
        assert!(name.ends_with(".log"));

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("DEBUG: row 1 is valid"));
        assert!(contents.contains("INFO: No errors found. Woohoo!"));
    }

    #[test]
    fn unwritable_log_dir_names_the_path() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = RunLog::with_file(LogLevel::Info, &blocker.join("logs")).unwrap_err();
        assert!(err.to_string().contains("creating log directory"));
    }

    #[test]
    fn creates_missing_log_dir() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("logs").join("today");
        let log = RunLog::with_file(LogLevel::Info, &nested).unwrap();
        assert!(log.log_path().starts_with(&nested));
    }
}
