//! Command infrastructure.
//!
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting

use crate::error::Result;
use crate::report::Reporter;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing progress through `reporter`.
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult>;
}

/// Result of command execution.
///
/// A completed run always exits 0, even when rows failed validation;
/// fatal conditions surface as errors from [`Command::execute`] instead.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use.
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}
