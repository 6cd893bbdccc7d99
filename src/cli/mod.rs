//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - The [`Command`] trait and [`CommandResult`]
//! - [`validate`] - The validation command

pub mod args;
pub mod command;
pub mod validate;

pub use args::Cli;
pub use command::{Command, CommandResult};
pub use validate::ValidateCommand;
