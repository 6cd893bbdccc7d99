//! TADC import validator CLI entry point.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tadc_import_validator::cli::{Cli, Command, ValidateCommand};
use tadc_import_validator::config::RunConfig;
use tadc_import_validator::error::ValidatorError;
use tadc_import_validator::report::{Reporter, RunLog};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for diagnostics on stderr.
///
/// Log level is controlled by the `RUST_LOG` environment variable and
/// defaults to WARN. This is separate from `--log-level`, which governs the
/// run report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tadc_import_validator=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Prefix fatal errors so configuration mistakes read differently from
/// failures during the run.
fn error_line(e: &ValidatorError) -> String {
    if e.is_configuration() {
        format!("Configuration error: {}", e)
    } else {
        format!("Error: {}", e)
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };
    init_tracing();

    tracing::debug!("Validator starting with args: {:?}", cli);

    let config = match RunConfig::from_args(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", error_line(&e));
            return ExitCode::from(1);
        }
    };

    let mut log = match RunLog::with_file(config.log_level, &config.log_dir) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("Error: could not create run log in {}: {}", config.log_dir.display(), e);
            return ExitCode::from(1);
        }
    };

    match ValidateCommand::new(config).execute(&mut log) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            log.error(&error_line(&e));
            ExitCode::from(1)
        }
    }
}
