//! Error type for the command-line front end.

use rk_cycle::{ConfigError, CycleError};
use rk_report::ReportError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cycle error: {0}")]
    Cycle(#[from] CycleError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Property backend '{backend}' is not available (rebuild with --features {feature})")]
    BackendUnavailable {
        backend: &'static str,
        feature: &'static str,
    },
}
