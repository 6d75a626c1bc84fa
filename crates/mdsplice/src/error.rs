//! CLI error types.

use mdsplice_config::ConfigError;
use mdsplice_engine::{ProcessError, WalkError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Walk(#[from] WalkError),

    #[error("{0}")]
    Process(#[from] ProcessError),
}
