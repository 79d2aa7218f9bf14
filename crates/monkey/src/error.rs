use std::path::PathBuf;

use monkey_common::ConfigError;
use thiserror::Error;

/// Errors surfaced by the `monkey` driver.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("repl error: {0}")]
    Repl(String),

    #[error("failed to serialize tokens: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} illegal token(s) found")]
    IllegalInput(usize),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
