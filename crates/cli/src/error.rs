use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to render output: {0}")]
    OutputError(#[from] serde_json::Error),

    #[error(transparent)]
    RulesError(#[from] rules::RulesError),

    #[error("Invalid date: '{0}'")]
    InvalidDate(String),
}
