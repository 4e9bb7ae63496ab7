//! Error types for loading, configuration and evaluation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the infallible scoring core
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader/writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A data row does not have the requested column
    #[error("{path:?}, line {line}: missing column {column}")]
    MissingField {
        path: PathBuf,
        line: u64,
        column: usize,
    },

    /// A target row holds something other than an integer label
    #[error("{path:?}, line {line}: invalid label '{value}'")]
    InvalidLabel {
        path: PathBuf,
        line: u64,
        value: String,
    },

    /// Data and target files disagree on the number of rows
    #[error("data file has {data_rows} rows but target file has {target_rows}")]
    MisalignedTargets { data_rows: usize, target_rows: usize },

    /// Accuracy is undefined for an empty test set
    #[error("cannot evaluate an empty test set")]
    EmptyTestSet,
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
