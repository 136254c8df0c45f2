use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by Pollwatch.
#[derive(Error, Debug)]
pub enum PollError {
    /// A polling data file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An integer column held text that does not convert.
    #[error("Invalid {field} {value:?} on line {line}: {source}")]
    InvalidInteger {
        field: &'static str,
        value: String,
        line: usize,
        #[source]
        source: ParseIntError,
    },

    /// A percentage column held text that does not convert.
    #[error("Invalid {field} {value:?} on line {line}: {source}")]
    InvalidFloat {
        field: &'static str,
        value: String,
        line: usize,
        #[source]
        source: ParseFloatError,
    },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the pollwatch crates.
pub type Result<T> = std::result::Result<T, PollError>;
