use std::path::PathBuf;

use thiserror::Error;

/// Error types that can occur during coevolution analysis
#[derive(Error, Debug)]
pub enum CoevoError {
    /// Malformed alignment (unequal row lengths, no sequences, ...)
    #[error("Invalid alignment: {0}")]
    InvalidAlignment(String),
    /// Entropy vector and pair matrix disagree on the number of columns
    #[error("Dimension mismatch: expected {expected} columns, found {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    /// Error parsing input data
    #[error("Parse error: {0}")]
    ParseError(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Output path already exists; refusing to clobber
    #[error("Output file already exists; refusing to clobber: {0}")]
    OutputExists(PathBuf),
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
