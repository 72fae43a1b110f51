//! Error types for sortvis.
//!
//! Sorting itself never fails; these cover argument parsing, configuration
//! and the terminal program at the edges.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A value list or element count of zero.
    #[error("array must contain at least one value")]
    EmptyArray,

    #[error("invalid value bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: i64, max: i64 },

    /// A flag value that does not parse as the expected number.
    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown algorithm: {0} (expected bubble or insertion)")]
    UnknownAlgorithm(String),

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The interactive program failed to build or run.
    #[error("program error: {0}")]
    Program(String),
}
