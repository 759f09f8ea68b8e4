//! Error types for seqgridlib

use thiserror::Error;

/// Errors that can occur while generating, building or printing a grid
#[derive(Error, Debug)]
pub enum SeqgridError {
    /// Sequence kind is neither "primes" nor "fibonacci"
    #[error("unsupported sequence type '{0}' (expected 'primes' or 'fibonacci')")]
    UnsupportedSequenceType(String),

    /// Limit is zero or larger than the table can hold
    #[error("invalid limit {limit} for {kind}: must be between 1 and {max}")]
    InvalidLimit {
        kind: String,
        limit: usize,
        max: usize,
    },

    /// A cell product does not fit in a u64
    #[error("product overflows at row {row}, column {column}")]
    Overflow { row: usize, column: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
