//! # seqgridlib
//!
//! Multiplication tables over prime or Fibonacci sequences, rendered as
//! column-aligned text.
//!
//! ## Overview
//!
//! The library is a three-stage pipeline, each stage consuming the previous
//! one's output:
//!
//! - **Sequence**: the first N primes, or the fixed Fibonacci run `1, 1, 2, 3, 5, 8, 13`
//! - **Grid**: a header row `[0, s0, s1, ...]` followed by one row per value,
//!   `[s(r), s(r)*s0, s(r)*s1, ...]`
//! - **Output**: aligned text with a dash separator under the header and a
//!   `|` after the sidebar column
//!
//! Each stage is a pure function apart from the final write.
//!
//! ## Example
//!
//! ```rust
//! use seqgridlib::{build_grid, format_grid, GridConfig};
//!
//! let config = GridConfig::new().sequence_type("primes").limit(3);
//! let grid = build_grid(&config).unwrap();
//! let text = format_grid(&grid).unwrap();
//!
//! assert_eq!(text.lines().next(), Some("0  |2   3   5   "));
//! assert_eq!(text.lines().nth(1), Some("--------------------"));
//! ```

pub mod error;
pub mod grid;
pub mod options;
pub mod output;
pub mod pipeline;
pub mod sequence;

pub use error::SeqgridError;
pub use grid::{build, Grid};
pub use options::{GridConfig, SequenceKind, DEFAULT_LIMIT, DEFAULT_SEQUENCE_TYPE, MAX_LIMIT};
pub use output::{format_grid, print_grid, write_grid};
pub use pipeline::{build_grid, run};
pub use sequence::{generate, Sequence, FIBONACCI_LEN};

/// Result type for seqgridlib operations
pub type Result<T> = std::result::Result<T, SeqgridError>;
