//! Output formatting: present a grid as aligned text.
//!
//! This is the last stage of the pipeline. It provides:
//!
//! - **write_grid**: render into any `io::Write`
//! - **format_grid**: render into a `String`
//! - **print_grid**: render to standard output
//!
//! ## Example
//!
//! ```rust
//! use seqgridlib::{build, format_grid, Sequence};
//!
//! let grid = build(&Sequence::from(vec![2, 3, 5])).unwrap();
//! let text = format_grid(&grid).unwrap();
//! assert!(text.starts_with("0  |2   3   5   \n"));
//! ```

pub mod table;

pub use table::{format_grid, print_grid, write_grid, EXTRA_PADDING};
