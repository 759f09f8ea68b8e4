//! Multiplication grid built from a sequence.
//!
//! Row 0 is the header `[0, s0, s1, ...]`. Every following row starts with
//! its sidebar value `s(r)` and continues with `s(r) * s(c)` for each column.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SeqgridError;
use crate::sequence::Sequence;
use crate::Result;

/// Value in the top-left corner of every grid
pub const CORNER: u64 = 0;

/// Multiplication table keyed by row index.
///
/// Always holds `len(sequence) + 1` rows of `len(sequence) + 1` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<u64>>,
}

impl Grid {
    /// Build the table for `sequence`.
    ///
    /// An empty sequence yields the single row `[0]`. Fails with
    /// [`SeqgridError::Overflow`] if any product does not fit in a `u64`.
    pub fn build(sequence: &Sequence) -> Result<Self> {
        let values = sequence.values();
        let mut rows = Vec::with_capacity(values.len() + 1);
        rows.push(header_row(values));

        for (index, &sidebar) in values.iter().enumerate() {
            rows.push(data_row(values, index, sidebar)?);
        }

        debug!(rows = rows.len(), "built grid");
        Ok(Self { rows })
    }

    /// Cells of row `index`, if it exists
    pub fn row(&self, index: usize) -> Option<&[u64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u64]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Number of rows, header included
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Convenience wrapper around [`Grid::build`]
pub fn build(sequence: &Sequence) -> Result<Grid> {
    Grid::build(sequence)
}

fn header_row(values: &[u64]) -> Vec<u64> {
    let mut row = Vec::with_capacity(values.len() + 1);
    row.push(CORNER);
    row.extend_from_slice(values);
    row
}

fn data_row(values: &[u64], index: usize, sidebar: u64) -> Result<Vec<u64>> {
    let mut row = Vec::with_capacity(values.len() + 1);
    row.push(sidebar);
    for (column, &value) in values.iter().enumerate() {
        let product = value
            .checked_mul(sidebar)
            .ok_or(SeqgridError::Overflow {
                row: index + 1,
                column: column + 1,
            })?;
        row.push(product);
    }
    Ok(row)
}
