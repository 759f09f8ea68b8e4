//! Column-aligned text rendering of a [`Grid`].
//!
//! Layout rules:
//! - a dash separator of `5 * rows` characters precedes row 1
//! - a `|` precedes column 1 of every row that has one
//! - each cell is left-aligned and right-padded with spaces
//!
//! Column width is taken from the last cell of the grid *row* with the
//! column's index. The table is symmetric in its sequence values, so for an
//! increasing sequence that cell is the widest in the column.

use std::io::{self, Write};

use crate::grid::Grid;
use crate::Result;

/// Spaces added after the widest value of a column
pub const EXTRA_PADDING: usize = 2;

/// Dashes in the separator per grid row
const SEPARATOR_UNIT: usize = 5;

/// Write `grid` as aligned text to `out`.
pub fn write_grid<W: Write>(grid: &Grid, out: &mut W) -> Result<()> {
    for (index, row) in grid.rows().enumerate() {
        if index == 1 {
            writeln!(out, "{}", "-".repeat(SEPARATOR_UNIT * grid.len()))?;
        }
        write_row(grid, row, out)?;
    }
    Ok(())
}

/// Render `grid` into a string.
pub fn format_grid(grid: &Grid) -> Result<String> {
    let mut buf = Vec::new();
    write_grid(grid, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Print `grid` to standard output.
pub fn print_grid(grid: &Grid) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_grid(grid, &mut out)?;
    out.flush()?;
    Ok(())
}

fn write_row<W: Write>(grid: &Grid, row: &[u64], out: &mut W) -> Result<()> {
    for (column, value) in row.iter().enumerate() {
        if column == 1 {
            write!(out, "|")?;
        }
        let text = value.to_string();
        let padding = (column_width(grid, column) + EXTRA_PADDING).saturating_sub(text.len());
        write!(out, "{}{}", text, " ".repeat(padding))?;
    }
    writeln!(out)?;
    Ok(())
}

/// Digits of the last value in row `column`, or 0 if that row is missing
fn column_width(grid: &Grid, column: usize) -> usize {
    grid.row(column)
        .and_then(|row| row.last())
        .map_or(0, |value| digits(*value))
}

fn digits(value: u64) -> usize {
    value.to_string().len()
}
