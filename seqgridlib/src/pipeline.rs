//! End-to-end pipeline: config -> sequence -> grid -> text.

use std::io::Write;

use tracing::debug;

use crate::error::SeqgridError;
use crate::grid::Grid;
use crate::options::{GridConfig, SequenceKind, MAX_LIMIT};
use crate::output::write_grid;
use crate::Result;

/// Generate the sequence for `config` and build its grid.
///
/// For kinds that honor the limit, it must lie in `1..=MAX_LIMIT`.
pub fn build_grid(config: &GridConfig) -> Result<Grid> {
    let kind: SequenceKind = config.sequence_type.parse()?;
    if kind.uses_limit() && !(1..=MAX_LIMIT).contains(&config.limit) {
        return Err(SeqgridError::InvalidLimit {
            kind: kind.to_string(),
            limit: config.limit,
            max: MAX_LIMIT,
        });
    }

    debug!(kind = %kind, limit = config.limit, "running pipeline");
    let sequence = kind.generate(config.limit);
    Grid::build(&sequence)
}

/// Run the whole pipeline, writing the table to `out`.
///
/// Nothing is written unless the grid was built successfully.
pub fn run<W: Write>(config: &GridConfig, out: &mut W) -> Result<()> {
    let grid = build_grid(config)?;
    write_grid(&grid, out)
}
