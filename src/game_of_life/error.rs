//! Errors reported by the cellular automaton engine

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A dimension is zero or the cell count overflows `usize`
    #[error("invalid board dimensions {rows}x{columns}")]
    InvalidDimension { rows: usize, columns: usize },

    #[error("position ({row}, {col}) is out of bounds for a {rows}x{columns} board")]
    OutOfBoundsPosition {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },
}
