//! Error types for matrix construction and multiplication jobs.

use std::fmt;

use thiserror::Error;

/// Which input of a multiply job an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Left,
    Right,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Left => f.write_str("left"),
            Operand::Right => f.write_str("right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(
        "matrix dimension mismatch: left is {left_rows}x{left_cols}, right is {right_rows}x{right_cols}"
    )]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("{operand} matrix is empty ({rows}x{cols})")]
    EmptyMatrix {
        operand: Operand,
        rows: usize,
        cols: usize,
    },

    #[error("worker count must be at least 1")]
    NoWorkers,

    #[error("ragged matrix: row {row} has {found} elements, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("shape mismatch: a {rows}x{cols} matrix cannot hold {len} elements")]
    Shape { rows: usize, cols: usize, len: usize },
}
