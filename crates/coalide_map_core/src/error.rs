//! Errors raised by the grid store

use thiserror::Error;

/// Error type for grid access and resizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
    #[error("Invalid level size {rows}x{cols}: rows and columns must be in 1..=99")]
    InvalidDimension { rows: usize, cols: usize },
}
