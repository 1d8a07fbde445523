//! Errors raised by the grid contract.

use std::fmt;

/// Grid access or construction failure
///
/// Receiving one of these means a caller broke the grid contract; engine code
/// never produces them on reachable states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate outside `[0, width) x [0, height)`
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
    /// `from_rows` received rows of differing lengths
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "cell ({x}, {y}) is outside a {width}x{height} grid"),
            GridError::RaggedRows {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
        }
    }
}

impl std::error::Error for GridError {}
