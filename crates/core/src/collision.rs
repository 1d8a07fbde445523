//! Collision checks for the falling-block variant.
//!
//! Every move, rotation and gravity step is validated here before it is
//! applied.

use crate::grid::Grid;
use crate::pieces::{ActivePiece, Shape};
use crate::types::FallingCell;

/// Whether `piece` (or `candidate` shape at the piece's anchor) fits after
/// shifting by `(dx, dy)`.
///
/// A cell is rejected when its column is outside `[0, width)`, its row is at
/// or below `height`, or it lands on an occupied cell. Rows above the board
/// (`y < 0`) always fit.
pub fn is_valid(
    board: &Grid<FallingCell>,
    piece: &ActivePiece,
    dx: i32,
    dy: i32,
    candidate: Option<&Shape>,
) -> bool {
    let shape = candidate.unwrap_or(&piece.shape);
    let width = board.width() as i32;
    let height = board.height() as i32;

    shape.occupied().iter().all(|&(col, row)| {
        let x = piece.x + col + dx;
        let y = piece.y + row + dy;
        if x < 0 || x >= width || y >= height {
            return false;
        }
        if y < 0 {
            return true;
        }
        matches!(board.cell(x, y), Some(None))
    })
}

/// Rows the piece can fall before resting
pub fn drop_distance(board: &Grid<FallingCell>, piece: &ActivePiece) -> i32 {
    if !is_valid(board, piece, 0, 0, None) {
        return 0;
    }
    let mut distance = 0;
    while is_valid(board, piece, 0, distance + 1, None) {
        distance += 1;
    }
    distance
}

/// Whether the piece rests on the floor or on a locked cell
pub fn is_grounded(board: &Grid<FallingCell>, piece: &ActivePiece) -> bool {
    !is_valid(board, piece, 0, 1, None)
}
