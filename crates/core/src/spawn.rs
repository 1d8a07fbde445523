//! Spawn controller - new pieces and tiles, plus terminal-state detection.

use crate::collision;
use crate::grid::Grid;
use crate::pieces::{ActivePiece, CATALOG};
use crate::rng::RandomSource;
use crate::types::{FallingCell, PieceKind, TileCell, FOUR_TILE_ODDS, WIN_TILE};

/// Anchor column that centers a shape of `cols` columns
pub fn spawn_column(board_width: usize, cols: usize) -> i32 {
    (board_width.saturating_sub(cols) / 2) as i32
}

/// Spawn a piece of the given kind, centered at row 0
pub fn spawn_kind(board: &Grid<FallingCell>, kind: PieceKind) -> ActivePiece {
    let probe = ActivePiece::new(kind, 0, 0);
    ActivePiece::new(kind, spawn_column(board.width(), probe.shape.cols()), 0)
}

/// Spawn a uniformly random catalog piece, centered at row 0
pub fn spawn_piece<R: RandomSource>(board: &Grid<FallingCell>, rng: &mut R) -> ActivePiece {
    let idx = rng.next_range(CATALOG.len() as u32) as usize;
    spawn_kind(board, CATALOG[idx].kind)
}

/// A freshly spawned piece that does not fit ends the game
pub fn is_game_over(board: &Grid<FallingCell>, piece: &ActivePiece) -> bool {
    !collision::is_valid(board, piece, 0, 0, None)
}

/// Coordinates of every empty tile cell, row-major
pub fn empty_cells(board: &Grid<TileCell>) -> Vec<(usize, usize)> {
    let width = board.width();
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, &v)| v == 0)
        .map(|(i, _)| (i % width, i / width))
        .collect()
}

/// Place a 2 (90%) or a 4 (10%) on a random empty cell; unchanged if full
pub fn spawn_tile<R: RandomSource>(board: &Grid<TileCell>, rng: &mut R) -> Grid<TileCell> {
    let empty = empty_cells(board);
    if empty.is_empty() {
        return board.clone();
    }

    let (x, y) = empty[rng.next_range(empty.len() as u32) as usize];
    let value = if rng.next_range(FOUR_TILE_ODDS) == 0 { 4 } else { 2 };
    board.stamp([(x as i32, y as i32)], value)
}

/// At least one empty cell, or two equal orthogonal neighbours
pub fn can_move(board: &Grid<TileCell>) -> bool {
    let width = board.width();
    let height = board.height();
    let cells = board.cells();

    for y in 0..height {
        for x in 0..width {
            let v = cells[y * width + x];
            if v == 0 {
                return true;
            }
            if x + 1 < width && cells[y * width + x + 1] == v {
                return true;
            }
            if y + 1 < height && cells[(y + 1) * width + x] == v {
                return true;
            }
        }
    }
    false
}

/// Any tile at or above the winning value
pub fn has_won(board: &Grid<TileCell>) -> bool {
    board.cells().iter().any(|&v| v >= WIN_TILE)
}
