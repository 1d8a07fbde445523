//! Merge module - slide-and-merge rules for the tile-merge variant
//!
//! The primitive works on a single line already oriented so that tiles slide
//! toward index 0. Board moves pull each row or column out in that
//! orientation, run the primitive, and write the result back.
//!
//! Algorithm for one line:
//! 1. Drop the zeros, keeping the order of the remaining tiles
//! 2. Scan left to right; two equal neighbours merge into one doubled tile.
//!    A tile created by a merge never merges again in the same move
//! 3. Pad with zeros back to the original length

use crate::grid::Grid;
use crate::types::{Direction, TileCell};

/// Result of sliding one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMerge {
    pub line: Vec<TileCell>,
    /// Sum of the tiles created by merges
    pub score_delta: u32,
    /// Whether any index changed
    pub moved: bool,
}

/// Slide and merge one line toward index 0
///
/// ```
/// use grid_puzzle_core::merge::slide_and_merge;
///
/// let result = slide_and_merge(&[2, 2, 2, 2]);
/// assert_eq!(result.line, vec![4, 4, 0, 0]);
/// assert_eq!(result.score_delta, 8);
/// ```
pub fn slide_and_merge(line: &[TileCell]) -> LineMerge {
    let survivors: Vec<TileCell> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut out = Vec::with_capacity(line.len());
    let mut score_delta: u32 = 0;
    let mut i = 0;
    while i < survivors.len() {
        let value = survivors[i];
        if survivors.get(i + 1) == Some(&value) {
            let merged = value.saturating_mul(2);
            out.push(merged);
            score_delta = score_delta.saturating_add(merged);
            i += 2;
        } else {
            out.push(value);
            i += 1;
        }
    }
    out.resize(line.len(), 0);

    let moved = out.as_slice() != line;
    LineMerge {
        line: out,
        score_delta,
        moved,
    }
}

/// Result of moving the whole board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardMove {
    pub board: Grid<TileCell>,
    pub score_delta: u32,
    /// False means the move was a no-op: nothing slid, nothing merged
    pub moved: bool,
}

/// Number of lines a move in `direction` processes
fn line_count(board: &Grid<TileCell>, direction: Direction) -> usize {
    if direction.is_horizontal() {
        board.height()
    } else {
        board.width()
    }
}

/// Board coordinate of element `k` of line `index`, oriented toward the
/// wall the tiles slide into
fn line_coord(board: &Grid<TileCell>, direction: Direction, index: usize, k: usize) -> (usize, usize) {
    match direction {
        Direction::Left => (k, index),
        Direction::Right => (board.width() - 1 - k, index),
        Direction::Up => (index, k),
        Direction::Down => (index, board.height() - 1 - k),
    }
}

fn line_len(board: &Grid<TileCell>, direction: Direction) -> usize {
    if direction.is_horizontal() {
        board.width()
    } else {
        board.height()
    }
}

/// Extract line `index` oriented so that `direction` slides toward index 0
pub fn extract_line(board: &Grid<TileCell>, direction: Direction, index: usize) -> Vec<TileCell> {
    let width = board.width();
    (0..line_len(board, direction))
        .map(|k| {
            let (x, y) = line_coord(board, direction, index, k);
            board.cells()[y * width + x]
        })
        .collect()
}

/// Apply a move to every row (Left/Right) or column (Up/Down)
pub fn apply_move(board: &Grid<TileCell>, direction: Direction) -> BoardMove {
    let width = board.width();
    let mut cells = board.cells().to_vec();
    let mut score_delta: u32 = 0;
    let mut moved = false;

    for index in 0..line_count(board, direction) {
        let line = extract_line(board, direction, index);
        let result = slide_and_merge(&line);
        score_delta = score_delta.saturating_add(result.score_delta);
        moved |= result.moved;
        for (k, value) in result.line.into_iter().enumerate() {
            let (x, y) = line_coord(board, direction, index, k);
            cells[y * width + x] = value;
        }
    }

    if !moved {
        return BoardMove {
            board: board.clone(),
            score_delta: 0,
            moved: false,
        };
    }

    log::debug!(
        "tile move {} scored {}",
        direction.as_str(),
        score_delta
    );
    BoardMove {
        board: Grid::from_cells(width, board.height(), cells),
        score_delta,
        moved,
    }
}
