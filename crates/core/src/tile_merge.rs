//! Tile-merge game - a square board of power-of-two tiles.

use crate::grid::Grid;
use crate::merge::apply_move;
use crate::rng::RandomSource;
use crate::spawn;
use crate::types::{Direction, TileCell, INITIAL_TILES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMerge {
    board: Grid<TileCell>,
}

/// Outcome of one directional move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileStep {
    pub game: TileMerge,
    pub score_delta: u32,
    /// False for a no-op move (no tile spawned, no score)
    pub moved: bool,
}

impl TileMerge {
    /// Empty board
    pub fn new(size: usize) -> Self {
        Self {
            board: Grid::new(size, size),
        }
    }

    /// Fresh board with the opening tiles
    pub fn start<R: RandomSource>(size: usize, rng: &mut R) -> Self {
        let mut board = Grid::new(size, size);
        for _ in 0..INITIAL_TILES {
            board = spawn::spawn_tile(&board, rng);
        }
        Self { board }
    }

    pub fn from_board(board: Grid<TileCell>) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Grid<TileCell> {
        &self.board
    }

    /// Slide every line toward `direction`; spawns a tile only if something moved
    pub fn slide<R: RandomSource>(&self, direction: Direction, rng: &mut R) -> TileStep {
        let result = apply_move(&self.board, direction);
        if !result.moved {
            return TileStep {
                game: self.clone(),
                score_delta: 0,
                moved: false,
            };
        }
        TileStep {
            game: Self {
                board: spawn::spawn_tile(&result.board, rng),
            },
            score_delta: result.score_delta,
            moved: true,
        }
    }

    pub fn can_move(&self) -> bool {
        spawn::can_move(&self.board)
    }

    pub fn has_won(&self) -> bool {
        spawn::has_won(&self.board)
    }

    pub fn max_tile(&self) -> TileCell {
        self.board.cells().iter().copied().max().unwrap_or(0)
    }
}
