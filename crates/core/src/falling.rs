//! Falling-block game - board, active piece and the move/lock rules
//!
//! Every operation takes `&self` and returns a new value. Rejected moves and
//! rotations return `None` so callers can keep the old state untouched.

use crate::collision;
use crate::grid::Grid;
use crate::line_clear::clear_lines;
use crate::pieces::ActivePiece;
use crate::rng::RandomSource;
use crate::scoring::{gravity_interval_ms, lock_score};
use crate::spawn;
use crate::types::FallingCell;

/// Board plus active piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallingBlock {
    board: Grid<FallingCell>,
    active: Option<ActivePiece>,
    lines: u32,
}

/// Outcome of a step that may lock the piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallingStep {
    pub game: FallingBlock,
    pub score_delta: u32,
    pub locked: bool,
    pub cleared: usize,
    /// The piece spawned after the lock does not fit
    pub game_over: bool,
}

impl FallingBlock {
    /// Empty board, no piece yet
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            board: Grid::new(width, height),
            active: None,
            lines: 0,
        }
    }

    /// Fresh board with the first piece spawned. The flag is false when the
    /// first piece already does not fit.
    pub fn start<R: RandomSource>(width: usize, height: usize, rng: &mut R) -> (Self, bool) {
        let game = Self::new(width, height);
        let piece = spawn::spawn_piece(&game.board, rng);
        if spawn::is_game_over(&game.board, &piece) {
            return (game, false);
        }
        (
            Self {
                active: Some(piece),
                ..game
            },
            true,
        )
    }

    /// Use an existing board and piece (tests, replays)
    pub fn from_parts(board: Grid<FallingCell>, active: Option<ActivePiece>, lines: u32) -> Self {
        Self {
            board,
            active,
            lines,
        }
    }

    pub fn board(&self) -> &Grid<FallingCell> {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    /// Cumulative cleared lines
    pub fn lines_cleared(&self) -> u32 {
        self.lines
    }

    /// Current gravity cadence
    pub fn gravity_interval_ms(&self) -> u32 {
        gravity_interval_ms(self.lines)
    }

    /// Try to shift the active piece; `None` if there is no piece or it collides
    pub fn shift(&self, dx: i32, dy: i32) -> Option<Self> {
        let active = self.active?;
        if !collision::is_valid(&self.board, &active, dx, dy, None) {
            return None;
        }
        Some(Self {
            active: Some(active.translated(dx, dy)),
            ..self.clone()
        })
    }

    /// Try to rotate clockwise in place; `None` if the rotated shape collides
    pub fn rotate(&self) -> Option<Self> {
        let active = self.active?;
        let candidate = active.shape.rotate_clockwise();
        if !collision::is_valid(&self.board, &active, 0, 0, Some(&candidate)) {
            return None;
        }
        Some(Self {
            active: Some(active.rotated()),
            ..self.clone()
        })
    }

    /// One row down, locking the piece when it cannot fall
    pub fn step_down<R: RandomSource>(&self, rng: &mut R) -> FallingStep {
        match self.shift(0, 1) {
            Some(game) => FallingStep {
                game,
                score_delta: 0,
                locked: false,
                cleared: 0,
                game_over: false,
            },
            None => self.lock(rng),
        }
    }

    /// Drop to the resting row and lock
    pub fn hard_drop<R: RandomSource>(&self, rng: &mut R) -> FallingStep {
        let Some(active) = self.active else {
            return self.unchanged();
        };
        let distance = collision::drop_distance(&self.board, &active);
        let dropped = Self {
            active: Some(active.translated(0, distance)),
            ..self.clone()
        };
        dropped.lock(rng)
    }

    /// Write the piece into the board, clear lines, score, spawn the next piece
    pub fn lock<R: RandomSource>(&self, rng: &mut R) -> FallingStep {
        let Some(active) = self.active else {
            return self.unchanged();
        };

        // Cells still above row 0 are discarded.
        let stamped = self.board.stamp(active.cells(), Some(active.color));
        let clear = clear_lines(&stamped);
        let lines = self.lines + clear.cleared as u32;
        let score_delta = lock_score(clear.cleared);

        if clear.cleared > 0 {
            log::debug!("cleared rows {:?} (total {})", clear.rows, lines);
        }

        let next = spawn::spawn_piece(&clear.board, rng);
        let game_over = spawn::is_game_over(&clear.board, &next);
        log::debug!(
            "locked {} at ({}, {}), next {}",
            active.kind.as_str(),
            active.x,
            active.y,
            next.kind.as_str()
        );

        FallingStep {
            game: Self {
                board: clear.board,
                active: if game_over { None } else { Some(next) },
                lines,
            },
            score_delta,
            locked: true,
            cleared: clear.cleared,
            game_over,
        }
    }

    fn unchanged(&self) -> FallingStep {
        FallingStep {
            game: self.clone(),
            score_delta: 0,
            locked: false,
            cleared: 0,
            game_over: false,
        }
    }

    /// Row the active piece would land on
    pub fn ghost_y(&self) -> Option<i32> {
        let active = self.active?;
        Some(active.y + collision::drop_distance(&self.board, &active))
    }

    /// On-board cells of the active piece
    pub fn active_cells(&self) -> Vec<(usize, usize)> {
        let Some(active) = self.active else {
            return Vec::new();
        };
        active
            .cells()
            .into_iter()
            .filter(|&(x, y)| {
                x >= 0 && y >= 0 && (x as usize) < self.board.width() && (y as usize) < self.board.height()
            })
            .map(|(x, y)| (x as usize, y as usize))
            .collect()
    }
}
