//! Session module - the game state machine shared by both variants
//!
//! A [`GameSession`] is a value. [`GameSession::step`] takes the current
//! session and one [`Input`] and returns the next session; nothing else
//! changes a session. The host keeps the only mutable reference and swaps in
//! each result.
//!
//! # Lifecycle
//!
//! ```text
//! Idle --Restart--> Running <--Pause--> Paused
//!                   Running --no spawn / no moves--> GameOver
//!                   Running --2048 reached--> Won --any move--> Running
//! any --Restart--> Running (fresh board)
//! ```
//!
//! `Paused` and `GameOver` ignore everything except `Restart` (and `Pause`
//! while paused). `Won` is reported once per game; the next move resumes
//! play.
//!
//! # Example
//!
//! ```
//! use grid_puzzle_core::{GameSession, SimpleRng};
//! use grid_puzzle_types::{Direction, Input, Status, Variant};
//!
//! let session = GameSession::new(Variant::TileMerge, SimpleRng::new(7));
//! assert_eq!(session.status(), Status::Idle);
//!
//! let session = session.step(Input::Restart);
//! assert_eq!(session.status(), Status::Running);
//!
//! let next = session.step(Input::Move(Direction::Left));
//! assert!(next.score() >= session.score());
//! ```

use crate::falling::{FallingBlock, FallingStep};
use crate::grid::Grid;
use crate::pieces::ActivePiece;
use crate::rng::{RandomSource, SimpleRng};
use crate::tile_merge::TileMerge;
use crate::types::{
    Direction, FallingCell, Input, Status, TileCell, Variant, FALLING_HEIGHT, FALLING_WIDTH,
    TILE_BOARD_SIZE,
};

/// Variant-specific board state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Play {
    FallingBlock(FallingBlock),
    TileMerge(TileMerge),
}

impl Play {
    fn empty(variant: Variant) -> Self {
        match variant {
            Variant::FallingBlock => {
                Play::FallingBlock(FallingBlock::new(FALLING_WIDTH as usize, FALLING_HEIGHT as usize))
            }
            Variant::TileMerge => Play::TileMerge(TileMerge::new(TILE_BOARD_SIZE as usize)),
        }
    }
}

/// One game from start to finish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession<R = SimpleRng> {
    variant: Variant,
    play: Play,
    score: u32,
    best_score: u32,
    status: Status,
    /// Win already reported this game (tile-merge)
    win_reported: bool,
    /// Restarts since construction
    episode: u32,
    rng: R,
}

impl<R: RandomSource + Clone> GameSession<R> {
    /// Idle session with an empty board
    pub fn new(variant: Variant, rng: R) -> Self {
        Self {
            variant,
            play: Play::empty(variant),
            score: 0,
            best_score: 0,
            status: Status::Idle,
            win_reported: false,
            episode: 0,
            rng,
        }
    }

    /// Seed the best score (typically read from the store by the host)
    pub fn with_best_score(self, best_score: u32) -> Self {
        Self {
            best_score: best_score.max(self.score),
            ..self
        }
    }

    /// Running session built around an existing board state
    pub fn from_play(play: Play, rng: R) -> Self {
        let variant = match play {
            Play::FallingBlock(_) => Variant::FallingBlock,
            Play::TileMerge(_) => Variant::TileMerge,
        };
        Self {
            variant,
            play,
            score: 0,
            best_score: 0,
            status: Status::Running,
            win_reported: false,
            episode: 0,
            rng,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn play(&self) -> &Play {
        &self.play
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn falling_board(&self) -> Option<&Grid<FallingCell>> {
        match &self.play {
            Play::FallingBlock(game) => Some(game.board()),
            Play::TileMerge(_) => None,
        }
    }

    pub fn tile_board(&self) -> Option<&Grid<TileCell>> {
        match &self.play {
            Play::TileMerge(game) => Some(game.board()),
            Play::FallingBlock(_) => None,
        }
    }

    pub fn active_piece(&self) -> Option<&ActivePiece> {
        match &self.play {
            Play::FallingBlock(game) => game.active(),
            Play::TileMerge(_) => None,
        }
    }

    /// On-board cells of the active piece (empty for tile-merge)
    pub fn active_cells(&self) -> Vec<(usize, usize)> {
        match &self.play {
            Play::FallingBlock(game) => game.active_cells(),
            Play::TileMerge(_) => Vec::new(),
        }
    }

    pub fn ghost_y(&self) -> Option<i32> {
        match &self.play {
            Play::FallingBlock(game) => game.ghost_y(),
            Play::TileMerge(_) => None,
        }
    }

    pub fn lines_cleared(&self) -> u32 {
        match &self.play {
            Play::FallingBlock(game) => game.lines_cleared(),
            Play::TileMerge(_) => 0,
        }
    }

    /// Gravity cadence; `None` for tile-merge, which has no timer
    pub fn gravity_interval_ms(&self) -> Option<u32> {
        match &self.play {
            Play::FallingBlock(game) => Some(game.gravity_interval_ms()),
            Play::TileMerge(_) => None,
        }
    }

    pub fn max_tile(&self) -> TileCell {
        match &self.play {
            Play::TileMerge(game) => game.max_tile(),
            Play::FallingBlock(_) => 0,
        }
    }

    /// Apply one input and return the next session
    pub fn step(&self, input: Input) -> Self {
        match (input, self.status) {
            (Input::Restart, _) => self.restart(),
            (Input::Pause, Status::Running | Status::Won) => Self {
                status: Status::Paused,
                ..self.clone()
            },
            (Input::Pause, Status::Paused) => Self {
                status: Status::Running,
                ..self.clone()
            },
            (_, Status::Running | Status::Won) => match &self.play {
                Play::FallingBlock(game) => self.step_falling(game, input),
                Play::TileMerge(game) => self.step_tile(game, input),
            },
            _ => self.clone(),
        }
    }

    fn restart(&self) -> Self {
        let mut rng = self.rng.clone();
        let (play, status) = match self.variant {
            Variant::FallingBlock => {
                let (game, ok) = FallingBlock::start(
                    FALLING_WIDTH as usize,
                    FALLING_HEIGHT as usize,
                    &mut rng,
                );
                let status = if ok { Status::Running } else { Status::GameOver };
                (Play::FallingBlock(game), status)
            }
            Variant::TileMerge => (
                Play::TileMerge(TileMerge::start(TILE_BOARD_SIZE as usize, &mut rng)),
                Status::Running,
            ),
        };
        let episode = self.episode.wrapping_add(1);
        log::info!("{} episode {} started", self.variant.as_str(), episode);

        Self {
            variant: self.variant,
            play,
            score: 0,
            best_score: self.best_score,
            status,
            win_reported: false,
            episode,
            rng,
        }
    }

    fn step_falling(&self, game: &FallingBlock, input: Input) -> Self {
        let mut rng = self.rng.clone();
        let moved = match input {
            Input::Move(Direction::Left) => game.shift(-1, 0),
            Input::Move(Direction::Right) => game.shift(1, 0),
            Input::Move(Direction::Up) | Input::RotateCw => game.rotate(),
            Input::Move(Direction::Down) | Input::Tick => {
                return self.after_falling(game.step_down(&mut rng), rng)
            }
            Input::HardDrop => return self.after_falling(game.hard_drop(&mut rng), rng),
            Input::Pause | Input::Restart => None,
        };
        match moved {
            Some(next) => Self {
                play: Play::FallingBlock(next),
                ..self.clone()
            },
            None => self.clone(),
        }
    }

    fn after_falling(&self, step: FallingStep, rng: R) -> Self {
        let score = self.score.saturating_add(step.score_delta);
        let status = if step.game_over {
            log::info!(
                "falling-block game over: score {} lines {}",
                score,
                step.game.lines_cleared()
            );
            Status::GameOver
        } else {
            self.status
        };
        Self {
            play: Play::FallingBlock(step.game),
            score,
            best_score: self.best_score.max(score),
            status,
            rng,
            ..self.clone()
        }
    }

    fn step_tile(&self, game: &TileMerge, input: Input) -> Self {
        let Input::Move(direction) = input else {
            return self.clone();
        };

        let mut rng = self.rng.clone();
        let step = game.slide(direction, &mut rng);
        let score = self.score.saturating_add(step.score_delta);

        let mut win_reported = self.win_reported;
        let status = if !win_reported && step.game.has_won() {
            win_reported = true;
            log::info!("tile-merge won with score {}", score);
            Status::Won
        } else if !step.game.can_move() {
            log::info!("tile-merge game over: score {}", score);
            Status::GameOver
        } else {
            Status::Running
        };

        Self {
            play: Play::TileMerge(step.game),
            score,
            best_score: self.best_score.max(score),
            status,
            win_reported,
            rng,
            ..self.clone()
        }
    }
}
