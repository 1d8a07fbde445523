//! Core game logic - pure, deterministic, and testable
//!
//! Both puzzle variants live here: a falling-block game (pieces drop onto a
//! 10x20 well, full rows clear) and a tile-merge game (tiles slide on a 4x4
//! board, equal neighbours merge). Nothing in this crate touches a terminal,
//! a clock, or the filesystem.
//!
//! - **Deterministic**: every random draw goes through a [`RandomSource`], so
//!   the same seed and the same inputs replay the same game
//! - **Value semantics**: boards and sessions are never mutated in place;
//!   each operation returns a new value
//!
//! # Module Structure
//!
//! - [`grid`]: generic rectangular board
//! - [`pieces`]: shape matrices, rotation and the piece catalog
//! - [`collision`]: bounds and overlap checks for the active piece
//! - [`line_clear`]: full-row removal
//! - [`merge`]: slide-and-merge for tile lines and whole boards
//! - [`spawn`]: new pieces and tiles, terminal-state detection
//! - [`scoring`]: score rules, gravity cadence, best-score bookkeeping
//! - [`falling`] / [`tile_merge`]: per-variant game state
//! - [`session`]: the state machine that turns inputs into new sessions
//!
//! # Example
//!
//! ```
//! use grid_puzzle_core::{GameSession, SimpleRng};
//! use grid_puzzle_types::{Input, Status, Variant};
//!
//! let session = GameSession::new(Variant::FallingBlock, SimpleRng::new(12345))
//!     .step(Input::Restart);
//! assert_eq!(session.status(), Status::Running);
//!
//! let session = session.step(Input::HardDrop);
//! assert!(session.score() >= 10);
//! ```

pub mod collision;
pub mod error;
pub mod falling;
pub mod grid;
pub mod line_clear;
pub mod merge;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod spawn;
pub mod tile_merge;

pub use grid_puzzle_types as types;

// Re-export commonly used types for convenience
pub use error::GridError;
pub use falling::{FallingBlock, FallingStep};
pub use grid::Grid;
pub use merge::{apply_move, slide_and_merge, BoardMove, LineMerge};
pub use pieces::{catalog_entry, ActivePiece, Shape, CATALOG};
pub use rng::{RandomSource, SimpleRng};
pub use scoring::{ScoreKeeper, ScoreStore};
pub use session::{GameSession, Play};
pub use tile_merge::{TileMerge, TileStep};
