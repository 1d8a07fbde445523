//! Shared types module - data structures and constants used by every crate
//!
//! Everything here is plain data with no external dependencies, so the same
//! definitions serve the engine core, the host scheduler, the input mapper and
//! the terminal renderer.
//!
//! # Board Dimensions
//!
//! | Variant | Width | Height |
//! |---------|-------|--------|
//! | falling-block | 10 | 20 |
//! | tile-merge | 4 | 4 |
//!
//! Coordinates are `(x, y)` with `x` growing to the right and `y` growing
//! downwards; row 0 is the top of the board.
//!
//! # Gravity
//!
//! The falling-block variant advances its piece once per gravity tick. The
//! interval shrinks with the cumulative number of cleared lines:
//!
//! `max(MIN_GRAVITY_MS, BASE_GRAVITY_MS - lines * GRAVITY_STEP_MS)`
//!
//! | Lines | Interval |
//! |-------|----------|
//! | 0 | 500ms |
//! | 10 | 400ms |
//! | 25 | 250ms |
//! | 40+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use grid_puzzle_types::{Direction, Input, Status, Variant};
//!
//! assert_eq!(Direction::from_str("left"), Some(Direction::Left));
//! assert_eq!(Input::from_str("hardDrop"), Some(Input::HardDrop));
//! assert!(Status::Running.is_playable());
//! assert_eq!(Variant::TileMerge.best_score_key(), "2048_best");
//! ```

/// Falling-block board width in cells
pub const FALLING_WIDTH: u8 = 10;

/// Falling-block board height in cells
pub const FALLING_HEIGHT: u8 = 20;

/// Tile-merge board edge length (the board is square)
pub const TILE_BOARD_SIZE: u8 = 4;

/// Gravity interval with no lines cleared
pub const BASE_GRAVITY_MS: u32 = 500;

/// Gravity never gets faster than this
pub const MIN_GRAVITY_MS: u32 = 100;

/// Interval reduction per cleared line
pub const GRAVITY_STEP_MS: u32 = 10;

/// Points per cleared row
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Flat bonus awarded on every piece lock, with or without a clear
pub const LOCK_BONUS: u32 = 10;

/// Tile value that wins the tile-merge game
pub const WIN_TILE: u32 = 2048;

/// Number of tiles placed on a fresh tile-merge board
pub const INITIAL_TILES: usize = 2;

/// Odds of a spawned tile being a 4 are `1 / FOUR_TILE_ODDS`
pub const FOUR_TILE_ODDS: u32 = 10;

/// Persistence key for the falling-block best score
pub const FALLING_BEST_KEY: &str = "tetris_best";

/// Persistence key for the tile-merge best score
pub const TILE_MERGE_BEST_KEY: &str = "2048_best";

/// The seven falling-block piece kinds
///
/// Each kind has a fixed shape in the catalog and a display color:
/// - **I**: Cyan, 1x4 bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple
/// - **S**: Green
/// - **Z**: Red (mirror of S)
/// - **J**: Blue
/// - **L**: Orange (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use grid_puzzle_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Color identifier stored in occupied falling-block cells
///
/// The engine only compares these; the terminal palette decides what they
/// look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

/// A falling-block board cell: empty or locked with a piece color
pub type FallingCell = Option<PieceColor>;

/// A tile-merge board cell: 0 for empty, otherwise a power of two
pub type TileCell = u32;

/// Abstract directional input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Whether the move runs along rows (as opposed to columns)
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Inputs accepted by the session reducer
///
/// Produced by human input, by the host scheduler (`Tick`), or by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// Directional move (both variants)
    Move(Direction),
    /// Rotate the active piece 90° clockwise (falling-block)
    RotateCw,
    /// Drop the active piece to its resting row and lock it (falling-block)
    HardDrop,
    /// One gravity step (falling-block; no-op for tile-merge)
    Tick,
    /// Toggle pause
    Pause,
    /// Start a fresh game; valid from every status
    Restart,
}

impl Input {
    /// Parse input from string (case-insensitive)
    ///
    /// ```
    /// use grid_puzzle_types::{Direction, Input};
    ///
    /// assert_eq!(Input::from_str("moveLeft"), Some(Input::Move(Direction::Left)));
    /// assert_eq!(Input::from_str("rotateCw"), Some(Input::RotateCw));
    /// assert_eq!(Input::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Input::Move(Direction::Left)),
            "moveright" => Some(Input::Move(Direction::Right)),
            "moveup" => Some(Input::Move(Direction::Up)),
            "movedown" => Some(Input::Move(Direction::Down)),
            "rotatecw" => Some(Input::RotateCw),
            "harddrop" => Some(Input::HardDrop),
            "tick" => Some(Input::Tick),
            "pause" => Some(Input::Pause),
            "restart" => Some(Input::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Input::Move(Direction::Left) => "moveLeft",
            Input::Move(Direction::Right) => "moveRight",
            Input::Move(Direction::Up) => "moveUp",
            Input::Move(Direction::Down) => "moveDown",
            Input::RotateCw => "rotateCw",
            Input::HardDrop => "hardDrop",
            Input::Tick => "tick",
            Input::Pause => "pause",
            Input::Restart => "restart",
        }
    }
}

/// Session lifecycle
///
/// `Idle -> Running <-> Paused`, `Running -> GameOver`, and for tile-merge
/// `Running -> Won -> Running`. `Restart` re-enters `Running` from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
    Won,
}

impl Status {
    /// Whether gameplay inputs are applied in this status
    pub fn is_playable(&self) -> bool {
        matches!(self, Status::Running | Status::Won)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Running => "running",
            Status::Paused => "paused",
            Status::GameOver => "game_over",
            Status::Won => "won",
        }
    }
}

/// Which game a session plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    FallingBlock,
    TileMerge,
}

impl Variant {
    /// Parse variant from string (case-insensitive, accepts short aliases)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "falling-block" | "falling" | "tetris" => Some(Variant::FallingBlock),
            "tile-merge" | "merge" | "2048" => Some(Variant::TileMerge),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::FallingBlock => "falling-block",
            Variant::TileMerge => "tile-merge",
        }
    }

    /// Key used to persist the best score for this variant
    pub fn best_score_key(&self) -> &'static str {
        match self {
            Variant::FallingBlock => FALLING_BEST_KEY,
            Variant::TileMerge => TILE_MERGE_BEST_KEY,
        }
    }
}
