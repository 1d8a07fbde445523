//! Input source: physical keys and touch gestures to session inputs
//!
//! Key mapping depends on the variant (Up rotates in the falling-block game
//! but slides tiles in the tile-merge game). Swipes are classified by their
//! dominant axis.

pub mod map;
pub mod swipe;

pub use grid_puzzle_types as types;

pub use map::{map_key, should_quit};
pub use swipe::classify_swipe;
