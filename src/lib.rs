//! Grid puzzle engine (workspace facade crate).
//!
//! Re-exports the member crates as `grid_puzzle::{core,engine,input,store,term,types}`
//! and holds the command-line configuration of the terminal binary.

pub mod config;

pub use grid_puzzle_core as core;
pub use grid_puzzle_engine as engine;
pub use grid_puzzle_input as input;
pub use grid_puzzle_store as store;
pub use grid_puzzle_term as term;
pub use grid_puzzle_types as types;
