//! Host-side scheduling around a [`GameSession`](grid_puzzle_core::GameSession)
//!
//! The core crate only knows how to turn one input into the next session.
//! This crate decides *when*: it queues inputs, converts elapsed time into
//! gravity `Tick`s and writes a new best score back to the store.

pub mod driver;

pub use driver::{DriverConfig, SessionDriver, DEFAULT_MAX_PENDING_INPUTS};
