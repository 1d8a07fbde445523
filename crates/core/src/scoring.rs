//! Scoring module - per-variant score rules, gravity cadence and best score
//!
//! Falling-block: every lock awards `lines * 100 + 10`. The flat `+10` is paid
//! even when no row clears.
//!
//! Tile-merge: a move awards the sum of the tiles its merges created (see
//! [`crate::merge`]); sliding alone awards nothing.
//!
//! The best score lives on the session and is persisted through a
//! [`ScoreStore`] owned by the host. [`ScoreKeeper`] remembers the last value
//! written so the store is only touched when the best actually rises.

use crate::types::{
    Variant, BASE_GRAVITY_MS, GRAVITY_STEP_MS, LINE_CLEAR_POINTS, LOCK_BONUS, MIN_GRAVITY_MS,
};

/// Points for locking a piece that cleared `lines` rows
pub fn lock_score(lines: usize) -> u32 {
    (lines as u32)
        .saturating_mul(LINE_CLEAR_POINTS)
        .saturating_add(LOCK_BONUS)
}

/// Gravity interval after `lines` cumulative cleared lines
///
/// `max(100, 500 - lines * 10)` milliseconds.
pub fn gravity_interval_ms(lines: u32) -> u32 {
    BASE_GRAVITY_MS
        .saturating_sub(lines.saturating_mul(GRAVITY_STEP_MS))
        .max(MIN_GRAVITY_MS)
}

/// Best-score persistence collaborator, keyed per game
pub trait ScoreStore {
    /// Stored best for `key`, 0 when nothing was stored yet
    fn best_score(&self, key: &str) -> u32;

    fn set_best_score(&mut self, key: &str, score: u32);
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn best_score(&self, key: &str) -> u32 {
        (**self).best_score(key)
    }

    fn set_best_score(&mut self, key: &str, score: u32) {
        (**self).set_best_score(key, score)
    }
}

/// Tracks the persisted best score of one variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreKeeper {
    key: &'static str,
    persisted: u32,
}

impl ScoreKeeper {
    /// Read the current best for `variant` from the store
    pub fn load<S: ScoreStore + ?Sized>(variant: Variant, store: &S) -> Self {
        let key = variant.best_score_key();
        Self {
            key,
            persisted: store.best_score(key),
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn best(&self) -> u32 {
        self.persisted
    }

    /// Persist `best` if it beats what was stored; returns whether it wrote
    pub fn commit<S: ScoreStore + ?Sized>(&mut self, best: u32, store: &mut S) -> bool {
        if best <= self.persisted {
            return false;
        }
        store.set_best_score(self.key, best);
        log::info!("new best score for {}: {}", self.key, best);
        self.persisted = best;
        true
    }
}
