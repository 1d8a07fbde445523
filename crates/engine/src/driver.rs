use std::collections::VecDeque;

use grid_puzzle_core::{GameSession, RandomSource, ScoreKeeper, ScoreStore, SimpleRng};
use grid_puzzle_types::{Input, Status, Variant};

pub const DEFAULT_MAX_PENDING_INPUTS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Inputs beyond this many waiting are dropped
    pub max_pending_inputs: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            max_pending_inputs: DEFAULT_MAX_PENDING_INPUTS,
        }
    }
}

/// Owns the session and feeds it inputs one at a time
///
/// Inputs are applied in arrival order. Gravity ticks are only generated
/// while a falling-block session is `Running`; pausing stops the clock.
pub struct SessionDriver<S: ScoreStore, R = SimpleRng> {
    session: GameSession<R>,
    store: S,
    keeper: ScoreKeeper,
    pending: VecDeque<Input>,
    config: DriverConfig,
    drop_timer_ms: u32,
    dropped_inputs: u64,
}

impl<S: ScoreStore, R: RandomSource + Clone> SessionDriver<S, R> {
    /// Idle session seeded with the stored best score
    pub fn new(variant: Variant, rng: R, store: S, config: DriverConfig) -> Self {
        let keeper = ScoreKeeper::load(variant, &store);
        let session = GameSession::new(variant, rng).with_best_score(keeper.best());
        Self {
            session,
            store,
            keeper,
            pending: VecDeque::with_capacity(config.max_pending_inputs),
            config,
            drop_timer_ms: 0,
            dropped_inputs: 0,
        }
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn config(&self) -> DriverConfig {
        self.config
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Inputs rejected because the queue was full
    pub fn dropped_inputs(&self) -> u64 {
        self.dropped_inputs
    }

    /// Queue an input; returns false if the queue was full and it was dropped
    pub fn enqueue(&mut self, input: Input) -> bool {
        if self.pending.len() >= self.config.max_pending_inputs {
            self.dropped_inputs += 1;
            log::warn!(
                "input queue full ({}), dropping {}",
                self.pending.len(),
                input.as_str()
            );
            return false;
        }
        self.pending.push_back(input);
        true
    }

    /// Apply queued inputs, then any gravity ticks that `elapsed_ms` has paid for
    ///
    /// Returns the number of transitions applied.
    pub fn advance(&mut self, elapsed_ms: u32) -> usize {
        let mut applied = 0;
        while let Some(input) = self.pending.pop_front() {
            self.apply(input);
            applied += 1;
        }

        if self.session.status() != Status::Running {
            return applied;
        }
        let Some(_) = self.session.gravity_interval_ms() else {
            return applied;
        };

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        // Interval shrinks as lines clear, so re-read it every tick.
        while let Some(interval) = self.session.gravity_interval_ms() {
            if self.drop_timer_ms < interval || self.session.status() != Status::Running {
                break;
            }
            self.drop_timer_ms -= interval;
            self.apply(Input::Tick);
            applied += 1;
        }
        applied
    }

    fn apply(&mut self, input: Input) {
        let next = self.session.step(input);
        if input == Input::Restart || next.status() == Status::GameOver {
            self.drop_timer_ms = 0;
        }
        self.session = next;
        self.keeper.commit(self.session.best_score(), &mut self.store);
    }
}
