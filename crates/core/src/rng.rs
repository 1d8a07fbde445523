//! RNG module - injectable randomness for spawns
//!
//! Sessions own their random source, so a seed fully determines a game and
//! replays are exact. `SimpleRng` is the default source; tests can plug in
//! anything implementing [`RandomSource`].

/// Source of random numbers consumed by the spawn controller
pub trait RandomSource {
    /// Next raw 32-bit value
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, max)`; returns 0 when `max == 0`
    ///
    /// Uses the high bits of `next_u32` (multiply-shift), which are the
    /// well-distributed bits of an LCG.
    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state (reseeding with it continues the same stream)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}
