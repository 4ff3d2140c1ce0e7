//! PCG32 permuted congruential generator
//!
//! A 64-bit linear congruential state with an XSH-RR output permutation
//! producing 32-bit values. Seeding follows the reference procedure
//! (zero, set stream, step, add seed, step) so that a given
//! `(state, stream)` pair reproduces the same lattices on every platform.

use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};

use crate::io::configuration::DEFAULT_STREAM;

const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// Deterministic, reseedable 32-bit generator with 64-bit state
///
/// Each instance carries its own state and stream, so independent
/// realizations can run on independent generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcg32 {
    state: u64,
    increment: u64,
}

impl Pcg32 {
    /// Create a generator seeded with an initial state and stream selector
    pub const fn new(state: u64, stream: u64) -> Self {
        let mut rng = Self {
            state: 0,
            increment: 1,
        };
        rng.seed(state, stream);
        rng
    }

    /// Create a generator on the default stream
    pub const fn from_seed_value(seed: u64) -> Self {
        Self::new(seed, DEFAULT_STREAM)
    }

    /// Reset the generator deterministically
    ///
    /// The double step around the seed addition decorrelates nearby seeds.
    pub const fn seed(&mut self, state: u64, stream: u64) {
        self.state = 0;
        self.increment = (stream << 1) | 1;
        self.step();
        self.state = self.state.wrapping_add(state);
        self.step();
    }

    /// Produce the next 32-bit value and advance the state
    pub const fn next_random(&mut self) -> u32 {
        let old = self.state;
        self.step();
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rotation = (old >> 59) as u32;
        xorshifted.rotate_right(rotation)
    }

    /// Uniform sample in `[0, 1]`, both ends inclusive
    pub fn uniform(&mut self) -> f64 {
        f64::from(self.next_random()) / f64::from(u32::MAX)
    }

    /// Odd increment selecting the output stream
    pub const fn increment(&self) -> u64 {
        self.increment
    }

    const fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.increment);
    }
}

impl Default for Pcg32 {
    fn default() -> Self {
        Self::from_seed_value(crate::io::configuration::DEFAULT_SEED)
    }
}

impl RngCore for Pcg32 {
    fn next_u32(&mut self) -> u32 {
        self.next_random()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}

impl SeedableRng for Pcg32 {
    /// Little-endian initial state followed by little-endian stream selector
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let (state, stream) = seed.split_at(8);
        Self::new(
            u64::from_le_bytes(state.try_into().unwrap_or_default()),
            u64::from_le_bytes(stream.try_into().unwrap_or_default()),
        )
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::from_seed_value(state)
    }
}
