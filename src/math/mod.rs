//! Mathematical utilities for the simulation

/// Exponentially centred probability grids
pub mod grid;
/// PCG32 pseudorandom generator
pub mod random;
