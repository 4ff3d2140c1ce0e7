//! Monte-Carlo experiments that repeatedly populate, label and measure lattices
//!
//! Each driver owns its generator, lattice and labeler and exposes a
//! per-step method so callers can report progress between steps.

/// Critical probability estimation by bisection
pub mod bisection;
/// Probability sweep over an exponentially centred grid
pub mod sweep;
/// Percolating cluster mass against window size
pub mod windowing;
