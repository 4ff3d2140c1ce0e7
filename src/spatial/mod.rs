//! Spatial data structures
//!
//! This module contains the lattice type shared by population, labeling
//! and statistics.

/// Lattice storage, population and rendering
pub mod lattice;

pub use lattice::Lattice;
