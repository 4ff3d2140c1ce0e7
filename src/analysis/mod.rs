//! Analysis modules for cluster statistics and percolation observables

/// Accumulation of histograms across realizations
pub mod aggregation;
/// Percolation probability and percolating cluster mass
pub mod observables;
/// Cluster size histograms of single lattices
pub mod statistics;
