//! Monte-Carlo site percolation on two-dimensional square lattices
//!
//! Sites are occupied independently at random, connected clusters are found
//! with the Hoshen-Kopelman algorithm, spanning clusters are detected and
//! cluster-size histograms are aggregated across realizations to estimate the
//! critical probability, percolation probability curves and cluster mass
//! scaling.

#![forbid(unsafe_code)]

/// Cluster labeling, label equivalence and spanning detection
pub mod algorithm;
/// Cluster statistics, aggregation and derived observables
pub mod analysis;
/// Experiment drivers built on the labeling core
pub mod experiments;
/// Input/output operations, configuration and error handling
pub mod io;
/// Random number generation and probability grids
pub mod math;
/// Lattice storage and population
pub mod spatial;

pub use algorithm::labeling::{ClusterLabeler, label_clusters};
pub use algorithm::spanning::has_percolating_cluster;
pub use analysis::aggregation::aggregate_statistics;
pub use analysis::statistics::{ClusterHistogram, ClusterStatistics, cluster_statistics};
pub use io::error::{PercolationError, Result};
pub use math::random::Pcg32;
pub use spatial::Lattice;
