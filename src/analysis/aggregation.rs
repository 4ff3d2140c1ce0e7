//! Accumulation of cluster statistics across independent realizations

use crate::analysis::statistics::{ClusterHistogram, ClusterStatistics};

/// Merge a realization's histogram into a running aggregate
///
/// Counts and percolated counts are summed for sizes already present; new
/// sizes are inserted. An empty `from` leaves `into` untouched and merging
/// into an empty aggregate copies `from`.
pub fn aggregate_statistics(into: &mut ClusterHistogram, from: &ClusterHistogram) {
    into.merge(from);
}

/// Running cluster statistics for one occupation probability
///
/// Owned by a driver for the duration of a probability value and reset
/// before the next one.
#[derive(Debug, Clone, Default)]
pub struct HistogramAccumulator {
    histogram: ClusterHistogram,
    realizations: usize,
    percolating_realizations: usize,
}

impl HistogramAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one realization
    pub fn record(&mut self, statistics: &ClusterStatistics) {
        aggregate_statistics(&mut self.histogram, &statistics.histogram);
        self.realizations += 1;
        if statistics.percolated() {
            self.percolating_realizations += 1;
        }
    }

    /// Combine with an accumulator built from other realizations
    pub fn merge(&mut self, other: &Self) {
        aggregate_statistics(&mut self.histogram, &other.histogram);
        self.realizations += other.realizations;
        self.percolating_realizations += other.percolating_realizations;
    }

    /// Aggregated histogram so far
    pub const fn histogram(&self) -> &ClusterHistogram {
        &self.histogram
    }

    /// Number of realizations recorded
    pub const fn realizations(&self) -> usize {
        self.realizations
    }

    /// Number of recorded realizations that had a spanning cluster
    pub const fn percolating_realizations(&self) -> usize {
        self.percolating_realizations
    }

    /// Clear all accumulated data
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Take the aggregated histogram
    pub fn into_histogram(self) -> ClusterHistogram {
        self.histogram
    }
}
