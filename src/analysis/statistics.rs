//! Cluster size histograms for labeled lattices

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::algorithm::spanning::{is_percolating_label, percolating_labels};
use crate::io::configuration::EMPTY_SITE;
use crate::spatial::lattice::Lattice;

/// Number of clusters of one size and how many of them span the lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeBin {
    /// Clusters having this size
    pub count: usize,
    /// Clusters of this size that percolate
    pub percolated: usize,
}

/// Histogram of cluster sizes keyed by size, in increasing order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClusterHistogram {
    bins: BTreeMap<usize, SizeBin>,
}

impl ClusterHistogram {
    /// Create an empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one cluster of the given size
    pub fn record(&mut self, size: usize, percolated: bool) {
        self.add(
            size,
            SizeBin {
                count: 1,
                percolated: usize::from(percolated),
            },
        );
    }

    /// Add a whole bin to the entry for `size`
    pub fn add(&mut self, size: usize, bin: SizeBin) {
        let entry = self.bins.entry(size).or_default();
        entry.count += bin.count;
        entry.percolated += bin.percolated;
    }

    /// Add every bin of `other` into this histogram
    ///
    /// Summing by size key makes merging associative and commutative.
    pub fn merge(&mut self, other: &Self) {
        for (&size, &bin) in &other.bins {
            self.add(size, bin);
        }
    }

    /// Bin for a size, if any cluster had it
    pub fn get(&self, size: usize) -> Option<SizeBin> {
        self.bins.get(&size).copied()
    }

    /// Iterate over `(size, bin)` pairs in increasing size order
    pub fn iter(&self) -> btree_map::Iter<'_, usize, SizeBin> {
        self.bins.iter()
    }

    /// Distinct cluster sizes in increasing order
    pub fn sizes(&self) -> Vec<usize> {
        self.bins.keys().copied().collect()
    }

    /// Cluster counts, parallel to [`ClusterHistogram::sizes`]
    pub fn counts(&self) -> Vec<usize> {
        self.bins.values().map(|bin| bin.count).collect()
    }

    /// Percolating cluster counts, parallel to [`ClusterHistogram::sizes`]
    pub fn percolated_counts(&self) -> Vec<usize> {
        self.bins.values().map(|bin| bin.percolated).collect()
    }

    /// Number of distinct sizes
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Whether no cluster was recorded
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Total number of clusters
    pub fn cluster_count(&self) -> usize {
        self.bins.values().map(|bin| bin.count).sum()
    }

    /// Total number of sites covered by the recorded clusters
    pub fn occupied_sites(&self) -> usize {
        self.bins.iter().map(|(size, bin)| size * bin.count).sum()
    }

    /// Whether any recorded cluster percolates
    pub fn has_percolating_cluster(&self) -> bool {
        self.bins.values().any(|bin| bin.percolated > 0)
    }
}

impl<'a> IntoIterator for &'a ClusterHistogram {
    type Item = (&'a usize, &'a SizeBin);
    type IntoIter = btree_map::Iter<'a, usize, SizeBin>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Occupied and empty site totals of one lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupancy {
    /// Occupied sites
    pub filled: usize,
    /// Empty sites
    pub empty: usize,
}

/// Cluster statistics of a single realization
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClusterStatistics {
    /// Cluster size histogram
    pub histogram: ClusterHistogram,
    /// Site totals, present only when requested
    pub occupancy: Option<Occupancy>,
}

impl ClusterStatistics {
    /// Whether this realization has a spanning cluster
    pub fn percolated(&self) -> bool {
        self.histogram.has_percolating_cluster()
    }
}

/// Build the cluster size histogram of a labeled lattice
///
/// Sizes are counted per label in one pass, then grouped by size together
/// with the number of spanning clusters of each size. Site totals are
/// computed only when `with_occupancy` is set and then always both.
pub fn cluster_statistics(lattice: &Lattice, with_occupancy: bool) -> ClusterStatistics {
    let mut label_sizes = vec![0usize; lattice.max_value() as usize + 1];
    for &label in lattice.as_slice() {
        if label != EMPTY_SITE {
            if let Some(size) = label_sizes.get_mut(label as usize) {
                *size += 1;
            }
        }
    }

    let spanning = percolating_labels(lattice);
    let mut histogram = ClusterHistogram::new();
    for (label, &size) in (0u32..).zip(&label_sizes) {
        if size > 0 {
            histogram.record(size, is_percolating_label(&spanning, label));
        }
    }

    let occupancy = with_occupancy.then(|| {
        let filled = histogram.occupied_sites();
        Occupancy {
            filled,
            empty: lattice.len() - filled,
        }
    });

    ClusterStatistics {
        histogram,
        occupancy,
    }
}
