//! Hoshen-Kopelman cluster labeling
//!
//! A single row-major scan hands out provisional labels and records merges in
//! an [`EquivalenceTable`]; a second pass rewrites every occupied site with its
//! canonical label. Both passes are linear in the number of sites.
//!
//! Hoshen, J.; Kopelman, R. (1976). "Percolation and cluster distribution. I.
//! Cluster multiple labeling technique and critical concentration algorithm".
//! Phys. Rev. B 14 (8): 3438-3445.

use ndarray::Array2;

use crate::algorithm::equivalence::EquivalenceTable;
use crate::io::configuration::EMPTY_SITE;
use crate::spatial::lattice::Lattice;

/// Outcome of one labeling pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelingSummary {
    /// Number of distinct clusters
    pub clusters: usize,
    /// Provisional labels issued during the scan
    pub provisional_labels: usize,
    /// Merges of two distinct provisional classes
    pub unions: usize,
}

/// Reusable Hoshen-Kopelman labeler
///
/// Keeps its equivalence table between calls so repeated realizations on
/// the same lattice size do not reallocate.
#[derive(Debug, Clone, Default)]
pub struct ClusterLabeler {
    table: EquivalenceTable,
}

impl ClusterLabeler {
    /// Create a labeler with an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a labeler whose table is presized for a lattice
    pub fn for_lattice(lattice: &Lattice) -> Self {
        Self {
            table: EquivalenceTable::with_capacity(lattice.len()),
        }
    }

    /// Equivalence table left behind by the last pass
    pub const fn table(&self) -> &EquivalenceTable {
        &self.table
    }

    /// Replace every occupied site with the canonical label of its cluster
    ///
    /// Any non-zero value counts as occupied, so relabeling an already
    /// labeled lattice is valid. Afterwards two occupied sites share a label
    /// exactly when they are connected through up/down/left/right neighbours.
    pub fn label(&mut self, lattice: &mut Lattice) -> LabelingSummary {
        self.table.reset();

        let cells = lattice.cells_mut();
        self.scan(cells);
        let clusters = self.table.roots();
        self.resolve(cells);

        let summary = LabelingSummary {
            clusters,
            provisional_labels: self.table.issued(),
            unions: self.table.unions(),
        };
        tracing::trace!(
            clusters = summary.clusters,
            provisional_labels = summary.provisional_labels,
            unions = summary.unions,
            "labeled lattice"
        );
        summary
    }

    // Scan order guarantees the up and left neighbours already carry labels
    fn scan(&mut self, cells: &mut Array2<u32>) {
        let (rows, columns) = cells.dim();

        for row in 0..rows {
            for column in 0..columns {
                if cells.get([row, column]).is_none_or(|&cell| cell == EMPTY_SITE) {
                    continue;
                }

                let up = if row > 0 {
                    cells.get([row - 1, column]).copied().unwrap_or(EMPTY_SITE)
                } else {
                    EMPTY_SITE
                };
                let left = if column > 0 {
                    cells.get([row, column - 1]).copied().unwrap_or(EMPTY_SITE)
                } else {
                    EMPTY_SITE
                };

                let label = match (up, left) {
                    (EMPTY_SITE, EMPTY_SITE) => self.table.create_label(),
                    (neighbour, EMPTY_SITE) | (EMPTY_SITE, neighbour) => neighbour,
                    (up, left) => self.table.union(up, left),
                };

                if let Some(cell) = cells.get_mut([row, column]) {
                    *cell = label;
                }
            }
        }
    }

    fn resolve(&mut self, cells: &mut Array2<u32>) {
        for cell in cells.iter_mut() {
            if *cell != EMPTY_SITE {
                *cell = self.table.resolve(*cell);
            }
        }
    }
}

/// Label the clusters of a lattice in place with a one-off labeler
pub fn label_clusters(lattice: &mut Lattice) -> LabelingSummary {
    ClusterLabeler::for_lattice(lattice).label(lattice)
}
