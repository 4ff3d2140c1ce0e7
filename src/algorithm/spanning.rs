//! Spanning cluster detection on labeled lattices
//!
//! A cluster percolates when its label appears on two opposite borders:
//! first and last row, or first and last column. Only border cells are
//! inspected, with label marks held in bitsets.

use bitvec::{bitvec, slice::BitSlice, vec::BitVec};

use crate::io::configuration::EMPTY_SITE;
use crate::spatial::lattice::Lattice;

fn border_marks<'a>(cells: impl Iterator<Item = &'a u32>, capacity: usize) -> BitVec {
    let mut marks = bitvec![0; capacity];
    for &label in cells {
        if label != EMPTY_SITE {
            marks.set(label as usize, true);
        }
    }
    marks
}

fn mark_spanning<'a>(
    start: impl Iterator<Item = &'a u32>,
    end: impl Iterator<Item = &'a u32>,
    spanning: &mut BitVec,
) {
    let started = border_marks(start, spanning.len());
    for &label in end {
        if label != EMPTY_SITE && started.get(label as usize).as_deref() == Some(&true) {
            spanning.set(label as usize, true);
        }
    }
}

fn border_capacity(lattice: &Lattice) -> usize {
    let cells = lattice.cells();
    let last_row = lattice.rows() - 1;
    let last_column = lattice.columns() - 1;

    let max_label = cells
        .row(0)
        .iter()
        .chain(cells.row(last_row).iter())
        .chain(cells.column(0).iter())
        .chain(cells.column(last_column).iter())
        .copied()
        .max()
        .unwrap_or(EMPTY_SITE);

    max_label as usize + 1
}

/// Per-label spanning flags
///
/// Bit `label` is set when that cluster touches both the first and last row
/// or both the first and last column. Labels that do not touch the border are
/// beyond the end of the bitset or unset.
pub fn percolating_labels(lattice: &Lattice) -> BitVec {
    if lattice.is_empty() {
        return BitVec::new();
    }

    let cells = lattice.cells();
    let last_row = lattice.rows() - 1;
    let last_column = lattice.columns() - 1;
    let mut spanning = bitvec![0; border_capacity(lattice)];

    mark_spanning(
        cells.row(0).iter(),
        cells.row(last_row).iter(),
        &mut spanning,
    );
    mark_spanning(
        cells.column(0).iter(),
        cells.column(last_column).iter(),
        &mut spanning,
    );

    spanning
}

/// Whether a single label spans the lattice
pub fn is_percolating_label(spanning: &BitSlice, label: u32) -> bool {
    spanning.get(label as usize).as_deref() == Some(&true)
}

/// Smallest label of a spanning cluster, if any
pub fn first_percolating_label(lattice: &Lattice) -> Option<u32> {
    percolating_labels(lattice)
        .first_one()
        .and_then(|label| u32::try_from(label).ok())
}

/// Whether any cluster spans the lattice vertically or horizontally
///
/// The lattice must be labeled; an unlabeled lattice is treated as if every
/// occupied site belonged to one cluster.
pub fn has_percolating_cluster(lattice: &Lattice) -> bool {
    percolating_labels(lattice).any()
}
