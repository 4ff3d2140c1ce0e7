//! Square lattice storage, random population and text rendering
//!
//! Cells are kept row-major in a standard-layout `Array2<u32>`, so the flat
//! view returned by [`Lattice::as_slice`] is the plain `rows * columns`
//! array the labeling pass walks. Cell values follow the encoding in
//! [`crate::io::configuration`]: `0` empty, `1` occupied but unlabeled,
//! `2+` cluster label.

use std::fmt;

use ndarray::Array2;

use crate::io::configuration::{
    DEFAULT_STREAM, EMPTY_SITE, MAX_LATTICE_DIMENSION, OCCUPIED_SITE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::math::random::Pcg32;

/// Two-dimensional site lattice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    cells: Array2<u32>,
}

impl Lattice {
    /// Allocate an empty lattice of the given dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// `MAX_LATTICE_DIMENSION`
    pub fn allocate(rows: usize, columns: usize) -> Result<Self> {
        validate_dimension("rows", rows)?;
        validate_dimension("columns", columns)?;

        Ok(Self {
            cells: Array2::zeros((rows, columns)),
        })
    }

    /// Build a lattice from row-major cell values
    ///
    /// Values are capped at the site count plus one, the largest label
    /// labeling can issue. Statistics and spanning detection size their
    /// tables by the largest value, so the cap bounds those allocations.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid, do not match the
    /// number of cells supplied, or a cell exceeds the value cap
    pub fn from_cells(rows: usize, columns: usize, cells: Vec<u32>) -> Result<Self> {
        validate_dimension("rows", rows)?;
        validate_dimension("columns", columns)?;

        let supplied = cells.len();
        let cells = Array2::from_shape_vec((rows, columns), cells).map_err(|e| {
            invalid_parameter(
                "cells",
                &supplied,
                &format!("cannot shape into {rows}x{columns}: {e}"),
            )
        })?;

        let cap = supplied.saturating_add(1);
        if let Some(&value) = cells.iter().find(|&&value| value as usize > cap) {
            return Err(invalid_parameter(
                "cells",
                &value,
                &format!("cell values must not exceed {cap} on a {rows}x{columns} lattice"),
            ));
        }

        Ok(Self { cells })
    }

    /// Occupy every site independently with the given probability
    ///
    /// A non-zero `seed` reseeds `rng` on the default stream first; a zero
    /// seed continues the current stream so back-to-back realizations need
    /// no reseeding. Every cell is overwritten with `1` when a fresh uniform
    /// sample is `<= probability` and `0` otherwise, so probabilities outside
    /// `[0, 1]` simply mean always or never occupied.
    pub fn populate(&mut self, probability: f64, rng: &mut Pcg32, seed: u64) {
        if seed != 0 {
            rng.seed(seed, DEFAULT_STREAM);
        }

        for cell in &mut self.cells {
            *cell = if rng.uniform() <= probability {
                OCCUPIED_SITE
            } else {
                EMPTY_SITE
            };
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.cells.ncols()
    }

    /// Total number of sites
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the lattice has no sites
    ///
    /// Always false for lattices built through [`Lattice::allocate`].
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value at a position, `None` outside the lattice
    pub fn get(&self, row: usize, column: usize) -> Option<u32> {
        self.cells.get([row, column]).copied()
    }

    /// Mutable access to the cell grid, reserved for in-place labeling
    pub(crate) const fn cells_mut(&mut self) -> &mut Array2<u32> {
        &mut self.cells
    }

    /// The cell grid
    pub const fn cells(&self) -> &Array2<u32> {
        &self.cells
    }

    /// Flat row-major view of all cells
    pub fn as_slice(&self) -> &[u32] {
        // Lattices are only ever built in standard layout
        self.cells.as_slice().unwrap_or(&[])
    }

    /// Values of one row, empty outside the lattice
    pub fn row(&self, row: usize) -> &[u32] {
        let columns = self.columns();
        self.as_slice()
            .get(row * columns..(row + 1) * columns)
            .unwrap_or(&[])
    }

    /// Number of occupied sites, labeled or not
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != EMPTY_SITE).count()
    }

    /// Whether no site still carries the transient occupied marker
    pub fn is_labeled(&self) -> bool {
        self.cells.iter().all(|&cell| cell != OCCUPIED_SITE)
    }

    /// Largest value stored in the lattice
    pub fn max_value(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(EMPTY_SITE)
    }

    /// Render the lattice as text, optionally with cell borders
    ///
    /// Empty sites print as `.`, unlabeled occupied sites as `#` and labels as
    /// numbers, all right-aligned to a common width.
    pub fn render(&self, with_borders: bool) -> String {
        let width = self.max_value().to_string().len();
        let columns = self.columns();
        let separator = format!("+{}\n", format!("{}+", "-".repeat(width + 2)).repeat(columns));

        let mut output = String::new();
        if with_borders {
            output.push_str(&separator);
        }

        for row in self.cells.rows() {
            let symbols: Vec<String> = row
                .iter()
                .map(|&cell| {
                    let symbol = match cell {
                        EMPTY_SITE => ".".to_string(),
                        OCCUPIED_SITE => "#".to_string(),
                        label => label.to_string(),
                    };
                    format!("{symbol:>width$}")
                })
                .collect();

            if with_borders {
                output.push_str("| ");
                output.push_str(&symbols.join(" | "));
                output.push_str(" |\n");
                output.push_str(&separator);
            } else {
                output.push_str(&symbols.join(" "));
                output.push('\n');
            }
        }

        output
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    if value > MAX_LATTICE_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("exceeds maximum lattice dimension {MAX_LATTICE_DIMENSION}"),
        ));
    }
    Ok(())
}
