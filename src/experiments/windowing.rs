//! Percolating cluster mass inside growing centred windows
//!
//! Every round produces a lattice whose spanning cluster is roughly centred,
//! then counts how many of that cluster's sites fall inside centred square
//! windows of side `2, 4, ..., L`. The growth of mass with window size gives
//! the fractal dimension of the incipient infinite cluster.

use ndarray::{Axis, Slice};

use crate::algorithm::labeling::ClusterLabeler;
use crate::algorithm::spanning::first_percolating_label;
use crate::io::configuration::{MAX_WINDOWING_ATTEMPTS, WINDOWING_CENTER_TOLERANCE};
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::math::random::Pcg32;
use crate::spatial::lattice::Lattice;

/// Parameters of a mass windowing experiment
#[derive(Debug, Clone, Copy)]
pub struct WindowingConfig {
    /// Side length of the square lattice
    pub size: usize,
    /// Number of rounds to accumulate
    pub rounds: usize,
    /// Occupation probability
    pub probability: f64,
    /// Lattices generated per round before giving up
    pub max_attempts: usize,
    /// Generator seed
    pub seed: u64,
}

impl WindowingConfig {
    /// Configuration with the default attempt limit
    pub const fn new(size: usize, rounds: usize, probability: f64, seed: u64) -> Self {
        Self {
            size,
            rounds,
            probability,
            max_attempts: MAX_WINDOWING_ATTEMPTS,
            seed,
        }
    }
}

/// Accumulated percolating cluster mass per window size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowingResult {
    /// Window side lengths, increasing
    pub window_sizes: Vec<usize>,
    /// Cluster sites found inside each window, summed over rounds
    pub mass: Vec<usize>,
    /// Rounds accumulated
    pub rounds: usize,
}

impl WindowingResult {
    /// Mass per round for each window
    pub fn mean_mass(&self) -> Vec<f64> {
        if self.rounds == 0 {
            return vec![0.0; self.mass.len()];
        }
        self.mass
            .iter()
            .map(|&mass| mass as f64 / self.rounds as f64)
            .collect()
    }
}

/// Mass windowing driver
#[derive(Debug, Clone)]
pub struct MassWindowing {
    config: WindowingConfig,
    rng: Pcg32,
    lattice: Lattice,
    labeler: ClusterLabeler,
    window_sizes: Vec<usize>,
    mass: Vec<usize>,
    rounds: usize,
}

impl MassWindowing {
    /// Create a windowing experiment from its configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the lattice side is smaller than 2 or invalid, or
    /// the attempt limit is zero
    pub fn new(config: WindowingConfig) -> Result<Self> {
        if config.size < 2 {
            return Err(invalid_parameter(
                "size",
                &config.size,
                &"windowing needs a lattice side of at least 2",
            ));
        }
        if config.max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &config.max_attempts,
                &"must be positive",
            ));
        }

        let lattice = Lattice::allocate(config.size, config.size)?;
        let labeler = ClusterLabeler::for_lattice(&lattice);
        let window_sizes: Vec<usize> = (2..=config.size).step_by(2).collect();
        let mass = vec![0; window_sizes.len()];

        Ok(Self {
            config,
            rng: Pcg32::from_seed_value(config.seed),
            lattice,
            labeler,
            window_sizes,
            mass,
            rounds: 0,
        })
    }

    /// Experiment configuration
    pub const fn config(&self) -> &WindowingConfig {
        &self.config
    }

    /// Number of rounds completed so far
    pub const fn completed_rounds(&self) -> usize {
        self.rounds
    }

    /// Generate a centred percolating cluster and add its windowed mass
    ///
    /// # Errors
    ///
    /// Returns an error if no lattice within the attempt limit has a
    /// percolating cluster centred on the lattice
    pub fn run_round(&mut self) -> Result<()> {
        let label = self.centred_percolating_cluster()?;

        for (&window, mass) in self.window_sizes.iter().zip(self.mass.iter_mut()) {
            *mass += window_mass(&self.lattice, label, window);
        }

        self.rounds += 1;
        tracing::debug!(round = self.rounds, label, "windowing round finished");
        Ok(())
    }

    fn centred_percolating_cluster(&mut self) -> Result<u32> {
        let size = self.config.size as f64;
        let low = (size - 2.0) / 2.0 - WINDOWING_CENTER_TOLERANCE;
        let high = (size + 2.0) / 2.0 + WINDOWING_CENTER_TOLERANCE;

        for _ in 0..self.config.max_attempts {
            self.lattice
                .populate(self.config.probability, &mut self.rng, 0);
            self.labeler.label(&mut self.lattice);

            let Some(label) = first_percolating_label(&self.lattice) else {
                continue;
            };
            let Some((row, column)) = center_of_mass(&self.lattice, label) else {
                continue;
            };
            if (low..=high).contains(&row) && (low..=high).contains(&column) {
                return Ok(label);
            }
        }

        Err(computation_error(
            "mass windowing",
            &format!(
                "no centred percolating cluster after {} lattices at p = {}",
                self.config.max_attempts, self.config.probability
            ),
        ))
    }

    /// Summarise the rounds completed so far
    pub fn finish(self) -> WindowingResult {
        tracing::info!(rounds = self.rounds, "mass windowing finished");
        WindowingResult {
            window_sizes: self.window_sizes,
            mass: self.mass,
            rounds: self.rounds,
        }
    }

    /// Run all configured rounds
    ///
    /// # Errors
    ///
    /// Returns an error if any round fails to find a centred cluster
    pub fn run(mut self) -> Result<WindowingResult> {
        while self.rounds < self.config.rounds {
            self.run_round()?;
        }
        Ok(self.finish())
    }
}

/// Sites carrying `label` inside the centred `window x window` square
///
/// The window starts at offset `(side - window) / 2` on each axis and is
/// clipped to the lattice.
pub fn window_mass(lattice: &Lattice, label: u32, window: usize) -> usize {
    let cells = lattice.cells();
    let row_offset = lattice.rows().saturating_sub(window) / 2;
    let column_offset = lattice.columns().saturating_sub(window) / 2;
    let rows = row_offset..(row_offset + window).min(lattice.rows());
    let columns = column_offset..(column_offset + window).min(lattice.columns());

    cells
        .slice_axis(Axis(0), Slice::from(rows))
        .slice_axis(Axis(1), Slice::from(columns))
        .iter()
        .filter(|&&cell| cell == label)
        .count()
}

/// Mean row and column of the sites carrying `label`
pub fn center_of_mass(lattice: &Lattice, label: u32) -> Option<(f64, f64)> {
    let (mut rows, mut columns, mut mass) = (0.0, 0.0, 0usize);
    for ((row, column), &cell) in lattice.cells().indexed_iter() {
        if cell == label {
            rows += row as f64;
            columns += column as f64;
            mass += 1;
        }
    }

    (mass > 0).then(|| (rows / mass as f64, columns / mass as f64))
}
