//! Critical probability estimation by bisection
//!
//! Each trial starts at `p = 0.5` and halves the step after every
//! realization, moving down when the lattice percolated and up otherwise.
//! The final probability of a trial is one estimate of the critical point.

use crate::algorithm::labeling::ClusterLabeler;
use crate::algorithm::spanning::has_percolating_cluster;
use crate::io::configuration::{BISECTION_START_PROBABILITY, MAX_BISECTION_PRECISION};
use crate::io::error::{Result, invalid_parameter};
use crate::math::random::Pcg32;
use crate::spatial::lattice::Lattice;

/// Parameters of a bisection search
#[derive(Debug, Clone, Copy)]
pub struct BisectionConfig {
    /// Lattice rows
    pub rows: usize,
    /// Lattice columns
    pub columns: usize,
    /// Number of independent trials
    pub trials: usize,
    /// Bisection depth; the smallest step is `2^-precision`
    pub precision: u32,
    /// Generator seed
    pub seed: u64,
}

/// Estimates collected by a bisection search
#[derive(Debug, Clone, PartialEq)]
pub struct BisectionResult {
    /// One critical probability estimate per trial
    pub estimates: Vec<f64>,
    /// Mean of all estimates
    pub mean: f64,
}

impl BisectionResult {
    /// Build a result from per-trial estimates
    pub fn from_estimates(estimates: Vec<f64>) -> Self {
        let mean = if estimates.is_empty() {
            0.0
        } else {
            estimates.iter().sum::<f64>() / estimates.len() as f64
        };
        Self { estimates, mean }
    }

    /// Standard error of the mean, zero with fewer than two estimates
    pub fn standard_error(&self) -> f64 {
        let n = self.estimates.len();
        if n < 2 {
            return 0.0;
        }
        let variance = self
            .estimates
            .iter()
            .map(|estimate| (estimate - self.mean).powi(2))
            .sum::<f64>()
            / (n - 1) as f64;
        (variance / n as f64).sqrt()
    }
}

/// Bisection search driver
///
/// Owns its generator, lattice and labeler; every realization continues the
/// generator stream seeded at construction.
#[derive(Debug, Clone)]
pub struct BisectionSearch {
    config: BisectionConfig,
    rng: Pcg32,
    lattice: Lattice,
    labeler: ClusterLabeler,
    estimates: Vec<f64>,
}

impl BisectionSearch {
    /// Create a search from its configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the lattice dimensions are invalid or the
    /// precision is outside `2..=MAX_BISECTION_PRECISION`
    pub fn new(config: BisectionConfig) -> Result<Self> {
        if !(2..=MAX_BISECTION_PRECISION).contains(&config.precision) {
            return Err(invalid_parameter(
                "precision",
                &config.precision,
                &format!("must be between 2 and {MAX_BISECTION_PRECISION}"),
            ));
        }

        let lattice = Lattice::allocate(config.rows, config.columns)?;
        let labeler = ClusterLabeler::for_lattice(&lattice);

        Ok(Self {
            config,
            rng: Pcg32::from_seed_value(config.seed),
            lattice,
            labeler,
            estimates: Vec::with_capacity(config.trials),
        })
    }

    /// Search configuration
    pub const fn config(&self) -> &BisectionConfig {
        &self.config
    }

    /// Run one trial and record its estimate
    pub fn run_trial(&mut self) -> f64 {
        let mut probability = BISECTION_START_PROBABILITY;
        let mut step = BISECTION_START_PROBABILITY;

        for _ in 2..=self.config.precision {
            step /= 2.0;
            self.lattice.populate(probability, &mut self.rng, 0);
            self.labeler.label(&mut self.lattice);
            if has_percolating_cluster(&self.lattice) {
                probability -= step;
            } else {
                probability += step;
            }
        }

        tracing::debug!(
            trial = self.estimates.len() + 1,
            estimate = probability,
            "bisection trial finished"
        );
        self.estimates.push(probability);
        probability
    }

    /// Number of trials completed so far
    pub fn completed_trials(&self) -> usize {
        self.estimates.len()
    }

    /// Consume the driver and summarise the trials completed so far
    pub fn finish(self) -> BisectionResult {
        let result = BisectionResult::from_estimates(self.estimates);
        tracing::info!(
            trials = result.estimates.len(),
            mean = result.mean,
            standard_error = result.standard_error(),
            "bisection search finished"
        );
        result
    }

    /// Run all configured trials
    pub fn run(mut self) -> BisectionResult {
        while self.completed_trials() < self.config.trials {
            self.run_trial();
        }
        self.finish()
    }
}
