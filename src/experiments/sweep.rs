//! Percolation probability and cluster statistics across a probability grid

use std::time::{Duration, Instant};

use crate::algorithm::labeling::ClusterLabeler;
use crate::analysis::aggregation::HistogramAccumulator;
use crate::analysis::observables::{
    ConfidenceLevel, binomial_standard_error, percolation_probability,
};
use crate::analysis::statistics::{ClusterHistogram, cluster_statistics};
use crate::io::error::{Result, invalid_parameter};
use crate::math::grid::exponential_centered_grid;
use crate::math::random::Pcg32;
use crate::spatial::lattice::Lattice;

/// Parameters of a probability sweep
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Lattice rows
    pub rows: usize,
    /// Lattice columns
    pub columns: usize,
    /// Number of points in the probability grid
    pub points: usize,
    /// Probability where the grid is densest
    pub center: f64,
    /// Exponential decay coefficient of the grid
    pub decay: f64,
    /// Decimals kept in each grid probability, zero keeps all
    pub round_digits: u32,
    /// Realizations always run per probability
    pub min_repetitions: usize,
    /// Keep sampling until the percolation probability error is at most this
    ///
    /// `None` stops after `min_repetitions`.
    pub target_error: Option<f64>,
    /// Confidence level the error target refers to
    pub confidence: ConfidenceLevel,
    /// Optional wall-clock budget per probability, overriding both limits above
    pub time_budget: Option<Duration>,
    /// Generator seed
    pub seed: u64,
}

impl SweepConfig {
    /// Probability grid described by this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the grid parameters are invalid
    pub fn probability_grid(&self) -> Result<Vec<f64>> {
        exponential_centered_grid(
            0.0,
            1.0,
            self.center,
            self.points,
            self.decay,
            self.round_digits,
        )
    }
}

/// Aggregated outcome of all realizations at one probability
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    /// Occupation probability
    pub probability: f64,
    /// Realizations run
    pub realizations: usize,
    /// Realizations that had a spanning cluster
    pub percolating: usize,
    /// Cluster size histogram aggregated over all realizations
    pub histogram: ClusterHistogram,
}

impl SweepPoint {
    /// Fraction of realizations that percolated
    pub fn percolation_probability(&self) -> f64 {
        percolation_probability(self.percolating, self.realizations)
    }

    /// Confidence interval half-width of the percolation probability
    pub fn standard_error(&self, confidence: ConfidenceLevel) -> f64 {
        binomial_standard_error(
            self.percolation_probability(),
            self.realizations,
            confidence,
        )
    }
}

/// Probability sweep driver
#[derive(Debug, Clone)]
pub struct ProbabilitySweep {
    config: SweepConfig,
    grid: Vec<f64>,
    rng: Pcg32,
    lattice: Lattice,
    labeler: ClusterLabeler,
    accumulator: HistogramAccumulator,
}

impl ProbabilitySweep {
    /// Create a sweep from its configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the lattice dimensions or grid parameters are
    /// invalid, no repetitions are requested, or the error target is not a
    /// positive number
    pub fn new(config: SweepConfig) -> Result<Self> {
        if config.min_repetitions == 0 {
            return Err(invalid_parameter(
                "min_repetitions",
                &config.min_repetitions,
                &"must be positive",
            ));
        }
        if let Some(target) = config
            .target_error
            .filter(|target| !(target.is_finite() && *target > 0.0))
        {
            return Err(invalid_parameter(
                "target_error",
                &target,
                &"must be a positive finite number",
            ));
        }

        let grid = config.probability_grid()?;
        let lattice = Lattice::allocate(config.rows, config.columns)?;
        let labeler = ClusterLabeler::for_lattice(&lattice);

        Ok(Self {
            config,
            grid,
            rng: Pcg32::from_seed_value(config.seed),
            lattice,
            labeler,
            accumulator: HistogramAccumulator::new(),
        })
    }

    /// Sweep configuration
    pub const fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Probabilities visited by [`ProbabilitySweep::run`]
    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    /// Run all realizations for one probability
    ///
    /// Samples at least `min_repetitions` lattices, then continues while the
    /// percolation probability error exceeds `target_error`. A spent time
    /// budget stops either phase, but at least one realization always
    /// completes and none is interrupted.
    pub fn run_point(&mut self, probability: f64) -> SweepPoint {
        self.accumulator.reset();
        let start = Instant::now();

        loop {
            self.lattice.populate(probability, &mut self.rng, 0);
            self.labeler.label(&mut self.lattice);
            let statistics = cluster_statistics(&self.lattice, false);
            self.accumulator.record(&statistics);

            if self
                .config
                .time_budget
                .is_some_and(|budget| start.elapsed() >= budget)
            {
                break;
            }
            if self.accumulator.realizations() >= self.config.min_repetitions
                && self.target_reached()
            {
                break;
            }
        }

        let point = SweepPoint {
            probability,
            realizations: self.accumulator.realizations(),
            percolating: self.accumulator.percolating_realizations(),
            histogram: std::mem::take(&mut self.accumulator).into_histogram(),
        };
        tracing::debug!(
            probability,
            realizations = point.realizations,
            percolating = point.percolating,
            "sweep point finished"
        );
        point
    }

    fn target_reached(&self) -> bool {
        let Some(target) = self.config.target_error else {
            return true;
        };
        let realizations = self.accumulator.realizations();
        let estimate =
            percolation_probability(self.accumulator.percolating_realizations(), realizations);
        binomial_standard_error(estimate, realizations, self.config.confidence) <= target
    }

    /// Run the whole probability grid
    pub fn run(mut self) -> Vec<SweepPoint> {
        let grid = std::mem::take(&mut self.grid);
        let points: Vec<SweepPoint> = grid.iter().map(|&p| self.run_point(p)).collect();
        tracing::info!(points = points.len(), "probability sweep finished");
        points
    }
}
