//! Command-line interface for running percolation experiments

use crate::algorithm::labeling::label_clusters;
use crate::analysis::observables::{ConfidenceLevel, percolating_cluster_strength};
use crate::experiments::bisection::{BisectionConfig, BisectionSearch};
use crate::experiments::sweep::{ProbabilitySweep, SweepConfig};
use crate::experiments::windowing::{MassWindowing, WindowingConfig};
use crate::io::configuration::{
    DEFAULT_BISECTION_PRECISION, DEFAULT_BISECTION_TRIALS, DEFAULT_LABEL_PROBABILITY,
    DEFAULT_LATTICE_SIZE, DEFAULT_OUTPUT_DIRECTORY, DEFAULT_SEED, DEFAULT_SWEEP_CENTER,
    DEFAULT_SWEEP_CONFIDENCE, DEFAULT_SWEEP_DECAY, DEFAULT_SWEEP_MIN_REPETITIONS,
    DEFAULT_SWEEP_POINTS, DEFAULT_WINDOWING_PROBABILITY, DEFAULT_WINDOWING_ROUNDS,
};
use crate::io::error::Result;
use crate::io::output::{
    RunHeader, data_file_path, write_bisection_results, write_cluster_statistics,
    write_mass_windowing_results, write_sweep_percolation_probability,
};
use crate::io::progress::ProgressReporter;
use crate::math::random::Pcg32;
use crate::spatial::lattice::Lattice;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "percolation")]
#[command(
    author,
    version,
    about = "Monte-Carlo site percolation with Hoshen-Kopelman cluster labeling"
)]
/// Command-line arguments for the percolation experiments
pub struct Cli {
    /// Experiment to run
    #[command(subcommand)]
    pub command: Command,

    /// Random seed for reproducible runs
    #[arg(short, long, global = true, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Directory receiving data files
    #[arg(short, long, global = true, default_value = DEFAULT_OUTPUT_DIRECTORY)]
    pub output: PathBuf,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available experiments
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Populate and label a single lattice, printing both stages
    Label {
        /// Side length of the square lattice
        #[arg(short = 'L', long, default_value_t = DEFAULT_LATTICE_SIZE)]
        size: usize,

        /// Occupation probability
        #[arg(short, long, default_value_t = DEFAULT_LABEL_PROBABILITY)]
        probability: f64,

        /// Draw borders around every cell
        #[arg(short, long)]
        borders: bool,
    },

    /// Estimate the critical probability by bisection
    Bisect {
        /// Side length of the square lattice
        #[arg(short = 'L', long, default_value_t = DEFAULT_LATTICE_SIZE)]
        size: usize,

        /// Number of independent trials
        #[arg(short = 'n', long, default_value_t = DEFAULT_BISECTION_TRIALS)]
        trials: usize,

        /// Bisection depth; the smallest step is 2^-precision
        #[arg(short, long, default_value_t = DEFAULT_BISECTION_PRECISION)]
        precision: u32,
    },

    /// Measure percolation probability and cluster statistics over a probability grid
    Sweep {
        /// Side length of the square lattice
        #[arg(short = 'L', long, default_value_t = DEFAULT_LATTICE_SIZE)]
        size: usize,

        /// Number of grid probabilities
        #[arg(short = 'n', long, default_value_t = DEFAULT_SWEEP_POINTS)]
        points: usize,

        /// Probability where the grid is densest
        #[arg(short, long, default_value_t = DEFAULT_SWEEP_CENTER)]
        center: f64,

        /// Exponential decay coefficient of the grid
        #[arg(short, long, default_value_t = DEFAULT_SWEEP_DECAY)]
        decay: f64,

        /// Decimals kept in each grid probability (0 keeps all)
        #[arg(long, default_value_t = 0)]
        round_digits: u32,

        /// Realizations always run per probability
        #[arg(short = 'r', long, default_value_t = DEFAULT_SWEEP_MIN_REPETITIONS)]
        min_repetitions: usize,

        /// Keep sampling until the percolation probability error is at most this
        #[arg(long)]
        target_error: Option<f64>,

        /// Confidence level of the error target: sigma, 90, 95, 99, 99.9 or 99.99
        #[arg(long, default_value_t = DEFAULT_SWEEP_CONFIDENCE)]
        confidence: ConfidenceLevel,

        /// Wall-clock budget per probability in seconds
        #[arg(long)]
        max_seconds: Option<f64>,
    },

    /// Accumulate percolating cluster mass inside centred windows
    Windows {
        /// Side length of the square lattice
        #[arg(short = 'L', long, default_value_t = DEFAULT_LATTICE_SIZE)]
        size: usize,

        /// Number of rounds
        #[arg(short = 'n', long, default_value_t = DEFAULT_WINDOWING_ROUNDS)]
        rounds: usize,

        /// Occupation probability
        #[arg(short, long, default_value_t = DEFAULT_WINDOWING_PROBABILITY)]
        probability: f64,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Header shared by all data files of this run
    const fn header(&self, size: usize) -> RunHeader {
        RunHeader {
            rows: size,
            columns: size,
            seed: self.seed,
        }
    }
}

/// Executes the experiment selected on the command line
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected experiment and write its data files
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, an experiment cannot
    /// complete, or a data file cannot be written
    pub fn run(&self) -> Result<()> {
        match self.cli.command.clone() {
            Command::Label {
                size,
                probability,
                borders,
            } => self.run_label(size, probability, borders),
            Command::Bisect {
                size,
                trials,
                precision,
            } => self.run_bisect(BisectionConfig {
                rows: size,
                columns: size,
                trials,
                precision,
                seed: self.cli.seed,
            }),
            Command::Sweep {
                size,
                points,
                center,
                decay,
                round_digits,
                min_repetitions,
                target_error,
                confidence,
                max_seconds,
            } => self.run_sweep(SweepConfig {
                rows: size,
                columns: size,
                points,
                center,
                decay,
                round_digits,
                min_repetitions,
                target_error,
                confidence,
                time_budget: max_seconds
                    .filter(|seconds| seconds.is_finite() && *seconds > 0.0)
                    .map(Duration::from_secs_f64),
                seed: self.cli.seed,
            }),
            Command::Windows {
                size,
                rounds,
                probability,
            } => self.run_windows(WindowingConfig::new(
                size,
                rounds,
                probability,
                self.cli.seed,
            )),
        }
    }

    // Allow print for the lattice dump this subcommand exists for
    #[allow(clippy::print_stdout)]
    fn run_label(&self, size: usize, probability: f64, borders: bool) -> Result<()> {
        let mut lattice = Lattice::allocate(size, size)?;
        let mut rng = Pcg32::from_seed_value(self.cli.seed);
        lattice.populate(probability, &mut rng, 0);
        println!("{}", lattice.render(borders));

        let summary = label_clusters(&mut lattice);
        println!("{}", lattice.render(borders));
        tracing::info!(clusters = summary.clusters, "labeled lattice");
        Ok(())
    }

    fn run_bisect(&self, config: BisectionConfig) -> Result<()> {
        let mut search = BisectionSearch::new(config)?;
        let progress = ProgressReporter::new("bisect", config.trials, self.cli.quiet);

        for _ in 0..config.trials {
            search.run_trial();
            progress.advance();
        }

        let result = search.finish();
        progress.finish(format!("p_c = {:.6}", result.mean));

        let header = self.cli.header(config.rows);
        let path = data_file_path(&self.cli.output, "bisection", &header, None);
        write_bisection_results(&path, &result, &header, config.precision)
    }

    fn run_sweep(&self, config: SweepConfig) -> Result<()> {
        let mut sweep = ProbabilitySweep::new(config)?;
        let grid = sweep.grid().to_vec();
        let progress = ProgressReporter::new("sweep", grid.len(), self.cli.quiet);
        let header = self.cli.header(config.rows);

        let mut points = Vec::with_capacity(grid.len());
        for (index, &probability) in grid.iter().enumerate() {
            let point = sweep.run_point(probability);
            progress.set_message(format!(
                "p = {probability:.4}, P = {:.3}",
                point.percolation_probability()
            ));

            // Rounded grids can repeat a probability, so the grid index keeps files apart
            let kind = format!("clusters_n{index:03}");
            let path = data_file_path(&self.cli.output, &kind, &header, Some(probability));
            write_cluster_statistics(
                &path,
                &point.histogram,
                &header,
                probability,
                point.realizations,
            )?;
            tracing::debug!(
                probability,
                realizations = point.realizations,
                error = point.standard_error(config.confidence),
                strength = percolating_cluster_strength(&point.histogram, config.rows, config.columns),
                "sweep point"
            );

            points.push(point);
            progress.advance();
        }
        progress.finish("done");

        let path = data_file_path(&self.cli.output, "percolation_probability", &header, None);
        write_sweep_percolation_probability(&path, &points, &header, config.center, config.decay)
    }

    fn run_windows(&self, config: WindowingConfig) -> Result<()> {
        let mut windowing = MassWindowing::new(config)?;
        let progress = ProgressReporter::new("windows", config.rounds, self.cli.quiet);

        for _ in 0..config.rounds {
            windowing.run_round()?;
            progress.advance();
        }

        let result = windowing.finish();
        progress.finish("done");

        let header = self.cli.header(config.size);
        let path = data_file_path(
            &self.cli.output,
            "mass_windowing",
            &header,
            Some(config.probability),
        );
        write_mass_windowing_results(&path, &result, &header, config.probability)
    }
}
