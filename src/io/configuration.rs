//! Simulation constants and runtime configuration defaults

use crate::analysis::observables::ConfidenceLevel;

// Cell encoding shared by population, labeling and statistics
/// Value of an empty site
pub const EMPTY_SITE: u32 = 0;
/// Value of an occupied site that has not been labeled yet
pub const OCCUPIED_SITE: u32 = 1;
/// First label handed out to a cluster
pub const FIRST_CLUSTER_LABEL: u32 = 2;

// Generator settings
/// Stream selector used when a caller only supplies a seed
pub const DEFAULT_STREAM: u64 = 54;
/// Fixed seed for reproducible experiments
pub const DEFAULT_SEED: u64 = 42;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed lattice dimension
pub const MAX_LATTICE_DIMENSION: usize = 1 << 14;

// Default values for the critical point bisection search
/// Default side length of the square lattice
pub const DEFAULT_LATTICE_SIZE: usize = 10;
/// Occupation probability of the single lattice printed by `label`
pub const DEFAULT_LABEL_PROBABILITY: f64 = 0.4;
/// Default number of independent bisection trials
pub const DEFAULT_BISECTION_TRIALS: usize = 50_000;
/// Default bisection depth; the smallest step is `2^-precision`
pub const DEFAULT_BISECTION_PRECISION: u32 = 16;
/// Occupation probability every bisection trial starts from
pub const BISECTION_START_PROBABILITY: f64 = 0.5;
/// Deepest bisection supported without losing resolution in an `f64`
pub const MAX_BISECTION_PRECISION: u32 = 52;

// Default values for the probability sweep
/// Default number of points in the probability grid
pub const DEFAULT_SWEEP_POINTS: usize = 120;
/// Default centre of the probability grid
pub const DEFAULT_SWEEP_CENTER: f64 = 0.59;
/// Default exponential decay coefficient of the probability grid
pub const DEFAULT_SWEEP_DECAY: f64 = 4.0;
/// Default number of realizations always run per probability
pub const DEFAULT_SWEEP_MIN_REPETITIONS: usize = 20;
/// Default confidence level of the sweep error target
pub const DEFAULT_SWEEP_CONFIDENCE: ConfidenceLevel = ConfidenceLevel::NinetyNine;

// Default values for percolating cluster mass windowing
/// Default number of windowing rounds
pub const DEFAULT_WINDOWING_ROUNDS: usize = 100;
/// Default occupation probability for windowing, close to the critical point
pub const DEFAULT_WINDOWING_PROBABILITY: f64 = 0.592_746;
/// Lattices generated per round before giving up on a centred cluster
pub const MAX_WINDOWING_ATTEMPTS: usize = 10_000;
/// Allowed distance of the cluster centre of mass from the lattice centre
pub const WINDOWING_CENTER_TOLERANCE: f64 = 2.0;

// Output settings
/// Default directory for data files
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "data";
/// Extension of all data files
pub const DATA_FILE_EXTENSION: &str = "dat";
/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "percolation=info";
