/// Command-line parsing and experiment execution
pub mod cli;
/// Simulation constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Data file writers
pub mod output;
/// Progress display
pub mod progress;
