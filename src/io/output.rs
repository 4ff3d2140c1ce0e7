//! Data file naming and writers for experiment results
//!
//! Every file starts with `#`-prefixed header lines carrying the run
//! parameters, followed by whitespace-separated columns.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::analysis::statistics::ClusterHistogram;
use crate::experiments::bisection::BisectionResult;
use crate::experiments::sweep::SweepPoint;
use crate::experiments::windowing::WindowingResult;
use crate::io::configuration::DATA_FILE_EXTENSION;
use crate::io::error::{Result, file_system_error};

/// Run parameters written into every file header
#[derive(Debug, Clone, Copy)]
pub struct RunHeader {
    /// Lattice rows
    pub rows: usize,
    /// Lattice columns
    pub columns: usize,
    /// Generator seed of the run
    pub seed: u64,
}

impl RunHeader {
    fn write_to(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "# rows: {}", self.rows)?;
        writeln!(writer, "# columns: {}", self.columns)?;
        writeln!(writer, "# seed: {}", self.seed)
    }
}

/// Path of a data file inside `directory`
///
/// Names encode the experiment kind, lattice size, an optional probability
/// and the seed, e.g. `bisection_L64x64_seed42.dat`.
pub fn data_file_path(
    directory: &Path,
    kind: &str,
    header: &RunHeader,
    probability: Option<f64>,
) -> PathBuf {
    let probability = probability.map_or_else(String::new, |p| format!("_p{p:.6}"));
    directory.join(format!(
        "{kind}_L{}x{}{probability}_seed{}.{DATA_FILE_EXTENSION}",
        header.rows, header.columns, header.seed
    ))
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| file_system_error(path, "create file", e))
}

fn write_file(
    path: &Path,
    body: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
) -> Result<()> {
    let mut writer = create(path)?;
    body(&mut writer)
        .and_then(|()| writer.flush())
        .map_err(|e| file_system_error(path, "write", e))?;
    tracing::info!(path = %path.display(), "wrote data file");
    Ok(())
}

/// Write an aggregated cluster size histogram
///
/// # Errors
///
/// Returns an error if the file or its parent directory cannot be written
pub fn write_cluster_statistics(
    path: &Path,
    histogram: &ClusterHistogram,
    header: &RunHeader,
    probability: f64,
    realizations: usize,
) -> Result<()> {
    write_file(path, |w| {
        header.write_to(w)?;
        writeln!(w, "# probability: {probability}")?;
        writeln!(w, "# realizations: {realizations}")?;
        writeln!(w, "# size count percolated")?;
        for (size, bin) in histogram {
            writeln!(w, "{size} {} {}", bin.count, bin.percolated)?;
        }
        Ok(())
    })
}

/// Write the per-trial estimates of a bisection search
///
/// # Errors
///
/// Returns an error if the file or its parent directory cannot be written
pub fn write_bisection_results(
    path: &Path,
    result: &BisectionResult,
    header: &RunHeader,
    precision: u32,
) -> Result<()> {
    write_file(path, |w| {
        header.write_to(w)?;
        writeln!(w, "# precision: {precision}")?;
        writeln!(w, "# trials: {}", result.estimates.len())?;
        writeln!(w, "# mean: {}", result.mean)?;
        writeln!(w, "# standard_error: {}", result.standard_error())?;
        writeln!(w, "# trial estimate")?;
        for (trial, estimate) in result.estimates.iter().enumerate() {
            writeln!(w, "{trial} {estimate}")?;
        }
        Ok(())
    })
}

/// Write the percolation probability measured at each sweep point
///
/// # Errors
///
/// Returns an error if the file or its parent directory cannot be written
pub fn write_sweep_percolation_probability(
    path: &Path,
    points: &[SweepPoint],
    header: &RunHeader,
    center: f64,
    decay: f64,
) -> Result<()> {
    write_file(path, |w| {
        header.write_to(w)?;
        writeln!(w, "# grid_points: {}", points.len())?;
        writeln!(w, "# probability_center: {center}")?;
        writeln!(w, "# decay: {decay}")?;
        writeln!(w, "# probability realizations percolating fraction")?;
        for point in points {
            writeln!(
                w,
                "{} {} {} {}",
                point.probability,
                point.realizations,
                point.percolating,
                point.percolation_probability()
            )?;
        }
        Ok(())
    })
}

/// Write accumulated percolating cluster mass per window size
///
/// # Errors
///
/// Returns an error if the file or its parent directory cannot be written
pub fn write_mass_windowing_results(
    path: &Path,
    result: &WindowingResult,
    header: &RunHeader,
    probability: f64,
) -> Result<()> {
    write_file(path, |w| {
        header.write_to(w)?;
        writeln!(w, "# probability: {probability}")?;
        writeln!(w, "# rounds: {}", result.rounds)?;
        writeln!(w, "# window mass")?;
        for (window, mass) in result.window_sizes.iter().zip(&result.mass) {
            writeln!(w, "{window} {mass}")?;
        }
        Ok(())
    })
}
