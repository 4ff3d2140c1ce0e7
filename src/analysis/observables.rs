//! Percolation observables derived from aggregated statistics

use std::fmt;
use std::str::FromStr;

use crate::analysis::statistics::ClusterHistogram;
use crate::io::error::{PercolationError, invalid_parameter};

/// Two-sided confidence level of a binomial error estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfidenceLevel {
    /// One standard deviation
    Sigma,
    /// 90 %
    Ninety,
    /// 95 %
    NinetyFive,
    /// 99 %
    #[default]
    NinetyNine,
    /// 99.9 %
    NinetyNinePointNine,
    /// 99.99 %
    NinetyNinePointNineNine,
}

impl ConfidenceLevel {
    const PERCENTAGES: [(f64, Self); 5] = [
        (90.0, Self::Ninety),
        (95.0, Self::NinetyFive),
        (99.0, Self::NinetyNine),
        (99.9, Self::NinetyNinePointNine),
        (99.99, Self::NinetyNinePointNineNine),
    ];

    /// Standard normal quantile multiplying the standard deviation
    pub const fn z_score(self) -> f64 {
        match self {
            Self::Sigma => 1.0,
            Self::Ninety => 1.644_854,
            Self::NinetyFive => 1.959_964,
            Self::NinetyNine => 2.575_829,
            Self::NinetyNinePointNine => 3.290_527,
            Self::NinetyNinePointNineNine => 3.890_592,
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sigma => "sigma",
            Self::Ninety => "90",
            Self::NinetyFive => "95",
            Self::NinetyNine => "99",
            Self::NinetyNinePointNine => "99.9",
            Self::NinetyNinePointNineNine => "99.99",
        };
        f.write_str(name)
    }
}

impl FromStr for ConfidenceLevel {
    type Err = PercolationError;

    /// Accepts `sigma`, `none`, or a percentage such as `95` or `99.00`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.eq_ignore_ascii_case("sigma") || text.eq_ignore_ascii_case("none") {
            return Ok(Self::Sigma);
        }

        text.trim_end_matches('%')
            .parse::<f64>()
            .ok()
            .and_then(|value| {
                Self::PERCENTAGES
                    .iter()
                    .find(|(percentage, _)| (percentage - value).abs() < 1e-9)
                    .map(|&(_, level)| level)
            })
            .ok_or_else(|| {
                invalid_parameter(
                    "confidence",
                    &s,
                    &"expected sigma, 90, 95, 99, 99.9 or 99.99",
                )
            })
    }
}

/// Fraction of realizations that produced a spanning cluster
pub fn percolation_probability(percolating: usize, realizations: usize) -> f64 {
    if realizations == 0 {
        return 0.0;
    }
    percolating as f64 / realizations as f64
}

/// Half-width of the confidence interval of an estimated binomial probability
///
/// `z * sqrt(p (1 - p) / n)`. Infinite without realizations, zero when the
/// estimate is exactly 0 or 1.
pub fn binomial_standard_error(
    probability: f64,
    realizations: usize,
    confidence: ConfidenceLevel,
) -> f64 {
    if realizations == 0 {
        return f64::INFINITY;
    }
    let variance = probability * (1.0 - probability) / realizations as f64;
    confidence.z_score() * variance.max(0.0).sqrt()
}

/// Average size of spanning clusters, weighted by how often each size spanned
///
/// Zero when no cluster percolated.
pub fn percolating_cluster_mass(histogram: &ClusterHistogram) -> f64 {
    let (weighted, total) = histogram
        .iter()
        .filter(|(_, bin)| bin.percolated > 0)
        .fold((0.0, 0usize), |(weighted, total), (&size, bin)| {
            (
                (size as f64).mul_add(bin.percolated as f64, weighted),
                total + bin.percolated,
            )
        });

    if total == 0 {
        return 0.0;
    }
    weighted / total as f64
}

/// Percolating cluster mass as a fraction of all sites
pub fn percolating_cluster_strength(histogram: &ClusterHistogram, rows: usize, columns: usize) -> f64 {
    percolating_cluster_mass(histogram) / (rows * columns) as f64
}

/// Number of clusters per site
pub fn cluster_density(count: usize, rows: usize, columns: usize) -> f64 {
    count as f64 / (rows * columns) as f64
}
