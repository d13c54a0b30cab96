//! Quantile reduction of a mass batch.

use serde::{Deserialize, Serialize};
use units::Mass;

use crate::error::SimulationError;

/// Which statistic of the mass distribution to carry forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quantile {
    P5,
    P50,
    P95,
    Mean,
}

/// Central and tail statistics of a sampled particle-mass distribution.
///
/// `p5 ≤ p50 ≤ p95` holds by construction of the empirical quantiles;
/// the mean usually sits far above the median because the mass
/// distribution is heavily right-skewed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantileSummary {
    pub p5: Mass,
    pub p50: Mass,
    pub p95: Mass,
    pub mean: Mass,
}

impl QuantileSummary {
    /// Reduce a batch of particle masses to its quantile summary.
    ///
    /// Percentiles use linear interpolation between order statistics.
    ///
    /// # Errors
    /// [`SimulationError::EmptyBatch`] for a zero-length input.
    pub fn from_masses(masses: &[Mass]) -> Result<Self, SimulationError> {
        if masses.is_empty() {
            return Err(SimulationError::EmptyBatch);
        }

        let mut grams: Vec<f64> = masses.iter().map(Mass::to_grams).collect();
        grams.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let mean = grams.iter().sum::<f64>() / grams.len() as f64;

        Ok(Self {
            p5: Mass::from_grams(percentile(&grams, 5.0)),
            p50: Mass::from_grams(percentile(&grams, 50.0)),
            p95: Mass::from_grams(percentile(&grams, 95.0)),
            mean: Mass::from_grams(mean),
        })
    }

    /// The mass selected by a [`Quantile`].
    pub fn select(&self, quantile: Quantile) -> Mass {
        match quantile {
            Quantile::P5 => self.p5,
            Quantile::P50 => self.p50,
            Quantile::P95 => self.p95,
            Quantile::Mean => self.mean,
        }
    }
}

/// Empirical percentile of sorted data with linear interpolation
/// between order statistics (rank = pct/100 · (n−1)).
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let below = rank.floor() as usize;
    let above = rank.ceil() as usize;

    if below == above {
        sorted[below]
    } else {
        let fraction = rank - below as f64;
        sorted[below] + (sorted[above] - sorted[below]) * fraction
    }
}
