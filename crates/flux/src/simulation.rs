//! One Monte Carlo batch: shapes, polymers, sizes → masses.

use rand_chacha::ChaChaRng;
use tracing::debug;
use units::{Density, Length, Mass, Volume};

use particle::{DensityTable, Shape, SizeDistribution};
use priors::PriorDistribution;

use crate::error::SimulationError;
use crate::quantiles::QuantileSummary;

/// Parallel per-particle attribute arrays for one simulated batch.
///
/// Produced fresh by [`simulate_batch`], reduced to a
/// [`QuantileSummary`], and dropped. Shape, polymer, and size are drawn
/// from independent marginals; no particle-level correlation between
/// them is modeled. Callers needing correlated draws (e.g. fibers
/// skewing toward certain polymers) must extend the simulator.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleBatch {
    sizes: Vec<Length>,
    shapes: Vec<Shape>,
    polymers: Vec<String>,
    volumes: Vec<Volume>,
    densities: Vec<Density>,
    masses: Vec<Mass>,
}

impl ParticleBatch {
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub fn sizes(&self) -> &[Length] {
        &self.sizes
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn polymers(&self) -> &[String] {
        &self.polymers
    }

    pub fn volumes(&self) -> &[Volume] {
        &self.volumes
    }

    pub fn densities(&self) -> &[Density] {
        &self.densities
    }

    pub fn masses(&self) -> &[Mass] {
        &self.masses
    }

    /// Arithmetic mean particle mass.
    pub fn mean_mass(&self) -> Mass {
        let total: f64 = self.masses.iter().map(Mass::to_grams).sum();
        Mass::from_grams(total / self.masses.len() as f64)
    }

    /// Cumulative running mean of the mass sequence, one entry per
    /// particle. Plotting this against the particle index shows how
    /// quickly the estimate stabilizes with more samples.
    pub fn running_mean(&self) -> Vec<Mass> {
        let mut cumulative = 0.0;
        self.masses
            .iter()
            .enumerate()
            .map(|(i, mass)| {
                cumulative += mass.to_grams();
                Mass::from_grams(cumulative / (i + 1) as f64)
            })
            .collect()
    }

    /// Reduce the batch to its P5/P50/P95/mean summary.
    pub fn summarize(&self) -> Result<QuantileSummary, SimulationError> {
        QuantileSummary::from_masses(&self.masses)
    }
}

/// Run one Monte Carlo batch of `n` particles.
///
/// Draws `n` shapes and `n` polymers from their priors and `n` sizes
/// from the size distribution, all independently, then computes
/// per-particle volume (shape geometry), density (polymer table, with
/// fallback for unknown polymers), and mass.
///
/// # Errors
/// - [`SimulationError::ZeroSampleCount`] if `n == 0`
/// - [`SimulationError::Shape`] if the shape prior contains a label
///   outside the modeled shape set
pub fn simulate_batch(
    rng: &mut ChaChaRng,
    n: usize,
    size_distribution: &SizeDistribution,
    shape_prior: &PriorDistribution,
    polymer_prior: &PriorDistribution,
    density_table: &DensityTable,
) -> Result<ParticleBatch, SimulationError> {
    if n == 0 {
        return Err(SimulationError::ZeroSampleCount);
    }

    let shapes: Vec<Shape> = shape_prior
        .sample_n(rng, n)
        .into_iter()
        .map(Shape::from_label)
        .collect::<Result<_, _>>()?;

    let polymers: Vec<String> = polymer_prior
        .sample_n(rng, n)
        .into_iter()
        .map(str::to_string)
        .collect();

    let sizes = size_distribution.sample_n(rng, n);

    let volumes: Vec<Volume> = shapes
        .iter()
        .zip(&sizes)
        .map(|(shape, &size)| shape.volume(size))
        .collect();

    let densities: Vec<Density> = polymers
        .iter()
        .map(|polymer| density_table.lookup(polymer))
        .collect();

    let masses: Vec<Mass> = volumes
        .iter()
        .zip(&densities)
        .map(|(&volume, &density)| volume * density)
        .collect();

    debug!(
        n,
        alpha = size_distribution.alpha(),
        min_um = size_distribution.min_size().to_microns(),
        max_um = size_distribution.max_size().to_microns(),
        "simulated particle batch"
    );

    Ok(ParticleBatch {
        sizes,
        shapes,
        polymers,
        volumes,
        densities,
        masses,
    })
}
