//! Parameter-surface sweep over (α, minimum size).

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use units::{ItemFlux, Length, MassFlux};

use particle::{DensityTable, SizeDistribution};
use priors::PriorDistribution;

use crate::config::SweepConfig;
use crate::error::SimulationError;
use crate::estimator::estimate_flux;
use crate::simulation::simulate_batch;

/// Which flux statistic each surface cell records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceMetric {
    P5,
    P50,
    P95,
    Mean,
    /// P95 flux − P5 flux: the width of the uncertainty band
    Range,
}

/// A grid cell together with its parameter coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    pub alpha: f64,
    pub min_size: Length,
    pub value: MassFlux,
}

/// Flux values over the (α, minimum size) parameter grid.
///
/// Rows follow the min-size axis and columns the α axis (mesh-grid
/// convention); `values` is row-major. Built once per sweep and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceGrid {
    alphas: Vec<f64>,
    min_sizes: Vec<f64>,
    values: Vec<MassFlux>,
    minimum: GridCell,
    maximum: GridCell,
}

impl SurfaceGrid {
    /// Number of rows (min-size axis).
    pub fn rows(&self) -> usize {
        self.min_sizes.len()
    }

    /// Number of columns (α axis).
    pub fn cols(&self) -> usize {
        self.alphas.len()
    }

    /// The α values along the column axis.
    pub fn alphas(&self) -> &[f64] {
        &self.alphas
    }

    /// The minimum sizes (µm) along the row axis.
    pub fn min_sizes(&self) -> &[f64] {
        &self.min_sizes
    }

    /// Flux value at (row, col).
    pub fn value(&self, row: usize, col: usize) -> MassFlux {
        self.values[row * self.cols() + col]
    }

    /// Row-major flux values.
    pub fn values(&self) -> &[MassFlux] {
        &self.values
    }

    /// The cell holding the smallest flux value.
    pub fn minimum(&self) -> GridCell {
        self.minimum
    }

    /// The cell holding the largest flux value.
    pub fn maximum(&self) -> GridCell {
        self.maximum
    }
}

/// Sweep the Monte Carlo pipeline over the parameter grid.
///
/// Every (α, min-size) combination gets a fully independent run of
/// `samples_per_cell` particles, seeded from `base_seed` plus the cell's
/// row-major index. After the grid fills, a single row-major scan finds
/// the extrema; ties keep the first occurrence.
pub fn sweep_surface(
    config: &SweepConfig,
    shape_prior: &PriorDistribution,
    polymer_prior: &PriorDistribution,
    density_table: &DensityTable,
    item_flux: ItemFlux,
    metric: SurfaceMetric,
) -> Result<SurfaceGrid, SimulationError> {
    if config.alpha_grid.is_empty() || config.min_size_grid.is_empty() {
        return Err(SimulationError::EmptyGrid);
    }
    if config.samples_per_cell == 0 {
        return Err(SimulationError::ZeroSampleCount);
    }

    let rows = config.min_size_grid.len();
    let cols = config.alpha_grid.len();
    info!(
        rows,
        cols,
        samples_per_cell = config.samples_per_cell,
        ?metric,
        "computing flux surface"
    );

    let mut values = Vec::with_capacity(rows * cols);

    for (row, &min_size_um) in config.min_size_grid.iter().enumerate() {
        for (col, &alpha) in config.alpha_grid.iter().enumerate() {
            let cell_index = (row * cols + col) as u64;
            let mut rng = ChaChaRng::seed_from_u64(config.base_seed.wrapping_add(cell_index));

            let size_distribution = SizeDistribution::new(
                alpha,
                Length::from_microns(min_size_um),
                config.max_size,
            )?;

            let batch = simulate_batch(
                &mut rng,
                config.samples_per_cell,
                &size_distribution,
                shape_prior,
                polymer_prior,
                density_table,
            )?;
            let summary = batch.summarize()?;

            let value = match metric {
                SurfaceMetric::P5 => estimate_flux(item_flux, summary.p5)?,
                SurfaceMetric::P50 => estimate_flux(item_flux, summary.p50)?,
                SurfaceMetric::P95 => estimate_flux(item_flux, summary.p95)?,
                SurfaceMetric::Mean => estimate_flux(item_flux, summary.mean)?,
                SurfaceMetric::Range => {
                    estimate_flux(item_flux, summary.p95)? - estimate_flux(item_flux, summary.p5)?
                }
            };
            values.push(value);
        }
        debug!(row, min_size_um, "surface row complete");
    }

    let (minimum, maximum) = find_extrema(config, &values, cols);
    info!(
        min_kt_yr = minimum.value.to_kilotons_per_year(),
        max_kt_yr = maximum.value.to_kilotons_per_year(),
        "flux surface complete"
    );

    Ok(SurfaceGrid {
        alphas: config.alpha_grid.clone(),
        min_sizes: config.min_size_grid.clone(),
        values,
        minimum,
        maximum,
    })
}

/// Row-major scan for the single minimum and maximum cell. Strict
/// comparisons keep the first occurrence on ties.
fn find_extrema(config: &SweepConfig, values: &[MassFlux], cols: usize) -> (GridCell, GridCell) {
    let cell_at = |index: usize| -> GridCell {
        let row = index / cols;
        let col = index % cols;
        GridCell {
            row,
            col,
            alpha: config.alpha_grid[col],
            min_size: Length::from_microns(config.min_size_grid[row]),
            value: values[index],
        }
    };

    let mut min_index = 0;
    let mut max_index = 0;
    for (index, value) in values.iter().enumerate() {
        if *value < values[min_index] {
            min_index = index;
        }
        if *value > values[max_index] {
            max_index = index;
        }
    }

    (cell_at(min_index), cell_at(max_index))
}
