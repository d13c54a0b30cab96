//! Explicit configuration objects for simulations and sweeps.
//!
//! Everything the engine needs is passed in; there is no process-wide
//! state and no file-path handling here. Scenario presets mirror the
//! JSON layout produced by the survey tooling and are parsed from a
//! string the caller has already loaded.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use units::Length;

use particle::{SizeDistribution, SizeDistributionError};

/// Evenly spaced values over `[start, stop]`, endpoints included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Parameters for a single Monte Carlo simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Power-law size exponent α
    pub alpha: f64,
    /// Lower particle size bound
    pub min_size: Length,
    /// Upper particle size bound
    pub max_size: Length,
    /// Particles per batch
    pub samples: usize,
}

impl SimulationConfig {
    /// The validated size distribution for this configuration.
    pub fn size_distribution(&self) -> Result<SizeDistribution, SizeDistributionError> {
        SizeDistribution::new(self.alpha, self.min_size, self.max_size)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            alpha: 2.64,
            min_size: Length::from_microns(100.0),
            max_size: Length::from_microns(5000.0),
            samples: 3000,
        }
    }
}

/// Parameters for a 2-D (α × minimum size) parameter-surface sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Grid of power-law exponents (column axis)
    pub alpha_grid: Vec<f64>,
    /// Grid of minimum sizes in µm (row axis)
    pub min_size_grid: Vec<f64>,
    /// Upper size bound shared by every cell
    pub max_size: Length,
    /// Particles per grid cell
    pub samples_per_cell: usize,
    /// Base seed; each cell derives its own seed from this, so a sweep
    /// is exactly reproducible from its configuration
    pub base_seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            alpha_grid: linspace(2.0, 3.5, 8),
            min_size_grid: linspace(50.0, 300.0, 8),
            max_size: Length::from_microns(5000.0),
            samples_per_cell: 500,
            base_seed: 42,
        }
    }
}

/// One named preset scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub parameters: ScenarioParameters,
}

/// The slider settings a scenario applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    pub alpha: f64,
    pub min_size_um: f64,
    pub mc_samples: usize,
}

impl ScenarioParameters {
    /// Expand preset parameters into a full simulation configuration,
    /// using the standard 5000 µm upper bound.
    pub fn to_simulation_config(self) -> SimulationConfig {
        SimulationConfig {
            alpha: self.alpha,
            min_size: Length::from_microns(self.min_size_um),
            max_size: Length::from_microns(5000.0),
            samples: self.mc_samples,
        }
    }
}

/// Scenario presets keyed by identifier, as serialized by the survey
/// tooling's `config_presets.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPresets {
    pub scenarios: BTreeMap<String, Scenario>,
}

impl ScenarioPresets {
    /// Parse presets from a JSON document the caller has loaded.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
