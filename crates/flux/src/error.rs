//! Error types for the flux engine.

use thiserror::Error;

/// Top-level error type for simulation and sweep operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("sample count must be at least 1")]
    ZeroSampleCount,

    #[error("cannot summarize an empty mass batch")]
    EmptyBatch,

    #[error("item flux must be nonnegative, got {0} items/yr")]
    NegativeItemFlux(f64),

    #[error("representative particle mass must be positive, got {0} g")]
    NonPositiveMass(f64),

    #[error("parameter grid must have at least one α and one min-size value")]
    EmptyGrid,

    #[error(transparent)]
    Prior(#[from] priors::PriorError),

    #[error(transparent)]
    SizeDistribution(#[from] particle::SizeDistributionError),

    #[error(transparent)]
    Shape(#[from] particle::ShapeError),
}
