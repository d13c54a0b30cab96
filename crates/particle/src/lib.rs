//! Microplastic particle physical modeling.
//!
//! A particle is described by three independent attributes: a shape
//! category, a polymer type, and a linear size. This crate provides the
//! geometry that turns (shape, size) into a volume, the density table
//! that turns a polymer into a mass density, and the bounded power-law
//! sampler that size draws come from.

pub mod polymer;
pub mod sampling;
pub mod shape;

#[cfg(test)]
mod polymer_test;
#[cfg(test)]
mod sampling_test;
#[cfg(test)]
mod shape_test;

pub use polymer::{DensityTable, DEFAULT_DENSITY_G_CM3};
pub use sampling::{SizeDistribution, SizeDistributionError, ALPHA_SINGULARITY_TOLERANCE};
pub use shape::{Shape, ShapeError, FIBER_ASPECT_RATIO, FILM_THICKNESS};
