pub mod density;
pub mod flux;
pub mod length;
pub mod mass;
pub mod volume;

#[cfg(test)]
mod flux_test;

pub use density::Density;
pub use flux::{ItemFlux, MassFlux, SECONDS_PER_YEAR};
pub use length::Length;
pub use mass::Mass;
pub use volume::{Volume, MICRON3_TO_CM3};
