//! Item-count flux to mass flux conversion.

use units::{ItemFlux, Mass, MassFlux};

use crate::error::SimulationError;

/// Default annual item flux when no basin discharge data is available:
/// 1e15 items/yr summed over all coastal river mouths.
pub const DEFAULT_ITEM_FLUX_PER_YEAR: f64 = 1e15;

/// Convert a measured item-count flux and a representative particle mass
/// into a mass flux.
///
/// items/yr × g/item = g/yr, reported in kt/yr. Linear in both inputs.
///
/// # Errors
/// Rejects negative item flux and non-positive mass; a zero or negative
/// representative mass means the upstream simulation is broken and must
/// not be silently scaled.
pub fn estimate_flux(item_flux: ItemFlux, mean_mass: Mass) -> Result<MassFlux, SimulationError> {
    if item_flux.to_items_per_year() < 0.0 {
        return Err(SimulationError::NegativeItemFlux(
            item_flux.to_items_per_year(),
        ));
    }
    if mean_mass.to_grams() <= 0.0 {
        return Err(SimulationError::NonPositiveMass(mean_mass.to_grams()));
    }

    Ok(item_flux * mean_mass)
}
