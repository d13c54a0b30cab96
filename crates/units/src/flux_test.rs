use approx::assert_relative_eq;

use crate::flux::{ItemFlux, MassFlux, SECONDS_PER_YEAR};
use crate::mass::Mass;

#[test]
fn test_item_flux_conversions() {
    // Per-second discharge rates scale by seconds per year
    let per_second = ItemFlux::from_items_per_second(1.0);
    assert_relative_eq!(per_second.to_items_per_year(), SECONDS_PER_YEAR);

    let annual = ItemFlux::from_items_per_year(1e15);
    assert_relative_eq!(annual.to_items_per_year(), 1e15);
}

#[test]
fn test_mass_flux_conversions() {
    // 1 kt/yr = 1e6 kg/yr = 1e9 g/yr
    let flux = MassFlux::from_kilotons_per_year(1.0);
    assert_relative_eq!(flux.to_kg_per_year(), 1e6);
    assert_relative_eq!(flux.to_grams_per_year(), 1e9);

    let from_grams = MassFlux::from_grams_per_year(5e10);
    assert_relative_eq!(from_grams.to_kilotons_per_year(), 50.0);
}

#[test]
fn test_item_flux_times_mass_is_mass_flux() {
    // 1e15 items/yr × 2.7e-5 g/item = 2.7e10 g/yr = 27 kt/yr
    let items = ItemFlux::from_items_per_year(1e15);
    let mean_mass = Mass::from_grams(2.7e-5);

    let mass_flux = items * mean_mass;
    assert_relative_eq!(mass_flux.to_kilotons_per_year(), 27.0);
}

#[test]
fn test_mass_flux_range_subtraction() {
    let p95 = MassFlux::from_kilotons_per_year(120.0);
    let p5 = MassFlux::from_kilotons_per_year(20.0);

    assert_relative_eq!((p95 - p5).to_kilotons_per_year(), 100.0);
}
