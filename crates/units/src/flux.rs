use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

use crate::mass::Mass;

/// Seconds in a (non-leap) year, for converting per-second river
/// discharge rates into annual totals.
pub const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// Grams/year to kilotons/year: g → kg is 1e3, kg → kt is 1e6
pub const GRAMS_PER_KILOTON: f64 = 1e9;

/// A particle count flux in items per year.
///
/// This is the independently-measured input to the mass-flux estimate:
/// how many particles cross the coastal boundary annually, summed over
/// all river mouths.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ItemFlux(f64); // Base unit: items/yr

impl ItemFlux {
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `ItemFlux` from a value in items per year.
    pub fn from_items_per_year(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `ItemFlux` from a value in items per second.
    pub fn from_items_per_second(value: f64) -> Self {
        Self(value * SECONDS_PER_YEAR)
    }

    /// Returns the flux in items per year.
    pub fn to_items_per_year(&self) -> f64 {
        self.0
    }
}

impl Add for ItemFlux {
    type Output = ItemFlux;

    fn add(self, rhs: ItemFlux) -> ItemFlux {
        ItemFlux(self.0 + rhs.0)
    }
}

impl Mul<f64> for ItemFlux {
    type Output = ItemFlux;

    fn mul(self, rhs: f64) -> ItemFlux {
        ItemFlux(self.0 * rhs)
    }
}

/// Item flux × representative particle mass yields a mass flux:
/// items/yr × g/item = g/yr
impl Mul<Mass> for ItemFlux {
    type Output = MassFlux;

    fn mul(self, rhs: Mass) -> MassFlux {
        MassFlux::from_grams_per_year(self.0 * rhs.to_grams())
    }
}

/// A mass flux in kilotons per year.
///
/// The headline output unit: literature estimates of river-to-ocean
/// plastic transport are quoted in kt/yr.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MassFlux(f64); // Base unit: kt/yr

impl MassFlux {
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `MassFlux` from a value in kilotons per year.
    pub fn from_kilotons_per_year(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `MassFlux` from a value in grams per year.
    pub fn from_grams_per_year(value: f64) -> Self {
        Self(value / GRAMS_PER_KILOTON)
    }

    /// Returns the flux in kilotons per year.
    pub fn to_kilotons_per_year(&self) -> f64 {
        self.0
    }

    /// Converts the flux to kilograms per year.
    pub fn to_kg_per_year(&self) -> f64 {
        self.0 * 1e6
    }

    /// Converts the flux to grams per year.
    pub fn to_grams_per_year(&self) -> f64 {
        self.0 * GRAMS_PER_KILOTON
    }
}

impl Add for MassFlux {
    type Output = MassFlux;

    fn add(self, rhs: MassFlux) -> MassFlux {
        MassFlux(self.0 + rhs.0)
    }
}

/// Difference of two mass fluxes (e.g. a P95 − P5 uncertainty range)
impl Sub for MassFlux {
    type Output = MassFlux;

    fn sub(self, rhs: MassFlux) -> MassFlux {
        MassFlux(self.0 - rhs.0)
    }
}

impl Mul<f64> for MassFlux {
    type Output = MassFlux;

    fn mul(self, rhs: f64) -> MassFlux {
        MassFlux(self.0 * rhs)
    }
}
