use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul};

use crate::density::Density;
use crate::mass::Mass;

/// Cubic microns to cubic centimeters
pub const MICRON3_TO_CM3: f64 = 1e-12;

/// A particle volume using f64 precision.
///
/// Base unit is cubic microns (µm³), matching the scale at which
/// shape-geometry formulas produce volumes. Conversion to cm³ is the
/// bridge to density (g/cm³) and therefore to mass.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Volume(f64); // Base unit: µm³

impl Volume {
    /// Creates a zero volume value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Volume` from a value in cubic microns.
    pub fn from_cubic_microns(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Volume` from a value in cubic centimeters.
    pub fn from_cm3(value: f64) -> Self {
        Self(value / MICRON3_TO_CM3)
    }

    /// Returns the volume in cubic microns.
    pub fn to_cubic_microns(&self) -> f64 {
        self.0
    }

    /// Converts the volume to cubic centimeters.
    pub fn to_cm3(&self) -> f64 {
        self.0 * MICRON3_TO_CM3
    }
}

impl Add for Volume {
    type Output = Volume;

    fn add(self, rhs: Volume) -> Volume {
        Volume(self.0 + rhs.0)
    }
}

impl Mul<f64> for Volume {
    type Output = Volume;

    fn mul(self, rhs: f64) -> Volume {
        Volume(self.0 * rhs)
    }
}

impl Div<f64> for Volume {
    type Output = Volume;

    fn div(self, rhs: f64) -> Volume {
        Volume(self.0 / rhs)
    }
}

/// Division of Volume by Volume returns a dimensionless ratio
impl Div for Volume {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Volume × density yields mass: (µm³ → cm³) × g/cm³ = g
impl Mul<Density> for Volume {
    type Output = Mass;

    fn mul(self, rhs: Density) -> Mass {
        Mass::from_grams(self.to_cm3() * rhs.to_grams_per_cm3())
    }
}
