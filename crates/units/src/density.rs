use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// A material mass density using f64 precision.
///
/// Base unit is g/cm³, the convention polymer reference tables use.
/// Water sits at 1.0; expanded foams fall well below it, PET and PVC
/// well above.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Density(f64); // Base unit: g/cm³

impl Density {
    /// Creates a new `Density` from a value in g/cm³.
    pub fn from_grams_per_cm3(value: f64) -> Self {
        Self(value)
    }

    /// Returns the density in g/cm³.
    pub fn to_grams_per_cm3(&self) -> f64 {
        self.0
    }

    /// Creates a new `Density` from a value in kg/m³.
    pub fn from_kg_per_m3(value: f64) -> Self {
        Self(value * 1e-3)
    }

    /// Converts the density to kg/m³.
    pub fn to_kg_per_m3(&self) -> f64 {
        self.0 * 1e3
    }
}

impl Mul<f64> for Density {
    type Output = Density;

    fn mul(self, rhs: f64) -> Density {
        Density(self.0 * rhs)
    }
}

impl Div<f64> for Density {
    type Output = Density;

    fn div(self, rhs: f64) -> Density {
        Density(self.0 / rhs)
    }
}

/// Division of Density by Density returns a dimensionless ratio
impl Div for Density {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}
