use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub const MICRON_TO_MM: f64 = 1e-3;
pub const MICRON_TO_CM: f64 = 1e-4;
pub const MICRON_TO_M: f64 = 1e-6;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents length values with microns (µm) as the
/// base unit. This is the natural choice for microplastic particle sizes,
/// which span roughly 1 µm to a few millimeters.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let fiber_length = Length::from_microns(350.0);
/// let upper_bound = Length::from_mm(5.0);
///
/// assert!(fiber_length < upper_bound);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: µm

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in microns.
    pub fn from_microns(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in millimeters.
    pub fn from_mm(value: f64) -> Self {
        Self(value / MICRON_TO_MM)
    }

    /// Creates a new `Length` from a value in centimeters.
    pub fn from_cm(value: f64) -> Self {
        Self(value / MICRON_TO_CM)
    }

    /// Returns the length in microns.
    pub fn to_microns(&self) -> f64 {
        self.0
    }

    /// Converts the length to millimeters.
    pub fn to_mm(&self) -> f64 {
        self.0 * MICRON_TO_MM
    }

    /// Converts the length to centimeters.
    pub fn to_cm(&self) -> f64 {
        self.0 * MICRON_TO_CM
    }

    /// Converts the length to meters.
    pub fn to_m(&self) -> f64 {
        self.0 * MICRON_TO_M
    }

    /// Returns the minimum of two lengths.
    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 {
            self
        } else {
            other
        }
    }

    /// Returns the maximum of two lengths.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 {
            self
        } else {
            other
        }
    }

    /// Raise to integer power (returns dimensionless f64 for dimensional consistency)
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }

    /// Power function
    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }

    /// Natural logarithm
    pub fn ln(&self) -> f64 {
        self.0.ln()
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
