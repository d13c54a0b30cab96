//! Shape categories and their volume geometry.
//!
//! Each observed shape category maps to an idealized 3-D solid so that a
//! single measured linear dimension can be converted into a volume:
//! fibers are thin cylinders, fragments and pellets are spheres, films
//! are thin square plates.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use units::{Length, Volume};

/// Fiber length-to-diameter ratio (a 1000 µm fiber is 100 µm thick)
pub const FIBER_ASPECT_RATIO: f64 = 10.0;

/// Fixed film thickness in µm
pub const FILM_THICKNESS: f64 = 20.0;

/// Error for shape labels outside the modeled category set.
///
/// Unknown shapes are a hard failure: silently assigning a default
/// geometry would bias the mass estimate in a way the caller cannot see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shape label: {0:?}")]
pub struct ShapeError(pub String);

/// The closed set of particle shape categories.
///
/// Survey data labels these `Shape_Fiber`, `Shape_Fragment`, etc.; the
/// variant set is deliberately closed so that adding a shape forces every
/// `match` on it to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Fiber,
    Fragment,
    Pellet,
    Film,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Fiber, Shape::Fragment, Shape::Pellet, Shape::Film];

    /// Parse a survey label into a shape category.
    ///
    /// Accepts both bare names (`"Fiber"`) and prefixed survey labels
    /// (`"Shape_Fiber"`), case-insensitively.
    pub fn from_label(label: &str) -> Result<Self, ShapeError> {
        let lower = label.trim().to_ascii_lowercase();
        let bare = lower.strip_prefix("shape_").unwrap_or(&lower);

        match bare {
            "fiber" => Ok(Shape::Fiber),
            "fragment" => Ok(Shape::Fragment),
            "pellet" => Ok(Shape::Pellet),
            "film" => Ok(Shape::Film),
            _ => Err(ShapeError(label.to_string())),
        }
    }

    /// The prefixed survey label for this shape.
    pub fn label(&self) -> &'static str {
        match self {
            Shape::Fiber => "Shape_Fiber",
            Shape::Fragment => "Shape_Fragment",
            Shape::Pellet => "Shape_Pellet",
            Shape::Film => "Shape_Film",
        }
    }

    /// Convert a linear particle size into a volume.
    ///
    /// The size is interpreted per shape:
    /// - **Fiber**: cylinder of length L = size and diameter D = L / 10
    /// - **Fragment / Pellet**: sphere of diameter D = size
    /// - **Film**: square plate of side D = size and 20 µm thickness
    ///
    /// # Arguments
    /// * `size` - Measured linear dimension of the particle
    ///
    /// # Returns
    /// Particle volume in µm³
    pub fn volume(&self, size: Length) -> Volume {
        let size_um = size.to_microns();

        let volume_um3 = match self {
            Shape::Fiber => {
                let length = size_um;
                let diameter = length / FIBER_ASPECT_RATIO;
                PI * (diameter / 2.0).powi(2) * length
            }
            Shape::Fragment | Shape::Pellet => {
                let diameter = size_um;
                (4.0 / 3.0) * PI * (diameter / 2.0).powi(3)
            }
            Shape::Film => {
                let side = size_um;
                side * side * FILM_THICKNESS
            }
        };

        Volume::from_cubic_microns(volume_um3)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
