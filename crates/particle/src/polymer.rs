//! Polymer mass densities.
//!
//! Survey polymer labels carry a `Poly_` prefix (`Poly_PE`, `Poly_PET`, ...).
//! Densities are literature values in g/cm³; expanded foams (EPS, XPS)
//! sit far below water density, PET and PVC well above it.

use std::collections::HashMap;

use units::Density;

/// Fallback density for polymers absent from the table.
///
/// Noisy survey priors routinely contain polymer labels with no
/// tabulated density; those degrade to neutral buoyancy (water density)
/// rather than failing the whole simulation.
pub const DEFAULT_DENSITY_G_CM3: f64 = 1.0;

/// Reference densities for common polymers, (label, g/cm³).
const BUILTIN_DENSITIES: [(&str, f64); 13] = [
    ("Poly_PE", 0.95),
    ("Poly_PP", 0.91),
    ("Poly_PS", 1.05),
    ("Poly_PET", 1.38),
    ("Poly_PVC", 1.38),
    ("Poly_PA", 1.15),
    ("Poly_PC", 1.20),
    ("Poly_PU", 1.20),
    ("Poly_PMMA", 1.18),
    ("Poly_EPS", 0.05),
    ("Poly_Rayon", 1.50),
    ("Poly_CA", 1.30),
    ("Poly_XPS", 0.05),
];

/// Lookup table from polymer label to mass density.
///
/// Constructed once and shared read-only by all simulation runs. The
/// built-in table covers the polymers reported in shoreline surveys;
/// custom tables can be supplied for sensitivity analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityTable {
    densities: HashMap<String, Density>,
}

impl DensityTable {
    /// Build a table from explicit (label, density) entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Density)>,
        S: Into<String>,
    {
        Self {
            densities: entries
                .into_iter()
                .map(|(label, density)| (label.into(), density))
                .collect(),
        }
    }

    /// Density for a polymer label, falling back to 1.0 g/cm³ when the
    /// label is not tabulated.
    pub fn lookup(&self, label: &str) -> Density {
        self.densities
            .get(label)
            .copied()
            .unwrap_or(Density::from_grams_per_cm3(DEFAULT_DENSITY_G_CM3))
    }

    /// Whether the label has a tabulated (non-fallback) density.
    pub fn contains(&self, label: &str) -> bool {
        self.densities.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.densities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.densities.is_empty()
    }
}

impl Default for DensityTable {
    fn default() -> Self {
        Self::from_entries(
            BUILTIN_DENSITIES
                .iter()
                .map(|&(label, rho)| (label, Density::from_grams_per_cm3(rho))),
        )
    }
}
