use approx::assert_relative_eq;
use units::Density;

use crate::polymer::{DensityTable, DEFAULT_DENSITY_G_CM3};

#[test]
fn builtin_table_has_literature_values() {
    let table = DensityTable::default();

    assert_relative_eq!(table.lookup("Poly_PE").to_grams_per_cm3(), 0.95);
    assert_relative_eq!(table.lookup("Poly_PET").to_grams_per_cm3(), 1.38);
    assert_relative_eq!(table.lookup("Poly_EPS").to_grams_per_cm3(), 0.05);
    assert_eq!(table.len(), 13);
}

#[test]
fn unknown_polymer_falls_back_to_water_density() {
    let table = DensityTable::default();

    assert!(!table.contains("Poly_Mystery"));
    assert_relative_eq!(
        table.lookup("Poly_Mystery").to_grams_per_cm3(),
        DEFAULT_DENSITY_G_CM3
    );
}

#[test]
fn custom_table_overrides_builtin() {
    let table = DensityTable::from_entries([("Poly_PE", Density::from_grams_per_cm3(1.11))]);

    assert_relative_eq!(table.lookup("Poly_PE").to_grams_per_cm3(), 1.11);
    // Everything else now falls back
    assert_relative_eq!(
        table.lookup("Poly_PET").to_grams_per_cm3(),
        DEFAULT_DENSITY_G_CM3
    );
}
