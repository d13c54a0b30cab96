//! Run the reference uncertainty scenario and print a flux report.
//!
//! Usage: cargo run -p flux --example flux_report

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::ItemFlux;

use flux::{
    estimate_flux, simulate_batch, sweep_surface, Quantile, SimulationConfig, SurfaceMetric,
    SweepConfig, DEFAULT_ITEM_FLUX_PER_YEAR,
};
use particle::DensityTable;
use priors::PriorDistribution;

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let shape_prior = PriorDistribution::from_counts(
        vec![
            ("Shape_Fiber", 520.0),
            ("Shape_Fragment", 310.0),
            ("Shape_Film", 130.0),
            ("Shape_Pellet", 40.0),
            ("Shape_Other", 88.0),
        ],
        "Other",
    )
    .expect("shape prior");

    let polymer_prior = PriorDistribution::from_counts(
        vec![
            ("Poly_PE", 340.0),
            ("Poly_PP", 260.0),
            ("Poly_PET", 180.0),
            ("Poly_PS", 90.0),
            ("Poly_Other", 55.0),
        ],
        "Other",
    )
    .expect("polymer prior");

    let density_table = DensityTable::default();
    let item_flux = ItemFlux::from_items_per_year(DEFAULT_ITEM_FLUX_PER_YEAR);

    // Single reference run
    let config = SimulationConfig::default();
    let mut rng = ChaChaRng::seed_from_u64(42);
    let batch = simulate_batch(
        &mut rng,
        config.samples,
        &config.size_distribution().expect("size distribution"),
        &shape_prior,
        &polymer_prior,
        &density_table,
    )
    .expect("simulation");
    let summary = batch.summarize().expect("summary");

    println!(
        "Quantile analysis (n={}, alpha={}, {}-{} um)",
        config.samples,
        config.alpha,
        config.min_size.to_microns(),
        config.max_size.to_microns()
    );
    for (label, quantile) in [
        ("P5", Quantile::P5),
        ("P50", Quantile::P50),
        ("P95", Quantile::P95),
        ("mean", Quantile::Mean),
    ] {
        let flux = estimate_flux(item_flux, summary.select(quantile)).expect("flux");
        println!(
            "{:>4}: {:>10.4} mg/item  {:>8.2} kt/yr",
            label,
            summary.select(quantile).to_milligrams(),
            flux.to_kilotons_per_year()
        );
    }

    // Parameter-surface sweep
    let grid = sweep_surface(
        &SweepConfig::default(),
        &shape_prior,
        &polymer_prior,
        &density_table,
        item_flux,
        SurfaceMetric::Mean,
    )
    .expect("sweep");

    println!(
        "\nMean-flux surface ({} x {} cells)",
        grid.rows(),
        grid.cols()
    );
    println!(
        "min {:.2} kt/yr at alpha={:.2}, min_size={:.0} um",
        grid.minimum().value.to_kilotons_per_year(),
        grid.minimum().alpha,
        grid.minimum().min_size.to_microns()
    );
    println!(
        "max {:.2} kt/yr at alpha={:.2}, min_size={:.0} um",
        grid.maximum().value.to_kilotons_per_year(),
        grid.maximum().alpha,
        grid.maximum().min_size.to_microns()
    );
}
