use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::Length;

use crate::sampling::{SizeDistribution, SizeDistributionError};

fn dist(alpha: f64, min_um: f64, max_um: f64) -> SizeDistribution {
    SizeDistribution::new(
        alpha,
        Length::from_microns(min_um),
        Length::from_microns(max_um),
    )
    .unwrap()
}

#[test]
fn samples_respect_bounds() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for alpha in [1.5, 2.64, 4.5] {
        let dist = dist(alpha, 100.0, 5000.0);
        for size in dist.sample_n(&mut rng, 1000) {
            let um = size.to_microns();
            assert!(um >= 100.0, "Sample {} should be >= 100", um);
            assert!(um <= 5000.0, "Sample {} should be <= 5000", um);
        }
    }
}

#[test]
fn steep_exponent_favors_small_sizes() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let dist = dist(2.64, 100.0, 5000.0);

    let mut samples: Vec<f64> = dist
        .sample_n(&mut rng, 1000)
        .iter()
        .map(|s| s.to_microns())
        .collect();
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let median = samples[500];

    // Median should sit much closer to min than max for a steep power law
    assert!(
        median < 500.0,
        "Median {} should be < 500 for steep power law",
        median
    );
}

#[test]
fn near_unit_alpha_uses_log_uniform_branch() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let dist = dist(1.0, 10.0, 1000.0);

    let samples: Vec<f64> = dist
        .sample_n(&mut rng, 2000)
        .iter()
        .map(|s| s.to_microns())
        .collect();

    for &um in &samples {
        assert!((10.0..=1000.0).contains(&um));
    }

    // Log-uniform means ln(size) is uniform: mean of ln should sit near
    // the midpoint of [ln 10, ln 1000]
    let mean_ln: f64 = samples.iter().map(|s| s.ln()).sum::<f64>() / samples.len() as f64;
    let midpoint = (10.0_f64.ln() + 1000.0_f64.ln()) / 2.0;
    assert!(
        (mean_ln - midpoint).abs() < 0.1,
        "Mean log-size {} should be near {}",
        mean_ln,
        midpoint
    );
}

#[test]
fn alpha_just_outside_tolerance_uses_closed_form() {
    // α = 1.02 is outside the singular band; the inverse CDF must not
    // produce NaN or infinite values despite the large 1/(1-α) exponent
    let mut rng = ChaChaRng::seed_from_u64(42);
    let dist = dist(1.02, 50.0, 5000.0);

    for size in dist.sample_n(&mut rng, 500) {
        assert!(size.to_microns().is_finite());
        assert!((50.0..=5000.0).contains(&size.to_microns()));
    }
}

#[test]
fn same_seed_reproduces_draws() {
    let dist = dist(2.64, 100.0, 5000.0);

    let mut rng1 = ChaChaRng::seed_from_u64(7);
    let mut rng2 = ChaChaRng::seed_from_u64(7);

    assert_eq!(dist.sample_n(&mut rng1, 100), dist.sample_n(&mut rng2, 100));
}

#[test]
fn rejects_inverted_or_non_positive_bounds() {
    let err = SizeDistribution::new(
        2.0,
        Length::from_microns(500.0),
        Length::from_microns(100.0),
    )
    .unwrap_err();
    assert!(matches!(err, SizeDistributionError::InvalidBounds { .. }));

    let err = SizeDistribution::new(
        2.0,
        Length::from_microns(0.0),
        Length::from_microns(100.0),
    )
    .unwrap_err();
    assert!(matches!(err, SizeDistributionError::InvalidBounds { .. }));
}

#[test]
fn rejects_non_finite_exponent() {
    let err = SizeDistribution::new(
        f64::NAN,
        Length::from_microns(10.0),
        Length::from_microns(100.0),
    )
    .unwrap_err();
    assert!(matches!(err, SizeDistributionError::NonFiniteExponent(_)));
}
