use std::f64::consts::PI;

use approx::assert_relative_eq;
use units::Length;

use crate::shape::{Shape, FILM_THICKNESS};

#[test]
fn fiber_volume_is_cylinder_at_aspect_ratio_ten() {
    // L = 1000 µm, D = 100 µm: V = π (50)² · 1000
    let volume = Shape::Fiber.volume(Length::from_microns(1000.0));
    assert_relative_eq!(
        volume.to_cubic_microns(),
        PI * 50.0_f64.powi(2) * 1000.0,
        max_relative = 1e-12
    );
}

#[test]
fn fragment_and_pellet_volume_is_sphere() {
    let size = Length::from_microns(200.0);
    let expected = (4.0 / 3.0) * PI * 100.0_f64.powi(3);

    assert_relative_eq!(
        Shape::Fragment.volume(size).to_cubic_microns(),
        expected,
        max_relative = 1e-12
    );
    // Pellets share the spherical model
    assert_relative_eq!(
        Shape::Pellet.volume(size).to_cubic_microns(),
        expected,
        max_relative = 1e-12
    );
}

#[test]
fn film_volume_is_square_plate() {
    let volume = Shape::Film.volume(Length::from_microns(500.0));
    assert_relative_eq!(
        volume.to_cubic_microns(),
        500.0 * 500.0 * FILM_THICKNESS,
        max_relative = 1e-12
    );
}

#[test]
fn volume_is_monotonic_in_size_for_every_shape() {
    for shape in Shape::ALL {
        let mut previous = 0.0;
        for size_um in [10.0, 50.0, 100.0, 500.0, 2000.0, 5000.0] {
            let volume = shape.volume(Length::from_microns(size_um)).to_cubic_microns();
            assert!(
                volume > previous,
                "{} volume should grow with size, got {} after {}",
                shape,
                volume,
                previous
            );
            previous = volume;
        }
    }
}

#[test]
fn shape_volume_ordering_at_100_microns() {
    // With the default aspect ratio and thickness constants, at 100 µm:
    // fiber cylinder < film plate < sphere. The sphere/fiber ratio is a
    // size-independent 400/6 ≈ 66.7, so the thin fiber is always the
    // lightest geometry for a given linear size.
    let size = Length::from_microns(100.0);
    let sphere = Shape::Fragment.volume(size).to_cubic_microns();
    let fiber = Shape::Fiber.volume(size).to_cubic_microns();
    let film = Shape::Film.volume(size).to_cubic_microns();

    assert!(
        fiber < film && film < sphere,
        "Expected fiber < film < sphere, got {} / {} / {}",
        fiber,
        film,
        sphere
    );
    assert_relative_eq!(sphere / fiber, 400.0 / 6.0, max_relative = 1e-12);
}

#[test]
fn from_label_accepts_survey_prefixes_and_case() {
    assert_eq!(Shape::from_label("Shape_Fiber").unwrap(), Shape::Fiber);
    assert_eq!(Shape::from_label("fragment").unwrap(), Shape::Fragment);
    assert_eq!(Shape::from_label("PELLET").unwrap(), Shape::Pellet);
    assert_eq!(Shape::from_label(" Shape_Film ").unwrap(), Shape::Film);
}

#[test]
fn from_label_rejects_unknown_shapes() {
    let err = Shape::from_label("Shape_Foam").unwrap_err();
    assert!(err.to_string().contains("Shape_Foam"));
}

#[test]
fn label_round_trips_through_from_label() {
    for shape in Shape::ALL {
        assert_eq!(Shape::from_label(shape.label()).unwrap(), shape);
    }
}
