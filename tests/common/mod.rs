use approx::assert_abs_diff_eq;
use skydome::{horizontal::HorizontalCoordinates, observers::Observer};

pub const HYG_SMALL: &str = "tests/data/hyg_small.csv";

pub fn beijing() -> Observer {
    Observer::new(39.9, 116.4).unwrap().with_name("Beijing")
}

pub fn assert_horizontal_close(
    actual: &HorizontalCoordinates,
    altitude: f64,
    azimuth: f64,
    epsilon: f64,
) {
    assert_abs_diff_eq!(actual.altitude, altitude, epsilon = epsilon);
    let az = actual.azimuth.expect("azimuth should be defined");
    assert_abs_diff_eq!(az, azimuth, epsilon = epsilon);
}

pub fn assert_in_ranges(h: &HorizontalCoordinates) {
    assert!(
        (-90.0..=90.0).contains(&h.altitude),
        "altitude {}",
        h.altitude
    );
    if let Some(az) = h.azimuth {
        assert!((0.0..360.0).contains(&az), "azimuth {az}");
    }
}
