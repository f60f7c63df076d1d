use std::{sync::Arc, thread};

use rand::{rngs::StdRng, Rng, SeedableRng};
use skydome::{
    bodies::CelestialBody,
    horizontal::{horizontal_for_planet, HorizontalCoordinates},
    observers::Observer,
    params::SkydomeParams,
    skydome::Skydome,
    time::j2000_epoch,
};

mod common;
use common::{assert_in_ranges, beijing};

fn bits(h: &HorizontalCoordinates) -> (u64, Option<u64>, Option<u64>) {
    (
        h.altitude.to_bits(),
        h.azimuth.map(f64::to_bits),
        h.distance.map(f64::to_bits),
    )
}

#[test]
fn test_repeated_queries_are_bit_identical() {
    let observer = beijing();
    let epoch = j2000_epoch() + 8765.4321 * hifitime::Unit::Day;
    for body in CelestialBody::ALL {
        if body == CelestialBody::Moon {
            continue;
        }
        let first = horizontal_for_planet(body, &observer, &epoch).unwrap();
        for _ in 0..5 {
            let again = horizontal_for_planet(body, &observer, &epoch).unwrap();
            assert_eq!(bits(&first), bits(&again), "{body}");
        }
    }
}

#[test]
fn test_concurrent_queries_agree() {
    let sky = Arc::new(Skydome::new(beijing(), SkydomeParams::default()));
    let epoch = j2000_epoch() + 3000.25 * hifitime::Unit::Day;
    let reference: Vec<_> = sky
        .all_bodies(&epoch)
        .unwrap()
        .iter()
        .map(|(b, h)| (*b, bits(h)))
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let sky = Arc::clone(&sky);
            thread::spawn(move || {
                sky.all_bodies(&epoch)
                    .unwrap()
                    .iter()
                    .map(|(b, h)| (*b, bits(h)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), reference);
    }
}

#[test]
fn test_random_sky_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..300 {
        let observer = Observer::new(
            rng.random_range(-90.0..=90.0),
            rng.random_range(-180.0..=180.0),
        )
        .unwrap();
        let sky = Skydome::new(observer, SkydomeParams::default());
        let offset_days: f64 = rng.random_range(-36525.0..36525.0);
        let epoch = j2000_epoch() + offset_days * hifitime::Unit::Day;

        for (_, h) in sky.all_bodies(&epoch).unwrap() {
            assert_in_ranges(&h);
        }
    }
}
