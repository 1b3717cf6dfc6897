//! Reference checks for Saturn. The coefficient tables for the outer
//! planets are shorter than for the inner ones, so positional tolerances
//! are wider here.

use synodic::epoch::Epoch;
use synodic::planet::Planet;

fn days_from(epoch: Epoch, year: i32, month: u8, day: f64) -> f64 {
    (epoch - Epoch::from_gregorian(year, month, day)).abs()
}

#[test]
fn apparent_geocentric_1992() {
    // 1992 December 20.0 TT: alpha = 21h 11m 41.8s, delta = -17 deg 15' 41".
    let epoch = Epoch::from_gregorian(1992, 12, 20.0);
    let geometry = Planet::Saturn.geocentric(epoch).unwrap();

    assert!(
        (geometry.right_ascension - 317.92417).abs() < 0.05,
        "ra {}",
        geometry.right_ascension
    );
    assert!(
        (geometry.declination - (-17.26133)).abs() < 0.05,
        "dec {}",
        geometry.declination
    );
    assert!(
        (geometry.elongation - 46.9).abs() < 0.2,
        "elongation {}",
        geometry.elongation
    );
}

#[test]
fn conjunction_2125() {
    let guess = Epoch::from_gregorian(2125, 6, 1.0);
    let found = Planet::Saturn.conjunction(guess).unwrap();
    assert!(days_from(found, 2125, 8, 26.4) < 0.5);
}

#[test]
fn opposition_2018() {
    let guess = Epoch::from_gregorian(2018, 4, 1.0);
    let found = Planet::Saturn.opposition(guess).unwrap();
    assert!(days_from(found, 2018, 6, 27.0) < 0.5);
}

#[test]
fn stations_around_the_2018_opposition() {
    let first = Planet::Saturn
        .station_1(Epoch::from_gregorian(2018, 6, 1.0))
        .unwrap();
    assert!(days_from(first, 2018, 4, 17.9) < 2.0);

    let second = Planet::Saturn
        .station_2(Epoch::from_gregorian(2018, 7, 1.0))
        .unwrap();
    assert!(days_from(second, 2018, 9, 6.2) < 2.0);
}

#[test]
fn perihelion_2032() {
    let guess = Epoch::from_gregorian(2030, 1, 1.0);
    let (found, radius) = Planet::Saturn.perihelion(guess).unwrap();
    assert!(days_from(found, 2032, 11, 28.6) < 15.0);
    assert!((9.0..9.06).contains(&radius), "q {radius}");
}

#[test]
fn aphelion_1929() {
    let guess = Epoch::from_gregorian(1925, 1, 1.0);
    let (found, radius) = Planet::Saturn.aphelion(guess).unwrap();
    assert!(days_from(found, 1929, 11, 11.0) < 15.0);
    assert!((10.05..10.12).contains(&radius), "Q {radius}");
}

#[test]
fn ascending_node_2034() {
    // Meeus example 38.b: 2034 May 30.2, r = 9.0546.
    let guess = Epoch::from_gregorian(2033, 1, 1.0);
    let (found, radius) = Planet::Saturn.node_passage(guess, true).unwrap();
    assert!(days_from(found, 2034, 5, 30.2) < 2.0);
    assert!((radius - 9.0546).abs() < 0.02, "r {radius}");
}

#[test]
fn inner_planet_queries_are_rejected() {
    let epoch = Epoch::from_gregorian(2018, 6, 1.0);
    assert!(Planet::Saturn.inferior_conjunction(epoch).is_err());
    assert!(Planet::Saturn.eastern_elongation(epoch).is_err());
}
