//! Reference checks for Venus against published ephemeris values
//! (Meeus, Astronomical Algorithms, chapters 33, 36, 38 and 41).

use synodic::epoch::Epoch;
use synodic::frame::Equinox;
use synodic::planet::Planet;

/// Absolute distance in days between an epoch and a calendar date.
fn days_from(epoch: Epoch, year: i32, month: u8, day: f64) -> f64 {
    (epoch - Epoch::from_gregorian(year, month, day)).abs()
}

#[test]
fn heliocentric_position_1992() {
    // 1992 December 20.0 TT, mean equinox of date.
    let epoch = Epoch::from_gregorian(1992, 12, 20.0);
    let pos = Planet::Venus.heliocentric_position(epoch, Equinox::MeanOfDate);

    assert!((pos.longitude - 26.11428).abs() < 1e-3, "lon {}", pos.longitude);
    assert!((pos.latitude - (-2.62070)).abs() < 5e-4, "lat {}", pos.latitude);
    assert!((pos.radius - 0.724603).abs() < 5e-5, "r {}", pos.radius);
}

#[test]
fn heliocentric_j2000_reduction() {
    // Referring 1992 coordinates to the J2000 equinox adds roughly
    // 1.397 deg/century of general precession.
    let epoch = Epoch::from_gregorian(1992, 12, 20.0);
    let of_date = Planet::Venus.heliocentric_position(epoch, Equinox::MeanOfDate);
    let j2000 = Planet::Venus.heliocentric_position(epoch, Equinox::J2000);

    let shift = j2000.longitude - of_date.longitude;
    assert!((0.08..0.11).contains(&shift), "precession shift {shift}");
    assert!((j2000.radius - of_date.radius).abs() < 1e-12);
}

#[test]
fn apparent_geocentric_1992() {
    let epoch = Epoch::from_gregorian(1992, 12, 20.0);
    let geometry = Planet::Venus.geocentric(epoch).unwrap();

    // Meeus example 33.a: alpha = 21h 04m 41.5s, delta = -18 deg 53' 17".
    assert!(
        (geometry.right_ascension - 316.17283).abs() < 0.01,
        "ra {}",
        geometry.right_ascension
    );
    assert!(
        (geometry.declination - (-18.88801)).abs() < 0.01,
        "dec {}",
        geometry.declination
    );
    assert!(
        (0.908..0.913).contains(&geometry.distance),
        "delta {}",
        geometry.distance
    );
    assert!(
        (geometry.phase_angle - 72.96).abs() < 0.3,
        "phase {}",
        geometry.phase_angle
    );
}

#[test]
fn illumination_and_magnitude_1992() {
    let epoch = Epoch::from_gregorian(1992, 12, 20.0);

    let k = Planet::Venus.illuminated_fraction(epoch).unwrap();
    assert!((k - 0.647).abs() < 0.005, "k {k}");

    let m = Planet::Venus.magnitude(epoch).unwrap();
    assert!((m - (-3.8)).abs() < 0.15, "magnitude {m}");
}

#[test]
fn inferior_conjunction_1882() {
    // The 1882 December 6 transit of Venus.
    let guess = Epoch::from_gregorian(1882, 12, 1.0);
    let found = Planet::Venus.inferior_conjunction(guess).unwrap();
    assert!(days_from(found, 1882, 12, 6.69) < 0.5);
}

#[test]
fn superior_conjunction_1994() {
    let guess = Epoch::from_gregorian(1993, 10, 1.0);
    let found = Planet::Venus.superior_conjunction(guess).unwrap();
    assert!(days_from(found, 1994, 1, 17.05) < 1.0);
}

#[test]
fn western_elongation_2019() {
    let guess = Epoch::from_gregorian(2019, 1, 1.0);
    let (found, angle) = Planet::Venus.western_elongation(guess).unwrap();
    assert!(days_from(found, 2019, 1, 6.0) < 1.0);
    assert!((angle - 46.9).abs() < 0.3, "elongation {angle}");
}

#[test]
fn eastern_elongation_2020() {
    // Greatest eastern elongation of 2020 March 24, about 46.1 degrees,
    // reached from a guess half a synodic period out.
    let guess = Epoch::from_gregorian(2019, 10, 1.0);
    let (found, angle) = Planet::Venus.eastern_elongation(guess).unwrap();
    assert!(days_from(found, 2020, 3, 24.9) < 1.0);
    assert!((angle - 46.1).abs() < 0.3, "elongation {angle}");
}

#[test]
fn stations_around_the_2018_retrograde_loop() {
    let first = Planet::Venus
        .station_1(Epoch::from_gregorian(2018, 10, 1.0))
        .unwrap();
    assert!(days_from(first, 2018, 10, 5.0) < 1.5);

    let second = Planet::Venus
        .station_2(Epoch::from_gregorian(2018, 11, 10.0))
        .unwrap();
    assert!(days_from(second, 2018, 11, 16.0) < 1.5);
}

#[test]
fn ascending_node_1978() {
    // Meeus example 38.a: 1978 November 27.4, r = 0.7205.
    let guess = Epoch::from_gregorian(1979, 1, 1.0);
    let (found, radius) = Planet::Venus.node_passage(guess, true).unwrap();
    assert!(days_from(found, 1978, 11, 27.4) < 1.0);
    assert!((radius - 0.7205).abs() < 2e-3, "radius {radius}");
}

#[test]
fn positions_repeat_after_one_orbital_period() {
    let epoch = Epoch::from_gregorian(1992, 12, 20.0);
    let later = epoch + Planet::Venus.orbital_period();

    let a = Planet::Venus.heliocentric_position(epoch, Equinox::MeanOfDate);
    let b = Planet::Venus.heliocentric_position(later, Equinox::MeanOfDate);

    // The mean period is only good to a fraction of a day, so allow the
    // drift that a fraction of a day of mean motion produces.
    assert!((a.longitude - b.longitude).abs() < 0.1, "{} vs {}", a.longitude, b.longitude);
    assert!((a.latitude - b.latitude).abs() < 0.1);
    assert!((a.radius - b.radius).abs() < 1e-3);
}

#[test]
fn event_search_is_stable_against_the_guess() {
    // Guesses inside the same basin converge to the same conjunction.
    let a = Planet::Venus
        .inferior_conjunction(Epoch::from_gregorian(1882, 12, 1.0))
        .unwrap();
    let b = Planet::Venus
        .inferior_conjunction(Epoch::from_gregorian(1882, 12, 15.0))
        .unwrap();
    assert!((a - b).abs() < 1e-3, "{} vs {}", a.jde(), b.jde());
}

#[test]
fn apsides_bracket_the_mean_distance() {
    let guess = Epoch::from_gregorian(2000, 1, 1.5);

    let (_, perihelion_r) = Planet::Venus.perihelion(guess).unwrap();
    assert!((perihelion_r - 0.71843).abs() < 1e-3, "q {perihelion_r}");

    let (_, aphelion_r) = Planet::Venus.aphelion(guess).unwrap();
    assert!((aphelion_r - 0.72823).abs() < 1e-3, "Q {aphelion_r}");

    assert!(perihelion_r < aphelion_r);
}
