//! Reference-frame reductions: obliquity, nutation, precession of ecliptic
//! coordinates, and the heliocentric → geocentric transform with light-time
//! and aberration.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::angle::principal_angle;
use crate::constants::{ArcSec, AstronomicalUnit, Degree, J2000, RADEG, VLIGHT_AU};
use crate::epoch::Epoch;
use crate::planet::Planet;
use crate::series::{heliocentric_position, HeliocentricPosition};
use crate::synodic_errors::SynodicError;
use crate::vsop87::planet_tables;

/// Reference equinox for heliocentric output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Equinox {
    /// Mean ecliptic and equinox of date
    MeanOfDate,
    /// Standard equinox J2000.0
    J2000,
}

/// Apparent geocentric geometry of a planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeocentricGeometry {
    /// Apparent ecliptic longitude in degrees, [0, 360)
    pub longitude: Degree,
    /// Apparent ecliptic latitude in degrees
    pub latitude: Degree,
    /// Earth-planet distance in AU at convergence of the light-time
    /// iteration (the planet antedated by τ); the geometric distance for
    /// [`geocentric_geometry`]
    pub distance: AstronomicalUnit,
    /// Apparent right ascension in degrees, [0, 360)
    pub right_ascension: Degree,
    /// Apparent declination in degrees
    pub declination: Degree,
    /// Angular separation from the Sun, [0, 180]
    pub elongation: Degree,
    /// Sun-planet-Earth angle, [0, 180]
    pub phase_angle: Degree,
    /// Heliocentric radius of the planet at the light-time antedated instant
    pub planet_radius: AstronomicalUnit,
    /// Heliocentric radius of the Earth
    pub earth_radius: AstronomicalUnit,
}

/// Mean obliquity of the ecliptic (IAU 1976), in degrees.
pub fn obliquity(epoch: Epoch) -> Degree {
    let t = epoch.julian_centuries();
    23.43929111 - ((46.8150 + (0.00059 - 0.001813 * t) * t) * t) / 3600.0
}

/// Nutation in longitude and obliquity, in arcseconds.
///
/// Short form of the IAU 1980 series, good to about 0.5″: the node of the
/// lunar orbit plus the 2L terms of the Sun and the Moon.
pub fn nutation(epoch: Epoch) -> (ArcSec, ArcSec) {
    let t = epoch.julian_centuries();

    let omega = (125.04452 - 1934.136261 * t) * RADEG;
    let l_sun = (280.4665 + 36000.7698 * t) * RADEG;
    let l_moon = (218.3165 + 481267.8813 * t) * RADEG;

    let dpsi = -17.20 * omega.sin()
        - 1.32 * (2.0 * l_sun).sin()
        - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let deps = 9.20 * omega.cos()
        + 0.57 * (2.0 * l_sun).cos()
        + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos();

    (dpsi, deps)
}

/// Rectangular ecliptic coordinates of a spherical heliocentric position.
pub(crate) fn rectangular(pos: &HeliocentricPosition) -> Vector3<f64> {
    let lon = pos.longitude * RADEG;
    let lat = pos.latitude * RADEG;
    Vector3::new(
        pos.radius * lat.cos() * lon.cos(),
        pos.radius * lat.cos() * lon.sin(),
        pos.radius * lat.sin(),
    )
}

/// Ecliptic longitude/latitude of a rectangular vector, in degrees.
fn spherical(v: &Vector3<f64>) -> (Degree, Degree) {
    let lon = principal_angle(v.y.atan2(v.x) / RADEG);
    let lat = (v.z / v.norm()).asin() / RADEG;
    (lon, lat)
}

/// Convert ecliptic to equatorial coordinates, all angles in degrees.
fn ecliptic_to_equatorial(lon: Degree, lat: Degree, obl: Degree) -> (Degree, Degree) {
    let (lon, lat, obl) = (lon * RADEG, lat * RADEG, obl * RADEG);

    let ra = (lon.sin() * obl.cos() - lat.tan() * obl.sin()).atan2(lon.cos());
    let dec = (lat.sin() * obl.cos() + lat.cos() * obl.sin() * lon.sin()).asin();
    (principal_angle(ra / RADEG), dec / RADEG)
}

/// Precess ecliptic coordinates between two equinoxes.
///
/// Implements the rigorous rotation through the accumulated precession
/// angles η, Π and p; both directions work, the angles are evaluated for
/// the `from` → `to` interval.
pub fn precess_ecliptic(
    lon: Degree,
    lat: Degree,
    from: Epoch,
    to: Epoch,
) -> (Degree, Degree) {
    let t_big = from.julian_centuries();
    let t = (to - from) / 36525.0;

    let eta = ((47.0029 - (0.06603 - 0.000598 * t_big) * t_big)
        + ((-0.03302 + 0.000598 * t_big) + 0.000060 * t) * t)
        * t
        / 3600.0
        * RADEG;
    let pi_angle = (174.876384
        + (3289.4789 * t_big + 0.60622 * t_big * t_big) / 3600.0
        - ((869.8089 + 0.50491 * t_big) * t + 0.03536 * t * t) / 3600.0)
        * RADEG;
    let p = ((5029.0966 + (2.22226 - 0.000042 * t_big) * t_big)
        + ((1.11113 - 0.000042 * t_big) - 0.000006 * t) * t)
        * t
        / 3600.0
        * RADEG;

    let (lon, lat) = (lon * RADEG, lat * RADEG);

    let a = eta.cos() * lat.cos() * (pi_angle - lon).sin() - eta.sin() * lat.sin();
    let b = lat.cos() * (pi_angle - lon).cos();
    let c = eta.cos() * lat.sin() + eta.sin() * lat.cos() * (pi_angle - lon).sin();

    let new_lon = principal_angle((p + pi_angle - a.atan2(b)) / RADEG);
    let new_lat = c.asin() / RADEG;
    (new_lon, new_lat)
}

/// Heliocentric position of a planet, reduced to the requested equinox.
pub fn heliocentric(planet: Planet, epoch: Epoch, equinox: Equinox) -> HeliocentricPosition {
    let pos = heliocentric_position(planet_tables(planet), epoch);
    match equinox {
        Equinox::MeanOfDate => pos,
        Equinox::J2000 => {
            let reference = Epoch::from_jde(J2000);
            let (lon, lat) = precess_ecliptic(pos.longitude, pos.latitude, epoch, reference);
            HeliocentricPosition {
                longitude: lon,
                latitude: lat,
                radius: pos.radius,
            }
        }
    }
}

/// Elongation and phase angle from the heliocentric/geocentric triangle.
///
/// `r` is the planet's heliocentric radius, `delta` the Earth-planet
/// distance and `rr` the Earth's heliocentric radius. Both results are
/// folded into [0°, 180°].
pub(crate) fn elongation_phase(
    r: AstronomicalUnit,
    delta: AstronomicalUnit,
    rr: AstronomicalUnit,
) -> (Degree, Degree) {
    let cos_elong = ((rr * rr + delta * delta - r * r) / (2.0 * rr * delta)).clamp(-1.0, 1.0);
    let cos_phase = ((r * r + delta * delta - rr * rr) / (2.0 * r * delta)).clamp(-1.0, 1.0);
    (cos_elong.acos() / RADEG, cos_phase.acos() / RADEG)
}

/// Combine the heliocentric positions of a body and of the Earth into
/// geometric geocentric coordinates, with no light-time, aberration or
/// nutation applied.
///
/// Both positions must refer to the same epoch and equinox; `obl` is the
/// obliquity used for the equatorial conversion.
pub fn geocentric_geometry(
    body: &HeliocentricPosition,
    earth: &HeliocentricPosition,
    obl: Degree,
) -> GeocentricGeometry {
    let body_rect = rectangular(body);
    let earth_rect = rectangular(earth);
    let relative = body_rect - earth_rect;

    let delta = relative.norm();
    let (lon, lat) = spherical(&relative);
    let (ra, dec) = ecliptic_to_equatorial(lon, lat, obl);
    let (elongation, phase_angle) = elongation_phase(body.radius, delta, earth.radius);

    GeocentricGeometry {
        longitude: lon,
        latitude: lat,
        distance: delta,
        right_ascension: ra,
        declination: dec,
        elongation,
        phase_angle,
        planet_radius: body.radius,
        earth_radius: earth.radius,
    }
}

/// Geocentric ecliptic longitude without light-time or aberration.
///
/// Used by the event solver, where only differences of longitudes matter and
/// the apparent corrections nearly cancel.
pub(crate) fn geometric_longitude(planet: Planet, epoch: Epoch) -> Result<Degree, SynodicError> {
    if planet == Planet::Earth {
        return Err(SynodicError::UnsupportedQuery {
            planet,
            query: "geocentric longitude".to_string(),
        });
    }
    let earth = rectangular(&heliocentric_position(planet_tables(Planet::Earth), epoch));
    let body = rectangular(&heliocentric_position(planet_tables(planet), epoch));
    let (lon, _) = spherical(&(body - earth));
    Ok(lon)
}

/// Earth's heliocentric velocity from a central difference of the series.
fn earth_velocity(epoch: Epoch) -> Vector3<f64> {
    const STEP: f64 = 0.01;
    let after = rectangular(&heliocentric_position(
        planet_tables(Planet::Earth),
        epoch + STEP,
    ));
    let before = rectangular(&heliocentric_position(
        planet_tables(Planet::Earth),
        epoch - STEP,
    ));
    (after - before) / (2.0 * STEP)
}

/// Apparent geocentric position of a planet.
///
/// The planet is antedated by the light travel time (fixed-point iteration on
/// τ = Δ/c), the annual aberration is applied as the velocity-vector
/// correction `x - Δ·v/c`, and the nutation in longitude is added before the
/// equatorial conversion with the true obliquity.
pub fn geocentric(planet: Planet, epoch: Epoch) -> Result<GeocentricGeometry, SynodicError> {
    if planet == Planet::Earth {
        return Err(SynodicError::UnsupportedQuery {
            planet,
            query: "geocentric position".to_string(),
        });
    }

    const MAX_PASSES: usize = 10;
    const TOLERANCE: f64 = 1e-6;

    let earth = rectangular(&heliocentric_position(planet_tables(Planet::Earth), epoch));
    let earth_radius = earth.norm();

    let mut tau = 0.0;
    let mut delta = f64::MAX;
    let mut relative = Vector3::zeros();
    let mut planet_radius = 0.0;
    let mut converged = false;

    for _ in 0..MAX_PASSES {
        let body = rectangular(&heliocentric_position(
            planet_tables(planet),
            epoch - tau,
        ));
        relative = body - earth;
        planet_radius = body.norm();

        let new_delta = relative.norm();
        if (new_delta - delta).abs() < TOLERANCE {
            delta = new_delta;
            converged = true;
            break;
        }
        delta = new_delta;
        tau = delta / VLIGHT_AU;
    }
    if !converged {
        return Err(SynodicError::ConvergenceError {
            context: "light-time iteration".to_string(),
            iterations: MAX_PASSES,
        });
    }

    let aberrated = relative - earth_velocity(epoch) * (delta / VLIGHT_AU);
    let (mut lon, lat) = spherical(&aberrated);

    let (dpsi, deps) = nutation(epoch);
    lon = principal_angle(lon + dpsi / 3600.0);
    let true_obliquity = obliquity(epoch) + deps / 3600.0;

    let (ra, dec) = ecliptic_to_equatorial(lon, lat, true_obliquity);
    let (elongation, phase_angle) = elongation_phase(planet_radius, delta, earth_radius);

    Ok(GeocentricGeometry {
        longitude: lon,
        latitude: lat,
        distance: delta,
        right_ascension: ra,
        declination: dec,
        elongation,
        phase_angle,
        planet_radius,
        earth_radius,
    })
}

#[cfg(test)]
mod frame_test {
    use super::*;

    #[test]
    fn test_obliquity_j2000() {
        let eps = obliquity(Epoch::from_jde(J2000));
        assert!((eps - 23.43929111).abs() < 1e-9);
    }

    #[test]
    fn test_obliquity_1987() {
        // 1987 April 10.0 TT, JDE 2446895.5
        let eps = obliquity(Epoch::from_jde(2446895.5));
        assert!((eps - 23.440946).abs() < 1e-5);
    }

    #[test]
    fn test_nutation_1987() {
        let (dpsi, deps) = nutation(Epoch::from_jde(2446895.5));
        assert!((dpsi - (-3.788)).abs() < 0.5);
        assert!((deps - 9.443).abs() < 0.5);
    }

    #[test]
    fn test_ecliptic_to_equatorial() {
        // Meeus example 13.a: Pollux from ecliptic back to equatorial.
        let (ra, dec) = ecliptic_to_equatorial(113.215630, 6.684170, 23.4392911);
        assert!((ra - 116.328942).abs() < 1e-5);
        assert!((dec - 28.026183).abs() < 1e-5);
    }

    #[test]
    fn test_precession_identity() {
        let epoch = Epoch::from_jde(2448976.5);
        let (lon, lat) = precess_ecliptic(123.456, -2.5, epoch, epoch);
        assert!((lon - 123.456).abs() < 1e-9);
        assert!((lat - (-2.5)).abs() < 1e-9);
    }

    #[test]
    fn test_precession_rate() {
        // General precession moves ecliptic longitudes by about 1.397 deg
        // per century; going back to J2000 from a later date reduces them.
        let from = Epoch::from_jde(J2000 + 36525.0);
        let to = Epoch::from_jde(J2000);
        let (lon, _) = precess_ecliptic(100.0, 0.0, from, to);
        let shift = lon - 100.0;
        assert!((-1.5..-1.3).contains(&shift), "shift was {shift}");
    }

    #[test]
    fn test_elongation_phase_bounds() {
        let (elong, phase) = elongation_phase(0.72, 1.2, 1.0);
        assert!((0.0..=180.0).contains(&elong));
        assert!((0.0..=180.0).contains(&phase));

        // Degenerate alignment clamps instead of producing NaN.
        let (elong, _) = elongation_phase(0.5, 0.5, 1.0);
        assert!(elong.is_finite());
    }

    #[test]
    fn test_geocentric_geometry_conjunction_line() {
        // Body and Earth on opposite sides of the Sun, all in the ecliptic:
        // the body sits at the Sun's geocentric longitude with zero
        // elongation and zero phase angle.
        let body = HeliocentricPosition {
            longitude: 90.0,
            latitude: 0.0,
            radius: 2.0,
        };
        let earth = HeliocentricPosition {
            longitude: 270.0,
            latitude: 0.0,
            radius: 1.0,
        };
        let geometry = geocentric_geometry(&body, &earth, 23.4392911);

        assert!((geometry.longitude - 90.0).abs() < 1e-9);
        assert!((geometry.distance - 3.0).abs() < 1e-12);
        assert!(geometry.elongation.abs() < 1e-6);
        assert!(geometry.phase_angle.abs() < 1e-6);
        // At lambda = 90 deg the declination equals the obliquity.
        assert!((geometry.right_ascension - 90.0).abs() < 1e-9);
        assert!((geometry.declination - 23.4392911).abs() < 1e-9);
    }

    #[test]
    fn test_geocentric_rejects_earth() {
        let err = geocentric(Planet::Earth, Epoch::from_jde(2448976.5)).unwrap_err();
        assert!(matches!(err, SynodicError::UnsupportedQuery { .. }));
    }
}
