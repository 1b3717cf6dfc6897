//! Illuminated fraction and visual magnitudes.

use crate::constants::{AstronomicalUnit, Degree, RADEG};
use crate::planet::Planet;
use crate::synodic_errors::SynodicError;

/// Illuminated fraction of the disk from the phase angle, in [0, 1].
pub fn illuminated_fraction(phase_angle: Degree) -> f64 {
    ((1.0 + (phase_angle * RADEG).cos()) / 2.0).clamp(0.0, 1.0)
}

/// Apparent visual magnitude from the Müller (1893) formulae.
///
/// `r` is the heliocentric and `delta` the geocentric distance in AU, the
/// phase angle `i` in degrees. For Jupiter outwards the phase term is
/// negligible from the Earth and only the distances enter.
pub fn magnitude(
    planet: Planet,
    r: AstronomicalUnit,
    delta: AstronomicalUnit,
    phase_angle: Degree,
) -> Result<f64, SynodicError> {
    if r <= 0.0 || delta <= 0.0 {
        return Err(SynodicError::InputDomain(format!(
            "non-positive distance r={r} delta={delta}"
        )));
    }

    let dist = 5.0 * (r * delta).log10();
    let i = phase_angle;

    match planet {
        Planet::Mercury => {
            let s = i - 50.0;
            Ok(1.16 + dist + 0.02838 * s + 0.0001023 * s * s)
        }
        Planet::Venus => Ok(-4.00 + dist + 0.01322 * i + 0.0000004247 * i * i * i),
        Planet::Earth => Err(SynodicError::UnsupportedQuery {
            planet,
            query: "visual magnitude".to_string(),
        }),
        Planet::Mars => Ok(-1.3 + dist + 0.01486 * i),
        Planet::Jupiter => Ok(-8.93 + dist),
        Planet::Saturn => Ok(-8.68 + dist),
        Planet::Uranus => Ok(-6.85 + dist),
        Planet::Neptune => Ok(-7.05 + dist),
    }
}

#[cfg(test)]
mod photometry_test {
    use super::*;

    #[test]
    fn test_illuminated_fraction_limits() {
        assert!((illuminated_fraction(0.0) - 1.0).abs() < 1e-12);
        assert!((illuminated_fraction(90.0) - 0.5).abs() < 1e-12);
        assert!(illuminated_fraction(180.0).abs() < 1e-12);
    }

    #[test]
    fn test_illuminated_fraction_venus_1992() {
        // Venus on 1992 December 20: phase angle 72.96 degrees.
        let k = illuminated_fraction(72.96);
        assert!((k - 0.647).abs() < 1e-3);
    }

    #[test]
    fn test_magnitude_venus() {
        // Meeus chapter 41: r = 0.724604, delta = 0.910947, i = 72.96 deg.
        let m = magnitude(Planet::Venus, 0.724604, 0.910947, 72.96).unwrap();
        assert!((m - (-3.8)).abs() < 0.1);
    }

    #[test]
    fn test_magnitude_saturn_distance_only() {
        let near = magnitude(Planet::Saturn, 9.0, 8.0, 2.0).unwrap();
        let far = magnitude(Planet::Saturn, 9.0, 10.0, 2.0).unwrap();
        assert!(near < far);
        // Phase angle does not enter for the outer planets.
        let other = magnitude(Planet::Saturn, 9.0, 8.0, 5.0).unwrap();
        assert!((near - other).abs() < 1e-12);
    }

    #[test]
    fn test_magnitude_rejects_bad_input() {
        assert!(matches!(
            magnitude(Planet::Mars, -1.0, 1.0, 10.0),
            Err(SynodicError::InputDomain(_))
        ));
        assert!(matches!(
            magnitude(Planet::Earth, 1.0, 1.0, 10.0),
            Err(SynodicError::UnsupportedQuery { .. })
        ));
    }
}
