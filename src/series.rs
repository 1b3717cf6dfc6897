//! Evaluation of truncated VSOP87-type periodic series.
//!
//! Each heliocentric variable (ecliptic longitude, latitude, radius vector) is
//! a polynomial in τ (Julian millennia since J2000.0) whose coefficients are
//! sums of cosine terms. The tables live in [`crate::vsop87`]; this module
//! only knows how to evaluate them.

use serde::{Deserialize, Serialize};

use crate::angle::principal_angle;
use crate::constants::{AstronomicalUnit, Degree, RADEG};
use crate::epoch::Epoch;

/// A single cosine term `A·cos(φ + ν·τ)`.
///
/// Amplitudes are stored in units of 1e-8 radians (longitude, latitude) or
/// 1e-8 AU (radius); phases in radians; frequencies in radians per Julian
/// millennium.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicTerm {
    pub amplitude: f64,
    pub phase: f64,
    pub frequency: f64,
}

/// Shorthand constructor used by the coefficient tables.
pub const fn term(amplitude: f64, phase: f64, frequency: f64) -> PeriodicTerm {
    PeriodicTerm {
        amplitude,
        phase,
        frequency,
    }
}

/// The three series of one planet, each grouped by power of τ.
pub struct PlanetTables {
    pub longitude: &'static [&'static [PeriodicTerm]],
    pub latitude: &'static [&'static [PeriodicTerm]],
    pub radius: &'static [&'static [PeriodicTerm]],
}

/// Heliocentric ecliptic spherical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeliocentricPosition {
    /// Ecliptic longitude in degrees, normalized to [0, 360)
    pub longitude: Degree,
    /// Ecliptic latitude in degrees
    pub latitude: Degree,
    /// Radius vector in astronomical units
    pub radius: AstronomicalUnit,
}

/// Sum a grouped series at the given τ.
///
/// Returns `Σ_k τ^k Σ_i A·cos(φ + ν·τ)` scaled back from the 1e-8 storage
/// units.
pub fn evaluate_series(blocks: &[&[PeriodicTerm]], tau: f64) -> f64 {
    let mut total = 0.0;
    let mut tau_power = 1.0;
    for block in blocks {
        let partial: f64 = block
            .iter()
            .map(|t| t.amplitude * (t.phase + t.frequency * tau).cos())
            .sum();
        total += partial * tau_power;
        tau_power *= tau;
    }
    total * 1e-8
}

/// Heliocentric position for the mean ecliptic and equinox of date,
/// including the FK5 reduction of the raw series output.
pub fn heliocentric_position(tables: &PlanetTables, epoch: Epoch) -> HeliocentricPosition {
    let tau = epoch.julian_millennia();

    let mut longitude = evaluate_series(tables.longitude, tau) / RADEG;
    let mut latitude = evaluate_series(tables.latitude, tau) / RADEG;
    let radius = evaluate_series(tables.radius, tau);

    let (dl, db) = fk5_correction(longitude, latitude, epoch.julian_centuries());
    longitude += dl;
    latitude += db;

    HeliocentricPosition {
        longitude: principal_angle(longitude),
        latitude,
        radius,
    }
}

/// Reduction of VSOP dynamical coordinates to the FK5 frame.
///
/// Returns the (ΔL, ΔB) corrections in degrees. The effect is below 0.1″ and
/// only matters for the reference comparisons.
fn fk5_correction(longitude: Degree, latitude: Degree, centuries: f64) -> (Degree, Degree) {
    let lp = (longitude - 1.397 * centuries - 0.00031 * centuries * centuries) * RADEG;
    let b = latitude * RADEG;

    let dl = -0.09033 + 0.03916 * (lp.cos() + lp.sin()) * b.tan();
    let db = 0.03916 * (lp.cos() - lp.sin());
    (dl / 3600.0, db / 3600.0)
}

#[cfg(test)]
mod series_test {
    use super::*;

    #[test]
    fn test_constant_block() {
        let block = [term(1e8, 0.0, 0.0)];
        let grouped: [&[PeriodicTerm]; 1] = [&block];
        assert!((evaluate_series(&grouped, 0.37) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tau_scaling() {
        // A pure first-power block scales linearly with τ.
        let zero: [PeriodicTerm; 0] = [];
        let block = [term(2e8, 0.0, 0.0)];
        let grouped: [&[PeriodicTerm]; 2] = [&zero, &block];
        assert!((evaluate_series(&grouped, 0.5) - 1.0).abs() < 1e-12);
        assert!((evaluate_series(&grouped, -0.25) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_phase_argument() {
        let block = [term(1e8, std::f64::consts::FRAC_PI_2, 1.0)];
        let grouped: [&[PeriodicTerm]; 1] = [&block];
        // cos(π/2) = 0 at τ = 0
        assert!(evaluate_series(&grouped, 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_fk5_is_small() {
        let (dl, db) = fk5_correction(26.1, -2.6, -0.07);
        assert!(dl.abs() < 0.0001);
        assert!(db.abs() < 0.0001);
    }
}
