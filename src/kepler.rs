//! Kepler's equation for elliptical orbits.

use roots::{find_root_newton_raphson, SimpleConvergency};

use crate::constants::{Degree, RADEG};
use crate::synodic_errors::SynodicError;

/// Solve Kepler's equation `E - e·sin E = M` for the eccentric anomaly.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly M in degrees
/// * `eccentricity`: orbital eccentricity, must lie in [0, 1)
///
/// Return
/// ------
/// * the eccentric anomaly E in degrees
pub fn solve_kepler(mean_anomaly: Degree, eccentricity: f64) -> Result<Degree, SynodicError> {
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(SynodicError::InputDomain(format!(
            "eccentricity {eccentricity} outside [0, 1)"
        )));
    }

    let m = mean_anomaly * RADEG;
    let f = |e: f64| e - eccentricity * e.sin() - m;
    let df = |e: f64| 1.0 - eccentricity * e.cos();

    let mut tol = SimpleConvergency {
        eps: 1e-13,
        max_iter: 60,
    };

    // Starting from M + e·sin M keeps Newton stable up to high eccentricities.
    let x0 = m + eccentricity * m.sin();
    let ecc_anomaly = find_root_newton_raphson(x0, &f, &df, &mut tol)?;
    Ok(ecc_anomaly / RADEG)
}

/// True anomaly from the eccentric anomaly, both in degrees.
pub fn true_anomaly(ecc_anomaly: Degree, eccentricity: f64) -> Degree {
    let half = ecc_anomaly * RADEG / 2.0;
    let ratio = ((1.0 + eccentricity) / (1.0 - eccentricity)).sqrt();
    2.0 * (ratio * half.tan()).atan() / RADEG
}

#[cfg(test)]
mod kepler_test {
    use super::*;

    #[test]
    fn test_solve_kepler_reference() {
        // e = 0.1, M = 5 deg gives E = 5.554589 deg.
        let e = solve_kepler(5.0, 0.1).unwrap();
        assert!((e - 5.554589).abs() < 1e-5);
    }

    #[test]
    fn test_solve_kepler_circular() {
        let e = solve_kepler(123.456, 0.0).unwrap();
        assert!((e - 123.456).abs() < 1e-10);
    }

    #[test]
    fn test_solve_kepler_roundtrip() {
        for &ecc in &[0.0067, 0.2056, 0.5, 0.9] {
            for m in (-180..=180).step_by(30) {
                let m = m as f64;
                let e = solve_kepler(m, ecc).unwrap();
                let back = e - ecc * (e * RADEG).sin() / RADEG;
                assert!(
                    (back - m).abs() < 1e-8,
                    "roundtrip failed for M={m} e={ecc}"
                );
            }
        }
    }

    #[test]
    fn test_solve_kepler_domain() {
        assert!(matches!(
            solve_kepler(10.0, 1.2),
            Err(SynodicError::InputDomain(_))
        ));
        assert!(matches!(
            solve_kepler(10.0, -0.1),
            Err(SynodicError::InputDomain(_))
        ));
    }

    #[test]
    fn test_true_anomaly() {
        // At perihelion and aphelion the true and eccentric anomalies agree.
        assert!(true_anomaly(0.0, 0.3).abs() < 1e-12);
        assert!((true_anomaly(180.0, 0.3) - 180.0).abs() < 1e-9);
        // In between the true anomaly runs ahead of E.
        assert!(true_anomaly(90.0, 0.3) > 90.0);
    }
}
