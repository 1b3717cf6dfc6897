//! Iterative refinement of event instants.
//!
//! Both searches sample the target function at three equally spaced instants,
//! fit a parabola through the samples and step to its root or vertex until
//! the step falls under the tolerance. The function is only ever evaluated,
//! never differentiated, so any geocentric or heliocentric quantity works.

use crate::epoch::Epoch;
use crate::synodic_errors::SynodicError;

const MAX_ITER: usize = 50;
const ROOT_TOLERANCE: f64 = 1e-5;
const EXTREMUM_TOLERANCE: f64 = 1e-4;

/// Parabola through (-h, y1), (0, y2), (h, y3), as (a, b, c) of a·x² + b·x + c.
fn quadratic_fit(y1: f64, y2: f64, y3: f64, h: f64) -> (f64, f64, f64) {
    let a = (y1 - 2.0 * y2 + y3) / (2.0 * h * h);
    let b = (y3 - y1) / (2.0 * h);
    (a, b, y2)
}

fn sample3<F>(f: &F, t: Epoch, h: f64) -> Result<(f64, f64, f64), SynodicError>
where
    F: Fn(Epoch) -> Result<f64, SynodicError>,
{
    Ok((f(t - h)?, f(t)?, f(t + h)?))
}

/// Find a zero of `f` near `guess`, to 1e-5 day.
///
/// `step` is the sampling half-width in days; it stays fixed across
/// iterations and should be small against the event's period.
pub(crate) fn refine_root<F>(f: F, guess: Epoch, step: f64) -> Result<Epoch, SynodicError>
where
    F: Fn(Epoch) -> Result<f64, SynodicError>,
{
    let mut t = guess;

    for _ in 0..MAX_ITER {
        let (y1, y2, y3) = sample3(&f, t, step)?;
        let (a, b, c) = quadratic_fit(y1, y2, y3, step);

        let dt = if a.abs() < 1e-12 {
            if b.abs() < 1e-12 {
                return Err(SynodicError::ConvergenceError {
                    context: "root search on a flat function".to_string(),
                    iterations: MAX_ITER,
                });
            }
            -c / b
        } else {
            let disc = b * b - 4.0 * a * c;
            if disc < 0.0 {
                return Err(SynodicError::ConvergenceError {
                    context: "quadratic fit lost the root".to_string(),
                    iterations: MAX_ITER,
                });
            }
            let sq = disc.sqrt();
            let r1 = (-b + sq) / (2.0 * a);
            let r2 = (-b - sq) / (2.0 * a);
            if r1.abs() < r2.abs() {
                r1
            } else {
                r2
            }
        };

        t = t + dt;
        if dt.abs() < ROOT_TOLERANCE {
            return Ok(t);
        }
    }

    Err(SynodicError::ConvergenceError {
        context: "root search".to_string(),
        iterations: MAX_ITER,
    })
}

/// Find an extremum of `f` near `guess`, to 1e-4 day.
///
/// `maximum` selects the expected curvature; if the fitted parabola bends the
/// other way the search has slipped towards the wrong extremum and fails
/// rather than converge to it.
pub(crate) fn refine_extremum<F>(
    f: F,
    guess: Epoch,
    step: f64,
    maximum: bool,
) -> Result<(Epoch, f64), SynodicError>
where
    F: Fn(Epoch) -> Result<f64, SynodicError>,
{
    let mut t = guess;

    for _ in 0..MAX_ITER {
        let (y1, y2, y3) = sample3(&f, t, step)?;
        let (a, b, c) = quadratic_fit(y1, y2, y3, step);

        if a == 0.0 || (a < 0.0) != maximum {
            return Err(SynodicError::ConvergenceError {
                context: "extremum search drifted to the wrong curvature".to_string(),
                iterations: MAX_ITER,
            });
        }

        let dt = -b / (2.0 * a);
        t = t + dt;
        if dt.abs() < EXTREMUM_TOLERANCE {
            let value = c - b * b / (4.0 * a);
            return Ok((t, value));
        }
    }

    Err(SynodicError::ConvergenceError {
        context: "extremum search".to_string(),
        iterations: MAX_ITER,
    })
}

#[cfg(test)]
mod events_test {
    use super::*;

    const T0: f64 = 2_451_545.0;

    #[test]
    fn test_refine_root_sine() {
        // Zero of sin at T0 + 100, slope ~0.02 per day.
        let f = |t: Epoch| Ok(((t.jde() - (T0 + 100.0)) * 0.02).sin());
        let root = refine_root(f, Epoch::from_jde(T0 + 93.0), 1.0).unwrap();
        assert!((root.jde() - (T0 + 100.0)).abs() < 1e-4);
    }

    #[test]
    fn test_refine_root_linear() {
        let f = |t: Epoch| Ok(0.5 * (t.jde() - (T0 + 3.25)));
        let root = refine_root(f, Epoch::from_jde(T0), 1.0).unwrap();
        assert!((root.jde() - (T0 + 3.25)).abs() < 1e-4);
    }

    #[test]
    fn test_refine_root_no_root() {
        let f = |t: Epoch| {
            let x = t.jde() - T0;
            Ok(1.0 + x * x)
        };
        let err = refine_root(f, Epoch::from_jde(T0), 1.0).unwrap_err();
        assert!(matches!(err, SynodicError::ConvergenceError { .. }));
    }

    #[test]
    fn test_refine_extremum_parabola() {
        let f = |t: Epoch| {
            let x = t.jde() - (T0 + 42.0);
            Ok(7.5 - 0.003 * x * x)
        };
        let (at, value) = refine_extremum(f, Epoch::from_jde(T0 + 30.0), 1.0, true).unwrap();
        assert!((at.jde() - (T0 + 42.0)).abs() < 1e-3);
        assert!((value - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_refine_extremum_cosine_minimum() {
        let f = |t: Epoch| Ok(((t.jde() - T0) * 0.05).cos());
        // Minimum of cos at phase pi, i.e. T0 + pi/0.05.
        let expected = T0 + std::f64::consts::PI / 0.05;
        let (at, value) = refine_extremum(f, Epoch::from_jde(expected - 5.0), 1.0, false).unwrap();
        assert!((at.jde() - expected).abs() < 1e-2);
        assert!((value - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn test_refine_extremum_wrong_curvature() {
        let f = |t: Epoch| {
            let x = t.jde() - T0;
            Ok(x * x)
        };
        let err = refine_extremum(f, Epoch::from_jde(T0 + 1.0), 1.0, true).unwrap_err();
        assert!(matches!(err, SynodicError::ConvergenceError { .. }));
    }
}
