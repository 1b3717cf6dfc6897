//! Angle normalization helpers shared by the series evaluator and the event
//! solver.

use crate::constants::Degree;

/// Reduce an angle in degrees to the interval [0, 360).
pub fn principal_angle(angle: Degree) -> Degree {
    let reduced = angle.rem_euclid(360.0);
    if reduced == 360.0 {
        0.0
    } else {
        reduced
    }
}

/// Reduce an angle in degrees to the signed interval (-180, 180].
///
/// Used for longitude differences, where the sign carries the east/west
/// information and the discontinuity must stay opposite the zero.
pub fn wrap_angle(angle: Degree) -> Degree {
    let reduced = principal_angle(angle);
    if reduced > 180.0 {
        reduced - 360.0
    } else {
        reduced
    }
}

#[cfg(test)]
mod angle_test {
    use super::*;

    #[test]
    fn test_principal_angle() {
        assert_eq!(principal_angle(0.0), 0.0);
        assert_eq!(principal_angle(360.0), 0.0);
        assert_eq!(principal_angle(725.0), 5.0);
        assert_eq!(principal_angle(-30.0), 330.0);
        assert!((principal_angle(-719.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_angle() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert_eq!(wrap_angle(180.0), 180.0);
        assert_eq!(wrap_angle(181.0), -179.0);
        assert_eq!(wrap_angle(359.0), -1.0);
        assert_eq!(wrap_angle(-359.0), 1.0);
    }
}
