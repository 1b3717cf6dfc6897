//! Instants on the TT scale, expressed as Julian Ephemeris Days.
//!
//! The whole crate computes in JDE (TT). Calendar input and output go through
//! [`hifitime`]; nothing here re-implements calendar arithmetic.

use std::ops::{Add, Sub};

use hifitime::{Epoch as CivilEpoch, TimeScale};
use serde::{Deserialize, Serialize};

use crate::constants::{DAYS_PER_CENTURY, DAYS_PER_MILLENNIUM, J2000, JDTOMJD, JulianDay, MJD};

/// A Julian Ephemeris Day on the TT scale.
///
/// Thin wrapper over `f64` days so that the computational APIs cannot be fed
/// a date in the wrong scale or format by accident.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Epoch(f64);

impl Epoch {
    /// Build an epoch from a raw Julian Ephemeris Day (TT).
    pub fn from_jde(jde: JulianDay) -> Self {
        Epoch(jde)
    }

    /// Build an epoch from a Modified Julian Date (TT).
    pub fn from_mjd(mjd: MJD) -> Self {
        Epoch(mjd + JDTOMJD)
    }

    /// Build an epoch from a proleptic Gregorian date with a fractional day,
    /// interpreted on the TT scale.
    ///
    /// Arguments
    /// ---------
    /// * `year`, `month`: calendar year and month
    /// * `day`: day of month with fraction, e.g. `20.5` for 12h TT
    pub fn from_gregorian(year: i32, month: u8, day: f64) -> Self {
        let whole = day.trunc();
        let fraction = day - whole;

        let hour = (fraction * 24.0).trunc();
        let minute = ((fraction * 24.0 - hour) * 60.0).trunc();
        let second = (((fraction * 24.0 - hour) * 60.0 - minute) * 60.0).trunc();
        let nano =
            ((((fraction * 24.0 - hour) * 60.0 - minute) * 60.0 - second) * 1e9).round() as u32;

        let civil = CivilEpoch::from_gregorian(
            year,
            month,
            whole as u8,
            hour as u8,
            minute as u8,
            second as u8,
            nano,
            TimeScale::TT,
        );
        Epoch(civil.to_mjd_tt_days() + JDTOMJD)
    }

    /// Julian Ephemeris Day (TT).
    pub fn jde(&self) -> JulianDay {
        self.0
    }

    /// Modified Julian Date (TT).
    pub fn mjd(&self) -> MJD {
        self.0 - JDTOMJD
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn julian_centuries(&self) -> f64 {
        (self.0 - J2000) / DAYS_PER_CENTURY
    }

    /// Julian millennia elapsed since J2000.0.
    pub fn julian_millennia(&self) -> f64 {
        (self.0 - J2000) / DAYS_PER_MILLENNIUM
    }

    /// Bridge to [`hifitime::Epoch`] for calendar output and scale changes.
    pub fn to_hifitime(&self) -> CivilEpoch {
        CivilEpoch::from_mjd_in_time_scale(self.mjd(), TimeScale::TT)
    }
}

impl Add<f64> for Epoch {
    type Output = Epoch;

    /// Offset the epoch by a number of days.
    fn add(self, days: f64) -> Epoch {
        Epoch(self.0 + days)
    }
}

impl Sub<f64> for Epoch {
    type Output = Epoch;

    fn sub(self, days: f64) -> Epoch {
        Epoch(self.0 - days)
    }
}

impl Sub<Epoch> for Epoch {
    type Output = f64;

    /// Elapsed days between two epochs.
    fn sub(self, other: Epoch) -> f64 {
        self.0 - other.0
    }
}

#[cfg(test)]
mod epoch_test {
    use super::*;

    #[test]
    fn test_from_gregorian() {
        let epoch = Epoch::from_gregorian(1992, 12, 20.0);
        assert_eq!(epoch.jde(), 2448976.5);

        let epoch = Epoch::from_gregorian(2065, 6, 24.0);
        assert_eq!(epoch.jde(), 2475460.5);

        let epoch = Epoch::from_gregorian(2000, 1, 1.5);
        assert_eq!(epoch.jde(), 2451545.0);
    }

    #[test]
    fn test_julian_centuries() {
        let epoch = Epoch::from_gregorian(2065, 6, 24.0);
        assert!((epoch.julian_centuries() - 0.6547707049).abs() < 1e-8);

        assert_eq!(Epoch::from_jde(J2000).julian_centuries(), 0.0);
    }

    #[test]
    fn test_mjd_roundtrip() {
        let epoch = Epoch::from_mjd(51544.5);
        assert_eq!(epoch.jde(), J2000);
        assert_eq!(epoch.mjd(), 51544.5);
    }

    #[test]
    fn test_arithmetic() {
        let a = Epoch::from_jde(2448976.5);
        let b = a + 10.0;
        assert_eq!(b.jde(), 2448986.5);
        assert_eq!(b - a, 10.0);
        assert_eq!((b - 10.0).jde(), a.jde());
    }

    #[test]
    fn test_hifitime_bridge() {
        let epoch = Epoch::from_gregorian(1992, 12, 20.0);
        assert_eq!(epoch.to_hifitime().to_mjd_tt_days(), epoch.mjd());
    }
}
