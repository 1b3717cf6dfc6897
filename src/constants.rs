//! # Constants and type definitions for Synodic
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `synodic` library.
//!
//! ## Overview
//!
//! - Astronomical constants (AU, speed of light, J2000.0 epoch)
//! - Unit conversions (degrees ↔ radians, JD ↔ MJD)
//! - Core type aliases used across the crate
//! - Per-planet period constants used to seed event searches
//!
//! These definitions are used by all main modules, including the series evaluator,
//! frame transforms and the event solver.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// JDE of J2000.0 (2000-01-01 12:00:00 TT)
pub const J2000: f64 = 2_451_545.0;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Days per Julian century
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Days per Julian millennium
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Speed of light in km/s
pub const VLIGHT: f64 = 2.99792458e5;

/// Speed of light in astronomical units per day
pub const VLIGHT_AU: f64 = VLIGHT / AU * SECONDS_PER_DAY;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian Ephemeris Day (TT scale, days)
pub type JulianDay = f64;
/// Modified Julian Date (days)
pub type MJD = f64;

// -------------------------------------------------------------------------------------------------
// Period constants for event-search seeding
// -------------------------------------------------------------------------------------------------

/// Mean synodic periods with respect to Earth, in days (Mercury..Neptune).
pub const SYNODIC_PERIODS: [f64; 8] = [
    115.88, 583.92, f64::NAN, 779.94, 398.88, 378.09, 369.66, 367.49,
];

/// Mean sidereal orbital periods, in days (Mercury..Neptune).
pub const ORBITAL_PERIODS: [f64; 8] = [
    87.969, 224.701, 365.256, 686.980, 4332.59, 10759.22, 30688.5, 60182.0,
];

/// Mean interval between an inferior conjunction and the adjacent greatest
/// elongation, in days (inner planets only).
pub const ELONGATION_OFFSETS: [f64; 2] = [22.0, 71.0];

/// Mean interval between the retrograde-loop anchor (inferior conjunction or
/// opposition) and the adjacent station in longitude, in days.
pub const STATION_OFFSETS: [f64; 8] = [11.0, 21.0, f64::NAN, 36.0, 60.0, 69.0, 76.0, 79.0];
