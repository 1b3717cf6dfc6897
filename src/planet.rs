//! The planet facade: positions, apparent geometry, synodic events and
//! photometry behind a single enum.

use serde::{Deserialize, Serialize};

use crate::angle::wrap_angle;
use crate::constants::{
    AstronomicalUnit, Degree, ELONGATION_OFFSETS, ORBITAL_PERIODS, STATION_OFFSETS,
    SYNODIC_PERIODS,
};
use crate::elements::{mean_elements, mean_elements_j2000, OrbitalElements};
use crate::epoch::Epoch;
use crate::events::{refine_extremum, refine_root};
use crate::frame::{self, Equinox, GeocentricGeometry};
use crate::photometry;
use crate::series::{heliocentric_position, HeliocentricPosition};
use crate::synodic_errors::SynodicError;
use crate::vsop87::planet_tables;

/// The eight major planets, ordered by distance from the Sun.
///
/// The discriminants index the per-planet constant tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// Search window scan resolution.
const SCAN_STEPS: usize = 288;

impl Planet {
    /// Mercury and Venus orbit inside the Earth's orbit.
    pub fn is_inner(self) -> bool {
        matches!(self, Planet::Mercury | Planet::Venus)
    }

    /// Mean synodic period with the Earth, in days.
    pub fn synodic_period(self) -> f64 {
        SYNODIC_PERIODS[self as usize]
    }

    /// Mean sidereal orbital period, in days.
    pub fn orbital_period(self) -> f64 {
        ORBITAL_PERIODS[self as usize]
    }

    fn require_inner(self, query: &str) -> Result<(), SynodicError> {
        if self.is_inner() {
            Ok(())
        } else {
            Err(SynodicError::UnsupportedQuery {
                planet: self,
                query: query.to_string(),
            })
        }
    }

    fn require_outer(self, query: &str) -> Result<(), SynodicError> {
        if self.is_inner() || self == Planet::Earth {
            Err(SynodicError::UnsupportedQuery {
                planet: self,
                query: query.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Heliocentric ecliptic position, reduced to the requested equinox.
    pub fn heliocentric_position(self, epoch: Epoch, equinox: Equinox) -> HeliocentricPosition {
        frame::heliocentric(self, epoch, equinox)
    }

    /// Mean orbital elements referred to the mean equinox of date.
    pub fn mean_elements(self, epoch: Epoch) -> OrbitalElements {
        mean_elements(self, epoch)
    }

    /// Mean orbital elements referred to the standard equinox J2000.0.
    pub fn mean_elements_j2000(self, epoch: Epoch) -> OrbitalElements {
        mean_elements_j2000(self, epoch)
    }

    /// Apparent geocentric position and phase geometry.
    pub fn geocentric(self, epoch: Epoch) -> Result<GeocentricGeometry, SynodicError> {
        frame::geocentric(self, epoch)
    }

    /// Illuminated fraction of the disk as seen from the Earth.
    pub fn illuminated_fraction(self, epoch: Epoch) -> Result<f64, SynodicError> {
        let geometry = self.geocentric(epoch)?;
        Ok(photometry::illuminated_fraction(geometry.phase_angle))
    }

    /// Apparent visual magnitude.
    pub fn magnitude(self, epoch: Epoch) -> Result<f64, SynodicError> {
        let geometry = self.geocentric(epoch)?;
        photometry::magnitude(
            self,
            geometry.planet_radius,
            geometry.distance,
            geometry.phase_angle,
        )
    }

    fn raw(self, epoch: Epoch) -> HeliocentricPosition {
        heliocentric_position(planet_tables(self), epoch)
    }

    /// Difference of heliocentric longitudes with the Earth, shifted by
    /// `offset` and wrapped to (-180, 180].
    fn relative_longitude(self, epoch: Epoch, offset: Degree) -> f64 {
        let planet = self.raw(epoch).longitude;
        let earth = Planet::Earth.raw(epoch).longitude;
        wrap_angle(planet - earth - offset)
    }

    fn alignment(self, guess: Epoch, offset: Degree) -> Result<Epoch, SynodicError> {
        let f = |t: Epoch| Ok(self.relative_longitude(t, offset));
        let seed = nearest_crossing(&f, guess, self.synodic_period(), None)?;
        refine_root(&f, seed, 1.0)
    }

    /// Inferior conjunction nearest to `guess`. Inner planets only.
    pub fn inferior_conjunction(self, guess: Epoch) -> Result<Epoch, SynodicError> {
        self.require_inner("inferior conjunction")?;
        self.alignment(guess, 0.0)
    }

    /// Superior conjunction nearest to `guess`. Inner planets only.
    pub fn superior_conjunction(self, guess: Epoch) -> Result<Epoch, SynodicError> {
        self.require_inner("superior conjunction")?;
        self.alignment(guess, 180.0)
    }

    /// Conjunction with the Sun nearest to `guess`. Outer planets only.
    pub fn conjunction(self, guess: Epoch) -> Result<Epoch, SynodicError> {
        self.require_outer("conjunction")?;
        self.alignment(guess, 180.0)
    }

    /// Opposition nearest to `guess`. Outer planets only.
    pub fn opposition(self, guess: Epoch) -> Result<Epoch, SynodicError> {
        self.require_outer("opposition")?;
        self.alignment(guess, 0.0)
    }

    /// Angular separation from the Sun, from the geometric triangle.
    fn elongation_at(self, epoch: Epoch) -> Degree {
        let earth = frame::rectangular(&Planet::Earth.raw(epoch));
        let body = frame::rectangular(&self.raw(epoch));
        let delta = (body - earth).norm();
        frame::elongation_phase(body.norm(), delta, earth.norm()).0
    }

    fn greatest_elongation(
        self,
        guess: Epoch,
        eastern: bool,
    ) -> Result<(Epoch, Degree), SynodicError> {
        let anchor = self.inferior_conjunction(guess)?;
        let offset = ELONGATION_OFFSETS[self as usize];
        // Eastern elongation precedes the inferior conjunction, western
        // follows it.
        let seed = if eastern { anchor - offset } else { anchor + offset };

        let f = |t: Epoch| Ok(self.elongation_at(t));
        retry_extremum(&f, seed, 1.0, true)
    }

    /// Greatest eastern elongation nearest to `guess`, with its value in
    /// degrees. Inner planets only.
    pub fn eastern_elongation(self, guess: Epoch) -> Result<(Epoch, Degree), SynodicError> {
        self.require_inner("eastern elongation")?;
        self.greatest_elongation(guess, true)
    }

    /// Greatest western elongation nearest to `guess`, with its value in
    /// degrees. Inner planets only.
    pub fn western_elongation(self, guess: Epoch) -> Result<(Epoch, Degree), SynodicError> {
        self.require_inner("western elongation")?;
        self.greatest_elongation(guess, false)
    }

    fn station(self, guess: Epoch, first: bool) -> Result<Epoch, SynodicError> {
        if self == Planet::Earth {
            return Err(SynodicError::UnsupportedQuery {
                planet: self,
                query: "station".to_string(),
            });
        }
        let anchor = if self.is_inner() {
            self.inferior_conjunction(guess)?
        } else {
            self.opposition(guess)?
        };
        let offset = STATION_OFFSETS[self as usize];
        let seed = if first { anchor - offset } else { anchor + offset };

        // Measure the longitude against its value at the seed so that the
        // samples never straddle the 0/360 wrap.
        let reference = frame::geometric_longitude(self, seed)?;
        let f = |t: Epoch| Ok(wrap_angle(frame::geometric_longitude(self, t)? - reference));

        // The first station ends direct motion, so it sits at a maximum of
        // the geocentric longitude; the second at a minimum.
        let (at, _) = retry_extremum(&f, seed, 1.0, first)?;
        Ok(at)
    }

    /// First station (direct to retrograde) nearest to `guess`.
    pub fn station_1(self, guess: Epoch) -> Result<Epoch, SynodicError> {
        self.station(guess, true)
    }

    /// Second station (retrograde to direct) nearest to `guess`.
    pub fn station_2(self, guess: Epoch) -> Result<Epoch, SynodicError> {
        self.station(guess, false)
    }

    fn apsis(self, guess: Epoch, maximum: bool) -> Result<(Epoch, AstronomicalUnit), SynodicError> {
        let period = self.orbital_period();
        let f = |t: Epoch| Ok(self.raw(t).radius);
        let seed = scan_extremum(&f, guess, period, maximum)?;
        refine_extremum(&f, seed, period / 360.0, maximum)
    }

    /// Perihelion passage nearest to `guess`, with the radius in AU.
    pub fn perihelion(self, guess: Epoch) -> Result<(Epoch, AstronomicalUnit), SynodicError> {
        self.apsis(guess, false)
    }

    /// Aphelion passage nearest to `guess`, with the radius in AU.
    pub fn aphelion(self, guess: Epoch) -> Result<(Epoch, AstronomicalUnit), SynodicError> {
        self.apsis(guess, true)
    }

    /// Passage through the ecliptic plane nearest to `guess`.
    ///
    /// Returns the instant and the heliocentric radius at that instant.
    /// `ascending` selects the south-to-north crossing.
    pub fn node_passage(
        self,
        guess: Epoch,
        ascending: bool,
    ) -> Result<(Epoch, AstronomicalUnit), SynodicError> {
        let f = |t: Epoch| Ok(self.raw(t).latitude);
        let period = self.orbital_period();
        let seed = nearest_crossing(&f, guess, period, Some(ascending))?;
        let at = refine_root(&f, seed, (period / 360.0).max(0.25))?;
        Ok((at, self.raw(at).radius))
    }
}

/// Approximate location of the sign change of `f` nearest to `guess`.
///
/// The window spans 1.2 periods so that exactly one event of each kind falls
/// inside it. Samples beyond 90 in magnitude are skipped, which masks the
/// wrap discontinuity of longitude differences. `rising` restricts the
/// crossing direction, for node passages.
fn nearest_crossing<F>(
    f: &F,
    guess: Epoch,
    period: f64,
    rising: Option<bool>,
) -> Result<Epoch, SynodicError>
where
    F: Fn(Epoch) -> Result<f64, SynodicError>,
{
    let span = 1.2 * period;
    let dt = span / SCAN_STEPS as f64;
    let start = guess - span / 2.0;

    let mut best: Option<(f64, Epoch)> = None;
    let mut prev_t = start;
    let mut prev_y = f(start)?;

    for k in 1..=SCAN_STEPS {
        let t = start + dt * k as f64;
        let y = f(t)?;

        let crosses = prev_y.abs() < 90.0 && y.abs() < 90.0 && (prev_y <= 0.0) != (y <= 0.0);
        let direction_ok = match rising {
            None => true,
            Some(rising) => (y > prev_y) == rising,
        };
        if crosses && direction_ok {
            let mid = prev_t + dt / 2.0;
            let dist = (mid - guess).abs();
            if best.map_or(true, |(d, _)| dist < d) {
                best = Some((dist, mid));
            }
        }

        prev_t = t;
        prev_y = y;
    }

    best.map(|(_, t)| t)
        .ok_or_else(|| SynodicError::ConvergenceError {
            context: "no sign change inside the search window".to_string(),
            iterations: SCAN_STEPS,
        })
}

/// Sample one full window and return the epoch of the extreme sample.
fn scan_extremum<F>(
    f: &F,
    guess: Epoch,
    period: f64,
    maximum: bool,
) -> Result<Epoch, SynodicError>
where
    F: Fn(Epoch) -> Result<f64, SynodicError>,
{
    let span = 1.1 * period;
    let dt = span / SCAN_STEPS as f64;
    let start = guess - span / 2.0;

    let mut best_t = start;
    let mut best_y = f(start)?;
    for k in 1..=SCAN_STEPS {
        let t = start + dt * k as f64;
        let y = f(t)?;
        if (y > best_y) == maximum {
            best_t = t;
            best_y = y;
        }
    }
    Ok(best_t)
}

/// Run the extremum refinement, nudging the seed when the curvature check
/// trips at the first attempt.
fn retry_extremum<F>(
    f: &F,
    seed: Epoch,
    step: f64,
    maximum: bool,
) -> Result<(Epoch, f64), SynodicError>
where
    F: Fn(Epoch) -> Result<f64, SynodicError>,
{
    let mut last = None;
    for shift in [0.0, -7.0, 7.0] {
        match refine_extremum(f, seed + shift, step, maximum) {
            Ok(found) => return Ok(found),
            Err(e) => last = Some(e),
        }
    }
    Err(last.unwrap_or(SynodicError::ConvergenceError {
        context: "extremum search".to_string(),
        iterations: 0,
    }))
}

#[cfg(test)]
mod planet_test {
    use super::*;

    #[test]
    fn test_inner_outer_split() {
        assert!(Planet::Mercury.is_inner());
        assert!(Planet::Venus.is_inner());
        assert!(!Planet::Earth.is_inner());
        assert!(!Planet::Saturn.is_inner());
    }

    #[test]
    fn test_synodic_periods() {
        assert!((Planet::Venus.synodic_period() - 583.92).abs() < 1e-9);
        assert!(Planet::Earth.synodic_period().is_nan());
    }

    #[test]
    fn test_unsupported_queries() {
        let t = Epoch::from_jde(2_451_545.0);
        assert!(matches!(
            Planet::Saturn.inferior_conjunction(t),
            Err(SynodicError::UnsupportedQuery { .. })
        ));
        assert!(matches!(
            Planet::Venus.opposition(t),
            Err(SynodicError::UnsupportedQuery { .. })
        ));
        assert!(matches!(
            Planet::Earth.conjunction(t),
            Err(SynodicError::UnsupportedQuery { .. })
        ));
        assert!(matches!(
            Planet::Earth.station_1(t),
            Err(SynodicError::UnsupportedQuery { .. })
        ));
        assert!(matches!(
            Planet::Mars.eastern_elongation(t),
            Err(SynodicError::UnsupportedQuery { .. })
        ));
    }

    #[test]
    fn test_nearest_crossing_picks_closest() {
        // Sine with zeros every 50 days; the nearest one to the guess wins.
        let f = |t: Epoch| Ok(((t.jde() - 2_451_545.0) * std::f64::consts::PI / 50.0).sin());
        let guess = Epoch::from_jde(2_451_545.0 + 141.0);
        let seed = nearest_crossing(&f, guess, 100.0, None).unwrap();
        assert!((seed.jde() - (2_451_545.0 + 150.0)).abs() < 2.0);
    }

    #[test]
    fn test_nearest_crossing_direction_filter() {
        let f = |t: Epoch| Ok(((t.jde() - 2_451_545.0) * std::f64::consts::PI / 50.0).sin());
        let guess = Epoch::from_jde(2_451_545.0 + 141.0);
        // Rising crossings sit at multiples of 100 days.
        let seed = nearest_crossing(&f, guess, 100.0, Some(true)).unwrap();
        assert!((seed.jde() - (2_451_545.0 + 100.0)).abs() < 2.0);
    }
}
