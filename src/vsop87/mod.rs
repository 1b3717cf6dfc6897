//! Truncated VSOP87D coefficient tables, one submodule per planet.
//!
//! Amplitudes are in 1e-8 rad (longitude, latitude) or 1e-8 AU (radius),
//! phases in radians, frequencies in radians per Julian millennium. The
//! grouping by power of τ matches [`crate::series::evaluate_series`].

pub(crate) mod earth;
pub(crate) mod jupiter;
pub(crate) mod mars;
pub(crate) mod mercury;
pub(crate) mod neptune;
pub(crate) mod saturn;
pub(crate) mod uranus;
pub(crate) mod venus;

use crate::planet::Planet;
use crate::series::PlanetTables;

/// Series tables of one planet.
pub(crate) fn planet_tables(planet: Planet) -> &'static PlanetTables {
    match planet {
        Planet::Mercury => &mercury::TABLES,
        Planet::Venus => &venus::TABLES,
        Planet::Earth => &earth::TABLES,
        Planet::Mars => &mars::TABLES,
        Planet::Jupiter => &jupiter::TABLES,
        Planet::Saturn => &saturn::TABLES,
        Planet::Uranus => &uranus::TABLES,
        Planet::Neptune => &neptune::TABLES,
    }
}
