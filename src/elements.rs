//! Mean orbital elements as cubic polynomials in Julian centuries.
//!
//! Two sets per planet: one referred to the mean equinox of date, one to the
//! standard equinox J2000.0. The semimajor axis and eccentricity are shared.

use serde::{Deserialize, Serialize};

use crate::angle::{principal_angle, wrap_angle};
use crate::constants::{AstronomicalUnit, Degree};
use crate::epoch::Epoch;
use crate::planet::Planet;

/// Mean orbital elements of a planet at some epoch.
///
/// `perihelion_argument` is ω = ϖ - Ω wrapped to (-180°, 180°], so it can be
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub mean_longitude: Degree,
    pub semimajor_axis: AstronomicalUnit,
    pub eccentricity: f64,
    pub inclination: Degree,
    pub ascending_node: Degree,
    pub perihelion_argument: Degree,
}

/// Coefficients of one element set, each `[c0, c1, c2, c3]` in powers of T.
struct ElementPolynomials {
    mean_longitude: [f64; 4],
    semimajor_axis: [f64; 4],
    eccentricity: [f64; 4],
    inclination: [f64; 4],
    ascending_node: [f64; 4],
    perihelion_longitude: [f64; 4],
}

fn horner(poly: &[f64; 4], t: f64) -> f64 {
    ((poly[3] * t + poly[2]) * t + poly[1]) * t + poly[0]
}

fn interpolate(set: &ElementPolynomials, epoch: Epoch) -> OrbitalElements {
    let t = epoch.julian_centuries();

    let node = principal_angle(horner(&set.ascending_node, t));
    let perihelion = principal_angle(horner(&set.perihelion_longitude, t));

    OrbitalElements {
        mean_longitude: principal_angle(horner(&set.mean_longitude, t)),
        semimajor_axis: horner(&set.semimajor_axis, t),
        eccentricity: horner(&set.eccentricity, t),
        inclination: horner(&set.inclination, t),
        ascending_node: node,
        perihelion_argument: wrap_angle(perihelion - node),
    }
}

/// Elements referred to the mean equinox of date.
pub fn mean_elements(planet: Planet, epoch: Epoch) -> OrbitalElements {
    interpolate(&OF_DATE[planet as usize], epoch)
}

/// Elements referred to the standard equinox J2000.0.
pub fn mean_elements_j2000(planet: Planet, epoch: Epoch) -> OrbitalElements {
    interpolate(&J2000[planet as usize], epoch)
}

const OF_DATE: [ElementPolynomials; 8] = [
    // Mercury
    ElementPolynomials {
        mean_longitude: [252.250906, 149474.0722491, 0.00030397, 0.000000018],
        semimajor_axis: [0.387098310, 0.0, 0.0, 0.0],
        eccentricity: [0.20563175, 0.000020406, -0.0000000284, -0.00000000017],
        inclination: [7.004986, 0.0018215, -0.00001809, 0.000000053],
        ascending_node: [48.330893, 1.1861890, 0.00017587, 0.000000211],
        perihelion_longitude: [77.456119, 1.5564775, 0.00029589, 0.000000056],
    },
    // Venus
    ElementPolynomials {
        mean_longitude: [181.979801, 58519.2130302, 0.00031060, 0.000000015],
        semimajor_axis: [0.723329820, 0.0, 0.0, 0.0],
        eccentricity: [0.00677188, -0.000047766, 0.0000000975, 0.00000000044],
        inclination: [3.394662, 0.0010037, -0.00000088, -0.000000007],
        ascending_node: [76.679920, 0.9011190, 0.00040665, -0.000000080],
        perihelion_longitude: [131.563707, 1.4022188, -0.00107337, -0.000005315],
    },
    // Earth: the orbit defines the ecliptic of date, so the inclination is
    // zero and the node is left at zero by convention.
    ElementPolynomials {
        mean_longitude: [100.466449, 36000.7698231, 0.00030368, 0.000000021],
        semimajor_axis: [1.000001018, 0.0, 0.0, 0.0],
        eccentricity: [0.01670862, -0.000042037, -0.0000001236, 0.00000000004],
        inclination: [0.0, 0.0, 0.0, 0.0],
        ascending_node: [0.0, 0.0, 0.0, 0.0],
        perihelion_longitude: [102.937348, 1.7195269, 0.00045962, 0.000000499],
    },
    // Mars
    ElementPolynomials {
        mean_longitude: [355.433275, 19141.6964746, 0.00031097, 0.000000015],
        semimajor_axis: [1.523679342, 0.0, 0.0, 0.0],
        eccentricity: [0.09340062, 0.000090483, -0.0000000806, -0.00000000035],
        inclination: [1.849726, -0.0006010, 0.00001276, -0.000000006],
        ascending_node: [49.558093, 0.7720923, 0.00001605, 0.000002325],
        perihelion_longitude: [336.060234, 1.8410331, 0.00013515, 0.000000318],
    },
    // Jupiter
    ElementPolynomials {
        mean_longitude: [34.351484, 3036.3027889, 0.00022374, 0.000000025],
        semimajor_axis: [5.202603191, 0.0000001913, 0.0, 0.0],
        eccentricity: [0.04849485, 0.000163244, -0.0000004719, -0.00000000197],
        inclination: [1.303270, -0.0054966, 0.00000465, -0.000000004],
        ascending_node: [100.464441, 1.0209550, 0.00040117, 0.000000569],
        perihelion_longitude: [14.331309, 1.6126668, 0.00103127, -0.000004569],
    },
    // Saturn
    ElementPolynomials {
        mean_longitude: [50.077444, 1223.5110686, 0.00051908, -0.00000003],
        semimajor_axis: [9.554909192, -0.0000021390, 0.000000004, 0.0],
        eccentricity: [0.05554814, -0.000346641, -0.0000006436, 0.0000000034],
        inclination: [2.488878, -0.0037362, -0.00001519, 0.000000087],
        ascending_node: [113.665503, 0.8770880, -0.00012176, -0.000002249],
        perihelion_longitude: [93.057237, 1.9637613, 0.00083753, 0.000004928],
    },
    // Uranus
    ElementPolynomials {
        mean_longitude: [314.055005, 429.8640561, 0.00030390, 0.000000026],
        semimajor_axis: [19.218446062, -0.0000000372, 0.00000000098, 0.0],
        eccentricity: [0.04629590, -0.000027337, 0.0000000790, 0.00000000025],
        inclination: [0.773197, 0.0007744, 0.00003749, -0.000000092],
        ascending_node: [74.005957, 0.5211278, 0.00133947, 0.000018484],
        perihelion_longitude: [173.005291, 1.4863790, 0.00021406, 0.000000434],
    },
    // Neptune
    ElementPolynomials {
        mean_longitude: [304.348665, 219.8833092, 0.00030882, 0.000000018],
        semimajor_axis: [30.110386869, -0.0000001663, 0.00000000069, 0.0],
        eccentricity: [0.00898809, 0.000006408, -0.0000000008, -0.00000000005],
        inclination: [1.769952, -0.0093082, -0.00000708, 0.000000028],
        ascending_node: [131.784057, 1.1022057, 0.00026006, -0.000000636],
        perihelion_longitude: [48.123691, 1.4262677, 0.00037918, -0.000000003],
    },
];

const J2000: [ElementPolynomials; 8] = [
    // Mercury
    ElementPolynomials {
        mean_longitude: [252.250906, 149472.6746358, -0.00000535, 0.000000002],
        semimajor_axis: [0.387098310, 0.0, 0.0, 0.0],
        eccentricity: [0.20563175, 0.000020406, -0.0000000284, -0.00000000017],
        inclination: [7.004986, -0.0059516, 0.00000081, 0.000000041],
        ascending_node: [48.330893, -0.1254229, -0.00008833, -0.000000196],
        perihelion_longitude: [77.456119, 0.1588643, -0.00001343, 0.000000039],
    },
    // Venus
    ElementPolynomials {
        mean_longitude: [181.979801, 58517.8156760, 0.00000165, -0.000000002],
        semimajor_axis: [0.723329820, 0.0, 0.0, 0.0],
        eccentricity: [0.00677188, -0.000047766, 0.0000000975, 0.00000000044],
        inclination: [3.394662, -0.0008568, -0.00003244, 0.000000010],
        ascending_node: [76.679920, -0.2780080, -0.00014256, -0.000000198],
        perihelion_longitude: [131.563707, 0.0048646, -0.00138232, -0.000005332],
    },
    // Earth
    ElementPolynomials {
        mean_longitude: [100.466449, 35999.3728519, -0.00000568, 0.0],
        semimajor_axis: [1.000001018, 0.0, 0.0, 0.0],
        eccentricity: [0.01670862, -0.000042037, -0.0000001236, 0.00000000004],
        inclination: [0.0, 0.0130546, -0.00000931, -0.000000034],
        ascending_node: [174.873174, -0.2410908, 0.00004067, -0.000001327],
        perihelion_longitude: [102.937348, 0.3225557, 0.00015026, 0.000000478],
    },
    // Mars
    ElementPolynomials {
        mean_longitude: [355.433275, 19140.2993313, 0.00000261, -0.000000003],
        semimajor_axis: [1.523679342, 0.0, 0.0, 0.0],
        eccentricity: [0.09340062, 0.000090483, -0.0000000806, -0.00000000035],
        inclination: [1.849726, -0.0081479, -0.00002255, -0.000000027],
        ascending_node: [49.558093, -0.2949846, -0.00063993, -0.000002143],
        perihelion_longitude: [336.060234, 0.4438898, -0.00017321, 0.000000300],
    },
    // Jupiter
    ElementPolynomials {
        mean_longitude: [34.351484, 3034.9056746, -0.00008501, 0.000000004],
        semimajor_axis: [5.202603191, 0.0000001913, 0.0, 0.0],
        eccentricity: [0.04849485, 0.000163244, -0.0000004719, -0.00000000197],
        inclination: [1.303270, -0.0019872, 0.00003318, 0.000000092],
        ascending_node: [100.464441, 0.1766828, 0.00090387, -0.000007032],
        perihelion_longitude: [14.331309, 0.2155525, 0.00072252, -0.000004590],
    },
    // Saturn
    ElementPolynomials {
        mean_longitude: [50.077444, 1222.1137943, 0.00021004, -0.000000019],
        semimajor_axis: [9.554909192, -0.0000021390, 0.000000004, 0.0],
        eccentricity: [0.05554814, -0.000346641, -0.0000006436, 0.0000000034],
        inclination: [2.488878, 0.0025515, -0.00004903, 0.000000018],
        ascending_node: [113.665503, -0.2566649, -0.00018345, 0.000000357],
        perihelion_longitude: [93.057237, 0.5665496, 0.00052809, 0.000004882],
    },
    // Uranus
    ElementPolynomials {
        mean_longitude: [314.055005, 428.4669983, -0.00000486, 0.000000006],
        semimajor_axis: [19.218446062, -0.0000000372, 0.00000000098, 0.0],
        eccentricity: [0.04629590, -0.000027337, 0.0000000790, 0.00000000025],
        inclination: [0.773197, -0.0016869, 0.00000349, 0.000000016],
        ascending_node: [74.005957, 0.0741431, 0.00040539, 0.000000119],
        perihelion_longitude: [173.005291, 0.0893212, -0.00009470, 0.000000414],
    },
    // Neptune
    ElementPolynomials {
        mean_longitude: [304.348665, 218.4862002, 0.00000059, -0.000000002],
        semimajor_axis: [30.110386869, -0.0000001663, 0.00000000069, 0.0],
        eccentricity: [0.00898809, 0.000006408, -0.0000000008, -0.00000000005],
        inclination: [1.769952, 0.0002257, 0.00000023, 0.0],
        ascending_node: [131.784057, -0.0061651, -0.00000219, -0.000000078],
        perihelion_longitude: [48.123691, 0.0291587, 0.00007051, 0.0],
    },
];

#[cfg(test)]
mod elements_test {
    use super::*;

    #[test]
    fn test_saturn_mean_equinox_of_date() {
        let epoch = Epoch::from_gregorian(2065, 6, 24.0);
        let elem = mean_elements(Planet::Saturn, epoch);

        assert!((elem.mean_longitude - 131.196871).abs() < 1e-4);
        assert!((elem.semimajor_axis - 9.55490779).abs() < 1e-7);
        assert!((elem.eccentricity - 0.0553209).abs() < 1e-6);
        assert!((elem.inclination - 2.486426).abs() < 1e-5);
        assert!((elem.ascending_node - 114.23974).abs() < 1e-4);
        assert!((elem.perihelion_argument - (-19.896331)).abs() < 1e-4);
    }

    #[test]
    fn test_saturn_j2000() {
        let epoch = Epoch::from_gregorian(2065, 6, 24.0);
        let elem = mean_elements_j2000(Planet::Saturn, epoch);

        assert!((elem.mean_longitude - 130.28188).abs() < 2e-4);
        assert!((elem.semimajor_axis - 9.55490779).abs() < 1e-7);
        assert!((elem.eccentricity - 0.0553209).abs() < 1e-6);
        assert!((elem.inclination - 2.490529).abs() < 1e-5);
        assert!((elem.ascending_node - 113.49736).abs() < 1e-4);
        assert!((elem.perihelion_argument - (-20.068943)).abs() < 2e-4);
    }

    #[test]
    fn test_venus_mean_equinox_of_date() {
        let epoch = Epoch::from_gregorian(2065, 6, 24.0);
        let elem = mean_elements(Planet::Venus, epoch);

        assert!((elem.mean_longitude - 338.646306).abs() < 1e-4);
        assert!((elem.semimajor_axis - 0.72332982).abs() < 1e-8);
        assert!((elem.eccentricity - 0.0067407).abs() < 1e-6);
        assert!((elem.inclination - 3.395319).abs() < 1e-5);
        assert!((elem.ascending_node - 77.27012).abs() < 1e-4);
        assert!((elem.perihelion_argument - 55.211257).abs() < 1e-4);
    }

    #[test]
    fn test_elements_at_j2000_match_constants() {
        let epoch = Epoch::from_jde(crate::constants::J2000);
        let elem = mean_elements(Planet::Mercury, epoch);
        assert!((elem.mean_longitude - 252.250906).abs() < 1e-9);
        assert!((elem.semimajor_axis - 0.387098310).abs() < 1e-12);
        assert!((elem.eccentricity - 0.20563175).abs() < 1e-10);
    }
}
