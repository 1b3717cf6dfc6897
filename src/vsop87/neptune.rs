//! Truncated VSOP87D series for Neptune.

use crate::series::{term, PeriodicTerm, PlanetTables};

pub(crate) static TABLES: PlanetTables = PlanetTables {
    longitude: &[L0, L1, L2, L3, L4],
    latitude: &[B0, B1, B2, B3, B4],
    radius: &[R0, R1, R2, R3],
};

const L0: &[PeriodicTerm] = &[
    term(531188633.0, 0.0, 0.0),
    term(1798476.0, 2.9010127, 38.1330356),
    term(1019728.0, 0.4858092, 36.6485629),
    term(124532.0, 4.830081, 36.648563),
    term(42064.0, 5.41055, 2.96895),
    term(37715.0, 6.09222, 35.16409),
    term(33785.0, 1.24489, 76.26607),
    term(16483.0, 0.00008, 491.55793),
    term(9199.0, 4.9375, 39.6175),
    term(8994.0, 0.2746, 175.1661),
    term(4216.0, 1.9871, 73.2971),
    term(3365.0, 1.0359, 33.6796),
    term(2285.0, 4.2061, 4.4534),
    term(1434.0, 2.7834, 74.7816),
    term(900.0, 2.076, 109.946),
    term(745.0, 3.190, 71.813),
    term(506.0, 5.748, 114.399),
    term(400.0, 0.350, 1021.249),
];

const L1: &[PeriodicTerm] = &[
    term(3837687717.0, 0.0, 0.0),
    term(16604.0, 4.86319, 1.48447),
    term(15807.0, 2.27923, 38.13304),
    term(3335.0, 3.6820, 76.2661),
    term(1306.0, 3.6732, 2.9689),
    term(605.0, 1.505, 35.164),
    term(179.0, 3.453, 39.618),
    term(107.0, 2.451, 37.612),
    term(106.0, 2.755, 33.680),
    term(73.0, 5.49, 36.65),
    term(57.0, 1.86, 114.40),
    term(57.0, 5.22, 0.52),
];

const L2: &[PeriodicTerm] = &[
    term(53893.0, 0.0, 0.0),
    term(296.0, 1.855, 1.484),
    term(281.0, 1.191, 38.133),
    term(270.0, 5.721, 76.266),
    term(23.0, 1.21, 2.97),
    term(9.0, 4.43, 35.16),
    term(7.0, 0.54, 2.45),
];

const L3: &[PeriodicTerm] = &[
    term(31.0, 0.0, 0.0),
    term(15.0, 1.35, 76.27),
    term(12.0, 6.04, 1.48),
    term(12.0, 6.11, 38.13),
];

const L4: &[PeriodicTerm] = &[term(114.0, 3.142, 0.0)];

const B0: &[PeriodicTerm] = &[
    term(3088623.0, 1.4410437, 38.1330356),
    term(27780.0, 5.91272, 76.26607),
    term(27624.0, 0.0, 0.0),
    term(15448.0, 3.50877, 39.61751),
    term(15355.0, 2.52124, 36.64856),
    term(2000.0, 1.5100, 74.7816),
    term(1968.0, 4.3778, 1.4845),
    term(1015.0, 3.2156, 35.1641),
    term(606.0, 2.802, 73.297),
    term(595.0, 2.129, 41.102),
    term(589.0, 3.187, 2.969),
    term(402.0, 4.169, 114.399),
    term(280.0, 1.682, 77.751),
    term(262.0, 3.767, 213.299),
    term(254.0, 3.271, 453.425),
    term(206.0, 4.257, 529.691),
    term(140.0, 3.530, 137.033),
];

const B1: &[PeriodicTerm] = &[
    term(227279.0, 3.807931, 38.133036),
    term(1803.0, 1.9758, 76.2661),
    term(1433.0, 3.1416, 0.0),
    term(1386.0, 4.8256, 36.6486),
    term(1073.0, 6.0805, 39.6175),
    term(148.0, 3.858, 74.782),
    term(136.0, 0.478, 1.484),
    term(70.0, 6.19, 35.16),
    term(52.0, 5.05, 73.30),
    term(43.0, 0.31, 114.40),
    term(37.0, 4.89, 41.10),
    term(37.0, 5.76, 2.97),
    term(26.0, 5.22, 213.30),
];

const B2: &[PeriodicTerm] = &[
    term(9691.0, 5.5712, 38.1330),
    term(79.0, 3.63, 76.27),
    term(72.0, 0.45, 36.65),
    term(59.0, 3.14, 0.0),
    term(30.0, 1.61, 39.62),
    term(6.0, 5.61, 74.78),
];

const B3: &[PeriodicTerm] = &[
    term(273.0, 1.017, 38.133),
    term(2.0, 0.0, 0.0),
    term(2.0, 2.37, 36.65),
    term(2.0, 5.33, 76.27),
];

const B4: &[PeriodicTerm] = &[term(6.0, 2.67, 38.13)];

const R0: &[PeriodicTerm] = &[
    term(3007013206.0, 0.0, 0.0),
    term(27062259.0, 1.32999459, 38.13303564),
    term(1691764.0, 3.2518614, 36.6485629),
    term(807831.0, 5.185928, 1.484473),
    term(537761.0, 4.521139, 35.164090),
    term(495726.0, 1.571057, 491.557929),
    term(274572.0, 1.845523, 175.166060),
    term(135134.0, 3.372206, 39.617508),
    term(121802.0, 5.797544, 76.266071),
    term(100895.0, 0.377027, 73.297126),
    term(69792.0, 3.79617, 2.96895),
    term(46688.0, 5.74938, 33.67962),
    term(24594.0, 0.50802, 109.94569),
    term(16939.0, 1.59422, 71.81265),
    term(14230.0, 1.07786, 74.78160),
    term(12012.0, 1.92062, 1021.24889),
    term(8395.0, 0.6782, 146.5943),
    term(7572.0, 1.0715, 388.4652),
    term(5721.0, 2.5906, 4.4534),
    term(4840.0, 1.9069, 41.1020),
    term(4483.0, 2.9057, 529.6910),
    term(4421.0, 1.7499, 108.4612),
    term(4354.0, 0.6799, 38.6543),
    term(4270.0, 3.4134, 453.4249),
    term(3381.0, 0.8481, 183.2428),
    term(2881.0, 1.9860, 145.1098),
    term(2879.0, 3.6742, 350.3321),
    term(2636.0, 3.0976, 213.2991),
    term(2530.0, 5.7984, 490.0735),
    term(2523.0, 0.4863, 493.0424),
    term(2306.0, 2.8096, 70.3282),
    term(2087.0, 0.6186, 33.9402),
];

const R1: &[PeriodicTerm] = &[
    term(236339.0, 0.704980, 38.133036),
    term(13220.0, 3.32015, 1.48447),
    term(8622.0, 6.2163, 35.1641),
    term(2702.0, 1.8814, 39.6175),
    term(2155.0, 2.0943, 2.9689),
    term(2153.0, 5.1687, 76.2661),
    term(1603.0, 0.0, 0.0),
    term(1464.0, 1.1842, 33.6796),
    term(1136.0, 3.9189, 36.6486),
    term(898.0, 5.241, 388.465),
    term(790.0, 0.533, 168.053),
    term(760.0, 0.021, 182.280),
    term(607.0, 1.077, 1021.249),
    term(572.0, 3.401, 484.444),
    term(561.0, 2.887, 498.671),
];

const R2: &[PeriodicTerm] = &[
    term(4247.0, 5.8991, 38.1330),
    term(218.0, 0.346, 1.484),
    term(163.0, 2.239, 168.053),
    term(156.0, 4.594, 182.280),
    term(127.0, 2.848, 35.164),
];

const R3: &[PeriodicTerm] = &[term(166.0, 4.552, 38.133)];
