//! Truncated VSOP87D series for Uranus.

use crate::series::{term, PeriodicTerm, PlanetTables};

pub(crate) static TABLES: PlanetTables = PlanetTables {
    longitude: &[L0, L1, L2, L3, L4],
    latitude: &[B0, B1, B2, B3, B4],
    radius: &[R0, R1, R2, R3, R4],
};

const L0: &[PeriodicTerm] = &[
    term(548129294.0, 0.0, 0.0),
    term(9260408.0, 0.8910642, 74.7815986),
    term(1504248.0, 3.6271926, 1.4844727),
    term(365982.0, 1.899622, 73.297126),
    term(272328.0, 3.358237, 149.563197),
    term(70328.0, 5.39254, 63.73590),
    term(68893.0, 6.09292, 76.26607),
    term(61999.0, 2.26952, 2.96895),
    term(61951.0, 2.85099, 11.04570),
    term(26469.0, 3.14152, 71.81265),
    term(25711.0, 6.11380, 454.90937),
    term(21079.0, 4.36059, 148.07872),
    term(17819.0, 1.74437, 36.64856),
    term(14613.0, 4.73732, 3.93215),
    term(11163.0, 5.82682, 224.34480),
    term(10998.0, 0.48865, 138.51750),
    term(9527.0, 2.9552, 35.1641),
    term(7546.0, 5.2363, 109.9457),
    term(4220.0, 3.2333, 70.8494),
    term(4052.0, 2.2775, 151.0477),
    term(3490.0, 5.4831, 146.5943),
    term(3355.0, 1.0655, 4.4534),
    term(3144.0, 4.7520, 77.7505),
    term(2927.0, 4.6290, 9.5612),
    term(2922.0, 5.3524, 85.8273),
];

const L1: &[PeriodicTerm] = &[
    term(7502543122.0, 0.0, 0.0),
    term(154458.0, 5.242017, 74.781599),
    term(24456.0, 1.71256, 1.48447),
    term(9258.0, 0.4284, 11.0457),
    term(8266.0, 1.5022, 63.7359),
    term(7842.0, 1.3198, 149.5632),
    term(3899.0, 0.4648, 3.9322),
    term(2284.0, 4.1737, 76.2661),
    term(1927.0, 0.5301, 2.9689),
    term(1233.0, 1.5863, 70.8494),
    term(791.0, 5.436, 3.181),
    term(767.0, 1.996, 73.297),
    term(482.0, 2.984, 85.827),
    term(450.0, 4.138, 138.517),
    term(446.0, 3.723, 224.345),
    term(427.0, 4.731, 71.813),
    term(354.0, 2.583, 148.079),
    term(348.0, 2.454, 9.561),
];

const L2: &[PeriodicTerm] = &[
    term(53033.0, 0.0, 0.0),
    term(2358.0, 2.2601, 74.7816),
    term(769.0, 4.526, 11.046),
    term(552.0, 3.258, 63.736),
    term(542.0, 2.276, 3.932),
    term(529.0, 4.923, 1.484),
    term(258.0, 3.691, 3.181),
    term(239.0, 5.858, 149.563),
    term(182.0, 6.218, 70.849),
    term(54.0, 1.44, 76.27),
    term(49.0, 6.03, 56.62),
    term(45.0, 3.91, 2.97),
    term(45.0, 0.81, 85.83),
    term(38.0, 1.78, 52.69),
    term(37.0, 4.46, 2.45),
    term(33.0, 0.86, 9.56),
    term(29.0, 5.10, 73.30),
];

const L3: &[PeriodicTerm] = &[
    term(121.0, 0.024, 74.782),
    term(68.0, 4.12, 3.93),
    term(53.0, 2.39, 11.05),
    term(46.0, 0.0, 0.0),
    term(45.0, 2.04, 3.18),
    term(44.0, 2.96, 1.48),
    term(25.0, 4.89, 63.74),
    term(21.0, 4.55, 70.85),
    term(20.0, 2.31, 149.56),
    term(9.0, 1.58, 56.62),
];

const L4: &[PeriodicTerm] = &[
    term(114.0, 3.142, 0.0),
    term(6.0, 4.58, 74.78),
    term(3.0, 0.35, 11.05),
    term(1.0, 3.42, 56.62),
];

const B0: &[PeriodicTerm] = &[
    term(1346278.0, 2.6187781, 74.7815986),
    term(62341.0, 5.08111, 149.56320),
    term(61601.0, 3.14159, 0.0),
    term(9964.0, 1.6160, 76.2661),
    term(9926.0, 0.5763, 73.2971),
    term(3259.0, 1.2612, 224.3448),
    term(2972.0, 2.2437, 1.4845),
    term(2010.0, 6.0555, 148.0787),
    term(1522.0, 0.2796, 63.7359),
    term(924.0, 4.038, 151.048),
    term(761.0, 6.140, 71.813),
    term(522.0, 3.321, 138.517),
    term(463.0, 0.743, 85.827),
    term(437.0, 3.381, 529.691),
    term(435.0, 0.341, 77.751),
    term(431.0, 3.554, 213.299),
    term(420.0, 5.213, 11.046),
];

const B1: &[PeriodicTerm] = &[
    term(206366.0, 4.123943, 74.781599),
    term(8563.0, 0.3382, 149.5632),
    term(1726.0, 2.1219, 73.2971),
    term(1374.0, 0.0, 0.0),
    term(1369.0, 3.0686, 76.2661),
    term(451.0, 3.777, 1.484),
    term(400.0, 2.848, 224.345),
    term(307.0, 1.255, 148.079),
    term(154.0, 3.786, 63.736),
    term(112.0, 5.573, 151.048),
    term(111.0, 5.329, 138.517),
    term(83.0, 3.59, 71.81),
    term(56.0, 3.40, 85.83),
];

const B2: &[PeriodicTerm] = &[
    term(9212.0, 5.8004, 74.7816),
    term(557.0, 0.0, 0.0),
    term(286.0, 2.177, 149.563),
    term(95.0, 3.84, 73.30),
    term(45.0, 4.88, 76.27),
    term(20.0, 5.46, 1.48),
    term(15.0, 0.88, 138.52),
    term(14.0, 2.85, 148.08),
    term(14.0, 5.07, 63.74),
    term(10.0, 5.00, 224.34),
    term(8.0, 6.27, 78.71),
];

const B3: &[PeriodicTerm] = &[
    term(268.0, 1.251, 74.782),
    term(11.0, 3.14, 0.0),
    term(6.0, 4.01, 149.56),
    term(3.0, 5.78, 73.30),
];

const B4: &[PeriodicTerm] = &[term(6.0, 2.85, 74.78)];

const R0: &[PeriodicTerm] = &[
    term(1921264848.0, 0.0, 0.0),
    term(88784984.0, 5.60377527, 74.78159857),
    term(3440836.0, 0.3283610, 73.2971259),
    term(2055653.0, 1.7829517, 149.5631971),
    term(649322.0, 4.522473, 76.266071),
    term(602248.0, 3.860038, 63.735898),
    term(496404.0, 1.401399, 454.909367),
    term(338526.0, 1.580027, 138.517497),
    term(243508.0, 1.570866, 71.812653),
    term(190522.0, 1.998094, 1.484473),
    term(161858.0, 2.791379, 148.078724),
    term(143706.0, 1.383686, 11.045700),
    term(93192.0, 0.17437, 36.64856),
    term(89806.0, 3.66105, 109.94569),
    term(71424.0, 4.24509, 224.34480),
    term(46677.0, 1.39977, 35.16409),
    term(39026.0, 3.36235, 277.03499),
    term(39010.0, 1.66971, 70.84945),
    term(36755.0, 3.88649, 146.59425),
    term(30349.0, 0.70100, 151.04767),
    term(29156.0, 3.18056, 77.75054),
    term(25786.0, 3.78538, 85.82730),
    term(25620.0, 5.25656, 380.12777),
    term(22637.0, 0.72519, 35.42472),
    term(20473.0, 2.79640, 70.32818),
    term(20472.0, 1.55589, 202.25340),
    term(17901.0, 0.55455, 2.96895),
    term(15503.0, 5.35405, 38.13304),
    term(14702.0, 4.90434, 108.46122),
    term(12897.0, 2.62154, 111.43016),
    term(12328.0, 5.96039, 127.47180),
    term(11959.0, 1.75044, 984.60033),
    term(11853.0, 0.99343, 52.69020),
    term(11696.0, 3.29826, 3.93215),
    term(11495.0, 0.43774, 65.22037),
    term(10793.0, 1.42105, 213.29910),
];

const R1: &[PeriodicTerm] = &[
    term(1479896.0, 3.6720571, 74.7815986),
    term(71212.0, 6.22601, 63.73590),
    term(68627.0, 6.13411, 149.56320),
    term(24060.0, 3.14159, 0.0),
    term(21468.0, 2.60177, 76.26607),
    term(20857.0, 5.24625, 11.04570),
    term(11405.0, 0.01848, 70.84945),
    term(7497.0, 0.4236, 73.2971),
    term(4244.0, 1.4169, 85.8273),
    term(3927.0, 3.1551, 71.8127),
    term(3578.0, 2.3116, 224.3448),
    term(3506.0, 2.5835, 138.5175),
    term(3229.0, 5.2550, 3.9322),
    term(3060.0, 0.1532, 1.4845),
    term(2564.0, 0.9808, 148.0787),
    term(2429.0, 3.9944, 52.6902),
    term(1645.0, 2.6535, 127.4718),
    term(1584.0, 1.4305, 78.7138),
    term(1508.0, 5.0600, 151.0477),
];

const R2: &[PeriodicTerm] = &[
    term(22440.0, 0.69953, 74.78160),
    term(4727.0, 1.6990, 63.7359),
    term(1682.0, 4.6483, 70.8494),
    term(1650.0, 3.0966, 11.0457),
    term(1434.0, 3.5212, 149.5632),
    term(770.0, 0.0, 0.0),
    term(500.0, 6.172, 76.266),
    term(461.0, 0.767, 3.932),
    term(390.0, 4.496, 56.622),
    term(390.0, 5.527, 85.827),
    term(292.0, 0.204, 52.690),
    term(287.0, 3.534, 73.297),
    term(273.0, 3.847, 138.517),
    term(220.0, 1.964, 131.404),
    term(216.0, 0.848, 77.963),
    term(205.0, 3.248, 78.714),
    term(149.0, 4.898, 127.472),
    term(129.0, 2.081, 3.181),
];

const R3: &[PeriodicTerm] = &[
    term(1164.0, 4.7345, 74.7816),
    term(212.0, 3.343, 63.736),
    term(196.0, 2.980, 70.849),
    term(105.0, 0.958, 11.046),
    term(73.0, 1.00, 149.56),
    term(72.0, 0.03, 56.62),
    term(55.0, 2.59, 3.93),
    term(36.0, 5.65, 77.96),
    term(34.0, 3.82, 76.27),
    term(32.0, 3.60, 131.40),
];

const R4: &[PeriodicTerm] = &[term(53.0, 3.01, 74.78), term(10.0, 1.91, 56.62)];
