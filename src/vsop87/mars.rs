//! Truncated VSOP87D series for Mars.

use crate::series::{term, PeriodicTerm, PlanetTables};

pub(crate) static TABLES: PlanetTables = PlanetTables {
    longitude: &[L0, L1, L2, L3, L4, L5],
    latitude: &[B0, B1, B2, B3, B4],
    radius: &[R0, R1, R2, R3],
};

const L0: &[PeriodicTerm] = &[
    term(620347712.0, 0.0, 0.0),
    term(18656368.0, 5.05037100, 3340.61242670),
    term(1108217.0, 5.4009984, 6681.2248534),
    term(91798.0, 5.75479, 10021.83728),
    term(27745.0, 5.97050, 3.52312),
    term(12316.0, 0.84956, 2810.92146),
    term(10610.0, 2.93959, 2281.23050),
    term(8927.0, 4.1570, 0.0173),
    term(8716.0, 6.1101, 13362.4497),
    term(7775.0, 3.3397, 5621.8429),
    term(6798.0, 0.3646, 398.1490),
    term(4161.0, 0.2281, 2942.4634),
    term(3575.0, 1.6619, 2544.3144),
    term(3075.0, 0.8570, 191.4483),
    term(2938.0, 6.0789, 0.0673),
    term(2628.0, 0.6481, 3337.0893),
    term(2580.0, 0.0300, 3344.1355),
    term(2389.0, 5.0390, 796.2980),
    term(1799.0, 0.6563, 529.6910),
    term(1546.0, 2.9158, 1751.5395),
    term(1528.0, 1.1498, 6151.5339),
    term(1286.0, 3.0680, 2146.1654),
    term(1264.0, 3.6228, 5092.1520),
    term(1025.0, 3.6933, 8962.4553),
    term(892.0, 0.183, 16703.062),
    term(859.0, 2.401, 2914.014),
    term(833.0, 4.495, 3340.630),
    term(833.0, 2.464, 3340.595),
    term(749.0, 3.822, 155.420),
    term(724.0, 0.675, 3738.761),
    term(713.0, 3.663, 1059.382),
    term(655.0, 0.489, 3127.313),
    term(636.0, 2.922, 8432.764),
    term(553.0, 4.475, 1748.016),
    term(550.0, 3.810, 0.980),
    term(472.0, 3.625, 1194.447),
    term(426.0, 0.554, 6283.076),
    term(415.0, 0.497, 213.299),
    term(312.0, 0.999, 6677.702),
    term(307.0, 0.381, 6684.748),
    term(302.0, 4.486, 3532.061),
    term(299.0, 2.783, 6254.627),
    term(293.0, 4.221, 20.775),
    term(284.0, 5.769, 3149.164),
    term(281.0, 5.882, 1349.867),
    term(274.0, 0.542, 3340.545),
    term(274.0, 0.134, 3340.680),
    term(239.0, 5.372, 4136.910),
    term(236.0, 5.755, 3333.499),
    term(231.0, 1.282, 3870.303),
    term(221.0, 3.505, 382.897),
    term(204.0, 2.821, 1221.849),
    term(193.0, 3.357, 3.590),
    term(189.0, 1.491, 9492.146),
    term(179.0, 1.006, 951.718),
    term(174.0, 2.414, 553.569),
    term(172.0, 0.439, 5486.778),
    term(160.0, 3.949, 4562.461),
    term(144.0, 1.419, 135.065),
    term(140.0, 3.326, 2700.715),
    term(138.0, 4.301, 7.114),
    term(131.0, 4.045, 12303.068),
    term(128.0, 2.208, 1592.596),
    term(128.0, 1.807, 5088.629),
    term(117.0, 3.128, 7903.073),
    term(113.0, 3.701, 1589.073),
    term(110.0, 1.052, 242.729),
    term(105.0, 0.785, 8827.390),
    term(100.0, 3.243, 11773.377),
];

const L1: &[PeriodicTerm] = &[
    term(334085627474.0, 0.0, 0.0),
    term(1458227.0, 3.6042605, 3340.6124267),
    term(164901.0, 3.926313, 6681.224853),
    term(19963.0, 4.26594, 10021.83728),
    term(3452.0, 4.7321, 3.5231),
    term(2485.0, 4.6128, 13362.4497),
    term(842.0, 4.459, 2281.230),
    term(538.0, 5.016, 398.149),
    term(521.0, 4.994, 3344.136),
    term(433.0, 2.561, 191.448),
    term(430.0, 5.316, 155.420),
    term(382.0, 3.539, 796.298),
    term(314.0, 4.963, 16703.062),
    term(283.0, 3.160, 2544.314),
    term(206.0, 4.569, 2146.165),
    term(169.0, 1.329, 3337.089),
    term(158.0, 4.185, 1751.540),
    term(134.0, 2.233, 0.980),
    term(134.0, 5.974, 1748.016),
    term(118.0, 6.024, 6151.534),
    term(117.0, 2.213, 1059.382),
    term(114.0, 2.129, 1194.447),
    term(114.0, 5.428, 3738.761),
    term(91.0, 1.10, 1349.87),
    term(85.0, 3.91, 553.57),
    term(83.0, 5.30, 6684.75),
    term(81.0, 4.43, 529.69),
    term(80.0, 2.25, 8962.46),
    term(73.0, 2.50, 951.72),
    term(73.0, 5.84, 242.73),
    term(71.0, 3.86, 2914.01),
    term(68.0, 5.02, 382.90),
    term(65.0, 1.02, 3340.60),
    term(65.0, 3.05, 3340.63),
    term(62.0, 4.15, 3149.16),
    term(57.0, 3.89, 4136.91),
    term(48.0, 4.87, 213.30),
    term(48.0, 1.18, 3333.50),
];

const L2: &[PeriodicTerm] = &[
    term(58016.0, 2.04979, 3340.61243),
    term(54188.0, 0.0, 0.0),
    term(13908.0, 2.45742, 6681.22485),
    term(2465.0, 2.8000, 10021.8373),
    term(398.0, 3.141, 13362.450),
    term(222.0, 3.194, 3.523),
    term(121.0, 0.543, 155.420),
    term(62.0, 3.49, 16703.06),
    term(54.0, 3.54, 3344.14),
    term(34.0, 6.00, 2281.23),
    term(32.0, 4.14, 191.45),
    term(30.0, 2.00, 796.30),
    term(23.0, 4.33, 242.73),
    term(22.0, 3.45, 398.15),
    term(20.0, 5.42, 553.57),
    term(16.0, 0.66, 0.98),
    term(16.0, 6.11, 2146.17),
    term(16.0, 1.22, 1748.02),
    term(15.0, 6.10, 3185.19),
    term(14.0, 4.02, 951.72),
    term(14.0, 2.62, 1349.87),
    term(13.0, 0.60, 1194.45),
    term(12.0, 3.86, 6684.75),
    term(11.0, 4.72, 2544.31),
    term(10.0, 0.25, 382.90),
    term(9.0, 0.68, 1059.38),
    term(9.0, 3.83, 20.78),
    term(9.0, 3.88, 3738.76),
    term(8.0, 5.46, 1751.54),
    term(7.0, 2.58, 3149.16),
    term(7.0, 2.38, 4136.91),
    term(6.0, 5.48, 1592.60),
    term(6.0, 2.34, 3097.88),
];

const L3: &[PeriodicTerm] = &[
    term(1482.0, 0.4443, 3340.6124),
    term(662.0, 0.885, 6681.225),
    term(188.0, 1.288, 10021.837),
    term(41.0, 1.55, 13362.45),
    term(26.0, 0.0, 0.0),
    term(23.0, 2.05, 155.42),
    term(10.0, 1.58, 3.52),
    term(8.0, 2.00, 16703.06),
    term(5.0, 2.82, 242.73),
    term(4.0, 2.02, 3344.14),
    term(3.0, 4.59, 3185.19),
    term(3.0, 0.65, 553.57),
];

const L4: &[PeriodicTerm] = &[
    term(114.0, 3.1416, 0.0),
    term(29.0, 5.64, 6681.22),
    term(24.0, 5.14, 3340.61),
    term(11.0, 6.03, 10021.84),
    term(3.0, 0.13, 13362.45),
    term(3.0, 3.56, 155.42),
    term(1.0, 0.49, 16703.06),
    term(1.0, 1.32, 242.73),
];

const L5: &[PeriodicTerm] = &[term(1.0, 3.14, 0.0), term(1.0, 4.04, 6681.22)];

const B0: &[PeriodicTerm] = &[
    term(3197135.0, 3.7683204, 3340.6124267),
    term(298033.0, 4.106170, 6681.224853),
    term(289105.0, 0.0, 0.0),
    term(31366.0, 4.44651, 10021.83728),
    term(3484.0, 4.7881, 13362.4497),
    term(443.0, 5.026, 3344.136),
    term(443.0, 5.652, 3337.089),
    term(399.0, 5.131, 16703.062),
    term(293.0, 3.793, 2281.230),
    term(182.0, 6.136, 6151.534),
    term(163.0, 4.264, 529.691),
    term(160.0, 2.232, 1059.382),
    term(149.0, 2.165, 5621.843),
    term(143.0, 1.182, 3340.595),
    term(143.0, 3.213, 3340.630),
    term(139.0, 2.418, 8962.455),
];

const B1: &[PeriodicTerm] = &[
    term(350069.0, 5.368478, 3340.612427),
    term(14116.0, 3.14159, 0.0),
    term(9671.0, 5.4788, 6681.2249),
    term(1472.0, 3.2021, 10021.8373),
    term(426.0, 3.408, 13362.450),
    term(102.0, 0.776, 3337.089),
    term(79.0, 3.72, 16703.06),
    term(33.0, 3.46, 5621.84),
    term(26.0, 2.48, 2281.23),
];

const B2: &[PeriodicTerm] = &[
    term(16727.0, 0.60221, 3340.61243),
    term(4987.0, 3.1416, 0.0),
    term(302.0, 5.559, 6681.225),
    term(26.0, 1.90, 13362.45),
    term(21.0, 0.92, 10021.84),
    term(12.0, 2.24, 3337.09),
    term(8.0, 2.25, 16703.06),
];

const B3: &[PeriodicTerm] = &[
    term(607.0, 1.981, 3340.612),
    term(43.0, 0.0, 0.0),
    term(14.0, 1.80, 6681.22),
    term(3.0, 3.45, 10021.84),
];

const B4: &[PeriodicTerm] = &[
    term(13.0, 0.0, 0.0),
    term(11.0, 3.46, 3340.61),
    term(1.0, 0.50, 6681.22),
];

const R0: &[PeriodicTerm] = &[
    term(153033488.0, 0.0, 0.0),
    term(14184953.0, 3.47971284, 3340.61242670),
    term(660776.0, 3.817834, 6681.224853),
    term(46179.0, 4.15595, 10021.83728),
    term(8110.0, 5.5596, 2810.9215),
    term(7485.0, 1.7724, 5621.8429),
    term(5523.0, 1.3644, 2281.2305),
    term(3825.0, 4.4941, 13362.4497),
    term(2484.0, 4.9255, 2942.4634),
    term(2307.0, 0.0908, 2544.3144),
    term(1999.0, 5.3606, 3337.0893),
    term(1960.0, 4.7425, 3344.1355),
    term(1167.0, 2.1126, 5092.1520),
    term(1103.0, 5.0091, 398.1490),
    term(992.0, 5.839, 6151.534),
    term(899.0, 4.408, 529.691),
    term(807.0, 2.102, 1059.382),
    term(798.0, 3.448, 796.298),
    term(741.0, 1.499, 2146.165),
    term(726.0, 1.245, 8432.764),
    term(692.0, 2.134, 8962.455),
    term(633.0, 0.894, 3340.595),
    term(633.0, 2.924, 3340.630),
    term(630.0, 1.287, 1751.540),
    term(574.0, 0.829, 2914.014),
    term(526.0, 5.383, 3738.761),
    term(473.0, 5.199, 3127.313),
    term(348.0, 4.832, 16703.062),
    term(284.0, 2.907, 3532.061),
    term(280.0, 5.257, 6283.076),
    term(276.0, 1.218, 6254.627),
    term(275.0, 2.908, 1748.016),
    term(270.0, 3.764, 5884.927),
    term(239.0, 2.037, 1194.447),
    term(234.0, 5.105, 5486.778),
    term(228.0, 3.255, 6872.673),
    term(223.0, 4.199, 3149.164),
    term(219.0, 5.583, 191.448),
    term(208.0, 5.255, 3340.545),
    term(208.0, 4.846, 3340.680),
    term(186.0, 5.699, 6677.702),
    term(183.0, 5.081, 6684.748),
    term(179.0, 4.184, 3333.499),
    term(176.0, 5.953, 3870.303),
    term(164.0, 3.799, 4136.910),
];

const R1: &[PeriodicTerm] = &[
    term(1107433.0, 2.0325052, 3340.6124267),
    term(103176.0, 2.370718, 6681.224853),
    term(12877.0, 0.0, 0.0),
    term(10816.0, 2.70888, 10021.83728),
    term(1195.0, 3.0470, 13362.4497),
    term(439.0, 2.888, 2281.230),
    term(396.0, 3.423, 3344.136),
    term(183.0, 1.584, 2544.314),
    term(136.0, 3.385, 16703.062),
    term(128.0, 6.043, 3337.089),
    term(128.0, 0.630, 1059.382),
    term(127.0, 1.954, 796.298),
    term(118.0, 2.998, 2146.165),
    term(88.0, 3.42, 398.15),
    term(83.0, 3.86, 3738.76),
    term(76.0, 4.45, 6151.53),
    term(72.0, 2.76, 529.69),
    term(67.0, 2.55, 1751.54),
    term(66.0, 4.41, 1748.02),
    term(58.0, 0.54, 1194.45),
    term(54.0, 0.68, 8962.46),
    term(51.0, 3.73, 6684.75),
    term(49.0, 5.73, 3340.60),
    term(49.0, 1.48, 3340.63),
    term(48.0, 2.58, 3149.16),
    term(48.0, 2.29, 2914.01),
    term(39.0, 2.32, 4136.91),
];

const R2: &[PeriodicTerm] = &[
    term(44242.0, 0.47931, 3340.61243),
    term(8138.0, 0.8700, 6681.2249),
    term(1275.0, 1.2259, 10021.8373),
    term(187.0, 1.573, 13362.450),
    term(52.0, 3.14, 0.0),
    term(41.0, 1.97, 3344.14),
    term(27.0, 1.92, 16703.06),
    term(18.0, 4.43, 2281.23),
    term(12.0, 4.53, 3185.19),
    term(10.0, 5.39, 1059.38),
    term(10.0, 0.42, 796.30),
];

const R3: &[PeriodicTerm] = &[
    term(1113.0, 5.1499, 3340.6124),
    term(424.0, 5.613, 6681.225),
    term(100.0, 5.997, 10021.837),
    term(20.0, 0.08, 13362.45),
    term(5.0, 3.14, 0.0),
    term(3.0, 0.43, 16703.06),
];
