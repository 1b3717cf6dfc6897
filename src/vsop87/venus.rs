//! Truncated VSOP87D series for Venus.

use crate::series::{term, PeriodicTerm, PlanetTables};

pub(crate) static TABLES: PlanetTables = PlanetTables {
    longitude: &[L0, L1, L2, L3, L4, L5],
    latitude: &[B0, B1, B2, B3, B4],
    radius: &[R0, R1, R2, R3, R4],
};

const L0: &[PeriodicTerm] = &[
    term(317614667.0, 0.0, 0.0),
    term(1353968.0, 5.5931332, 10213.2855462),
    term(89892.0, 5.30650, 20426.57109),
    term(5477.0, 4.4163, 7860.4194),
    term(3456.0, 2.6996, 11790.6291),
    term(2372.0, 2.9938, 3930.2097),
    term(1664.0, 4.2502, 1577.3435),
    term(1438.0, 4.1575, 9683.5946),
    term(1317.0, 5.1867, 26.2983),
    term(1201.0, 6.1536, 30639.8566),
    term(769.0, 0.816, 9437.763),
    term(761.0, 1.950, 529.691),
    term(708.0, 1.065, 775.523),
    term(585.0, 3.998, 191.448),
    term(500.0, 4.123, 15720.839),
    term(429.0, 3.586, 19367.189),
    term(327.0, 5.677, 5507.553),
    term(326.0, 4.591, 10404.734),
    term(232.0, 3.163, 9153.904),
    term(180.0, 4.653, 1109.379),
    term(155.0, 5.570, 19651.048),
    term(128.0, 4.226, 20.775),
    term(128.0, 0.962, 5661.332),
    term(106.0, 1.537, 801.821),
];

const L1: &[PeriodicTerm] = &[
    term(1021352943053.0, 0.0, 0.0),
    term(95708.0, 2.46424, 10213.28555),
    term(14445.0, 0.51625, 20426.57109),
    term(213.0, 1.795, 30639.857),
    term(174.0, 2.655, 26.298),
    term(152.0, 6.106, 1577.344),
    term(82.0, 5.70, 191.45),
    term(70.0, 2.68, 9437.76),
    term(52.0, 3.60, 775.52),
    term(38.0, 1.03, 529.69),
    term(30.0, 1.25, 5507.55),
    term(25.0, 6.11, 10404.73),
];

const L2: &[PeriodicTerm] = &[
    term(54127.0, 0.0, 0.0),
    term(3891.0, 0.3451, 10213.2855),
    term(1338.0, 2.0201, 20426.5711),
    term(24.0, 2.05, 26.30),
    term(19.0, 3.54, 30639.86),
    term(10.0, 3.97, 775.52),
    term(7.0, 1.52, 1577.34),
    term(6.0, 1.00, 191.45),
];

const L3: &[PeriodicTerm] = &[
    term(136.0, 4.804, 10213.286),
    term(78.0, 3.67, 20426.57),
    term(26.0, 0.0, 0.0),
];

const L4: &[PeriodicTerm] = &[
    term(114.0, 3.1416, 0.0),
    term(20.0, 3.39, 10213.29),
    term(7.0, 0.0, 20426.57),
];

const L5: &[PeriodicTerm] = &[term(9.0, 3.1416, 0.0)];

const B0: &[PeriodicTerm] = &[
    term(5923638.0, 0.2670278, 10213.2855462),
    term(40108.0, 1.14737, 20426.57109),
    term(32815.0, 3.14159, 0.0),
    term(1011.0, 1.0895, 30639.8566),
    term(149.0, 6.254, 18073.705),
    term(138.0, 0.860, 1577.344),
    term(130.0, 3.672, 9437.763),
    term(120.0, 3.705, 2352.866),
    term(108.0, 4.539, 22003.915),
];

const B1: &[PeriodicTerm] = &[
    term(513348.0, 1.803643, 10213.285546),
    term(4380.0, 3.3862, 20426.5711),
    term(199.0, 0.0, 0.0),
    term(197.0, 2.530, 30639.857),
];

const B2: &[PeriodicTerm] = &[
    term(22378.0, 3.38509, 10213.28555),
    term(282.0, 0.0, 0.0),
    term(173.0, 5.256, 20426.571),
    term(27.0, 3.87, 30639.86),
];

const B3: &[PeriodicTerm] = &[
    term(647.0, 4.992, 10213.286),
    term(20.0, 3.14, 0.0),
    term(6.0, 0.77, 20426.57),
    term(3.0, 5.44, 30639.86),
];

const B4: &[PeriodicTerm] = &[term(14.0, 0.32, 10213.29)];

const R0: &[PeriodicTerm] = &[
    term(72334821.0, 0.0, 0.0),
    term(489824.0, 4.021518, 10213.285546),
    term(1658.0, 4.9021, 20426.5711),
    term(1632.0, 2.8455, 7860.4194),
    term(1378.0, 1.1285, 11790.6291),
    term(498.0, 2.587, 9683.595),
    term(374.0, 1.423, 3930.210),
    term(264.0, 5.529, 9437.763),
    term(237.0, 2.551, 15720.839),
    term(222.0, 2.013, 19367.189),
    term(126.0, 2.728, 1577.344),
    term(119.0, 3.020, 10404.734),
];

const R1: &[PeriodicTerm] = &[
    term(34551.0, 0.89199, 10213.28555),
    term(234.0, 1.772, 20426.571),
    term(234.0, 3.142, 0.0),
];

const R2: &[PeriodicTerm] = &[
    term(1407.0, 5.0637, 10213.2855),
    term(16.0, 5.47, 20426.57),
    term(13.0, 0.0, 0.0),
];

const R3: &[PeriodicTerm] = &[term(50.0, 3.22, 10213.29)];

const R4: &[PeriodicTerm] = &[term(1.0, 0.92, 10213.29)];
