//! Truncated VSOP87D series for Mercury.

use crate::series::{term, PeriodicTerm, PlanetTables};

pub(crate) static TABLES: PlanetTables = PlanetTables {
    longitude: &[L0, L1, L2, L3, L4, L5],
    latitude: &[B0, B1, B2, B3, B4],
    radius: &[R0, R1, R2, R3],
};

const L0: &[PeriodicTerm] = &[
    term(440250710.0, 0.0, 0.0),
    term(40989415.0, 1.48302034, 26087.90314157),
    term(5046294.0, 4.4778549, 52175.8062831),
    term(855347.0, 1.165203, 78263.709425),
    term(165590.0, 4.119692, 104351.612566),
    term(34562.0, 0.77931, 130439.51571),
    term(7583.0, 3.7135, 156527.4188),
    term(3560.0, 1.5120, 1109.3786),
    term(1803.0, 4.1033, 5661.3320),
    term(1726.0, 0.3583, 182615.3220),
    term(1590.0, 2.9951, 25028.5212),
    term(1365.0, 4.5992, 27197.2817),
    term(1017.0, 0.8803, 31749.2352),
    term(714.0, 1.541, 24978.525),
    term(644.0, 5.303, 21535.950),
    term(451.0, 6.050, 51116.424),
    term(404.0, 3.282, 208703.225),
    term(352.0, 5.242, 20426.571),
    term(345.0, 2.792, 15874.618),
    term(343.0, 5.765, 955.600),
    term(339.0, 5.863, 25558.212),
    term(325.0, 1.337, 53285.185),
    term(273.0, 2.495, 529.691),
    term(264.0, 3.917, 57837.138),
    term(260.0, 0.987, 4551.953),
    term(239.0, 0.113, 1059.382),
    term(235.0, 0.267, 11322.664),
    term(217.0, 0.660, 13521.751),
    term(209.0, 2.092, 47623.853),
    term(183.0, 2.629, 27043.503),
    term(182.0, 2.434, 25661.305),
    term(176.0, 4.536, 51066.428),
    term(173.0, 2.452, 24498.830),
    term(142.0, 3.360, 37410.567),
    term(138.0, 0.291, 10213.286),
    term(125.0, 3.721, 39609.655),
    term(118.0, 2.781, 77204.327),
    term(106.0, 4.206, 19804.827),
];

const L1: &[PeriodicTerm] = &[
    term(2608814706223.0, 0.0, 0.0),
    term(1126008.0, 6.2170397, 26087.9031416),
    term(303471.0, 3.055655, 52175.806283),
    term(80538.0, 6.10455, 78263.70942),
    term(21245.0, 2.83532, 104351.61257),
    term(5592.0, 5.8268, 130439.5157),
    term(1472.0, 2.5185, 156527.4188),
    term(388.0, 5.480, 182615.322),
    term(352.0, 3.052, 1109.379),
    term(103.0, 2.149, 208703.225),
    term(94.0, 6.12, 27197.28),
    term(91.0, 0.00, 24978.52),
    term(52.0, 5.62, 5661.33),
    term(44.0, 4.57, 25028.52),
    term(28.0, 3.04, 51066.43),
    term(27.0, 5.09, 234791.13),
];

const L2: &[PeriodicTerm] = &[
    term(53050.0, 0.0, 0.0),
    term(16904.0, 4.69072, 26087.90314),
    term(7397.0, 1.3474, 52175.8063),
    term(3018.0, 4.4564, 78263.7094),
    term(1107.0, 1.2623, 104351.6126),
    term(378.0, 4.320, 130439.516),
    term(123.0, 1.069, 156527.419),
    term(39.0, 4.08, 182615.32),
    term(15.0, 4.63, 1109.38),
    term(12.0, 0.79, 208703.23),
];

const L3: &[PeriodicTerm] = &[
    term(188.0, 0.035, 52175.806),
    term(142.0, 3.125, 26087.903),
    term(97.0, 3.00, 78263.71),
    term(44.0, 6.02, 104351.61),
    term(35.0, 0.0, 0.0),
    term(18.0, 2.78, 130439.52),
    term(7.0, 5.82, 156527.42),
    term(3.0, 2.57, 182615.32),
];

const L4: &[PeriodicTerm] = &[
    term(114.0, 3.1416, 0.0),
    term(3.0, 2.03, 26087.90),
    term(2.0, 1.42, 78263.71),
    term(2.0, 4.50, 52175.81),
    term(1.0, 4.50, 104351.61),
    term(1.0, 1.27, 130439.52),
];

const L5: &[PeriodicTerm] = &[term(1.0, 3.14, 0.0)];

const B0: &[PeriodicTerm] = &[
    term(11737529.0, 1.98357499, 26087.90314157),
    term(2388077.0, 5.0373896, 52175.8062831),
    term(1222840.0, 3.1415927, 0.0),
    term(543252.0, 1.796444, 78263.709425),
    term(129779.0, 4.832325, 104351.612566),
    term(31867.0, 1.58088, 130439.51571),
    term(7963.0, 4.6097, 156527.4188),
    term(2014.0, 1.3532, 182615.3220),
    term(514.0, 4.378, 208703.225),
    term(209.0, 2.020, 24978.525),
    term(208.0, 4.918, 27197.282),
    term(132.0, 1.119, 234791.128),
    term(121.0, 1.813, 53285.185),
    term(100.0, 5.657, 20426.571),
];

const B1: &[PeriodicTerm] = &[
    term(429151.0, 3.501698, 26087.903142),
    term(146234.0, 3.141593, 0.0),
    term(22675.0, 0.01515, 52175.80628),
    term(10895.0, 0.48540, 78263.70942),
    term(6353.0, 3.4294, 104351.6126),
    term(2496.0, 0.1605, 130439.5157),
    term(860.0, 3.185, 156527.419),
    term(278.0, 6.210, 182615.322),
    term(86.0, 2.95, 208703.23),
    term(28.0, 0.29, 27197.28),
    term(26.0, 5.98, 234791.13),
];

const B2: &[PeriodicTerm] = &[
    term(11831.0, 4.79066, 26087.90314),
    term(1914.0, 0.0, 0.0),
    term(1045.0, 1.2122, 52175.8063),
    term(266.0, 4.434, 78263.709),
    term(170.0, 1.623, 104351.613),
    term(96.0, 4.80, 130439.52),
    term(45.0, 1.61, 156527.42),
    term(18.0, 4.67, 182615.32),
    term(7.0, 1.43, 208703.23),
];

const B3: &[PeriodicTerm] = &[
    term(235.0, 0.354, 26087.903),
    term(161.0, 0.0, 0.0),
    term(19.0, 4.36, 52175.81),
    term(6.0, 2.51, 78263.71),
    term(5.0, 6.14, 104351.61),
    term(3.0, 3.12, 130439.52),
    term(2.0, 6.27, 156527.42),
];

const B4: &[PeriodicTerm] = &[term(4.0, 1.75, 26087.90), term(1.0, 3.14, 0.0)];

const R0: &[PeriodicTerm] = &[
    term(39528272.0, 0.0, 0.0),
    term(7834132.0, 6.1923372, 26087.9031416),
    term(795526.0, 2.959897, 52175.806283),
    term(121282.0, 6.010642, 78263.709425),
    term(21922.0, 2.77820, 104351.61257),
    term(4354.0, 5.8289, 130439.5157),
    term(918.0, 2.597, 156527.419),
    term(290.0, 1.424, 25028.521),
    term(260.0, 3.028, 27197.282),
    term(202.0, 5.647, 182615.322),
    term(201.0, 5.592, 31749.235),
    term(142.0, 6.253, 24978.525),
    term(100.0, 3.734, 21535.950),
];

const R1: &[PeriodicTerm] = &[
    term(217348.0, 4.656172, 26087.903142),
    term(44142.0, 1.42386, 52175.80628),
    term(10094.0, 4.47466, 78263.70942),
    term(2433.0, 1.2423, 104351.6126),
    term(1624.0, 0.0, 0.0),
    term(604.0, 4.293, 130439.516),
    term(153.0, 1.061, 156527.419),
    term(39.0, 4.11, 182615.32),
];

const R2: &[PeriodicTerm] = &[
    term(3118.0, 3.0823, 26087.9031),
    term(1245.0, 6.1518, 52175.8063),
    term(425.0, 2.926, 78263.709),
    term(136.0, 5.980, 104351.613),
    term(42.0, 2.69, 130439.52),
    term(22.0, 3.14, 0.0),
    term(13.0, 5.80, 156527.42),
];

const R3: &[PeriodicTerm] = &[
    term(33.0, 1.68, 26087.90),
    term(24.0, 4.63, 52175.81),
    term(12.0, 1.39, 78263.71),
    term(5.0, 4.44, 104351.61),
    term(2.0, 1.21, 130439.52),
];
