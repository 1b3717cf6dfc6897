//! Truncated VSOP87D series for Saturn.

use crate::series::{term, PeriodicTerm, PlanetTables};

pub(crate) static TABLES: PlanetTables = PlanetTables {
    longitude: &[L0, L1, L2, L3, L4, L5],
    latitude: &[B0, B1, B2, B3, B4, B5],
    radius: &[R0, R1, R2, R3, R4, R5],
};

const L0: &[PeriodicTerm] = &[
    term(87401354.0, 0.0, 0.0),
    term(11107660.0, 3.96205090, 213.29909544),
    term(1414151.0, 4.5858152, 7.1135470),
    term(398379.0, 0.521120, 206.185548),
    term(350769.0, 3.303299, 426.598191),
    term(206816.0, 0.246584, 103.092774),
    term(79271.0, 3.84007, 220.41264),
    term(23990.0, 4.66977, 110.20632),
    term(16574.0, 0.43719, 419.48464),
    term(15820.0, 0.93809, 632.78374),
    term(15054.0, 2.71670, 639.89729),
    term(14907.0, 5.76903, 316.39187),
    term(14610.0, 1.56519, 3.93215),
    term(13160.0, 4.44891, 14.22709),
    term(13005.0, 5.98119, 11.04570),
    term(10725.0, 3.12940, 202.25340),
    term(6126.0, 1.7633, 277.0350),
    term(5863.0, 0.2366, 529.6910),
    term(5228.0, 4.2078, 3.1814),
    term(5020.0, 3.1779, 433.7117),
    term(4593.0, 0.6198, 199.0720),
    term(4006.0, 2.2448, 63.7359),
    term(3874.0, 3.2228, 138.5175),
    term(3269.0, 0.7749, 949.1756),
    term(2954.0, 0.9828, 95.9792),
    term(2461.0, 2.0316, 735.8765),
    term(1758.0, 3.2658, 522.5774),
    term(1640.0, 5.5050, 846.0828),
    term(1581.0, 4.3727, 309.2783),
    term(1391.0, 4.0233, 323.5054),
    term(1124.0, 2.8373, 415.5525),
    term(1087.0, 4.1834, 2.4477),
    term(1006.0, 3.5241, 227.5262),
    term(998.0, 2.918, 1059.382),
];

const L1: &[PeriodicTerm] = &[
    term(21354295596.0, 0.0, 0.0),
    term(1296855.0, 1.8282054, 213.2990954),
    term(564348.0, 2.885001, 7.113547),
    term(107679.0, 2.277699, 206.185548),
    term(98323.0, 1.08070, 426.59819),
    term(40255.0, 2.04128, 220.41264),
    term(19942.0, 1.27955, 103.09277),
    term(10512.0, 2.74880, 14.22709),
    term(6939.0, 0.4049, 639.8973),
    term(4803.0, 2.4419, 419.4846),
    term(4056.0, 2.9217, 110.2063),
    term(3769.0, 3.6497, 3.9322),
    term(3385.0, 2.4169, 3.1814),
    term(3302.0, 1.2626, 433.7117),
    term(3071.0, 2.3274, 199.0720),
    term(1953.0, 3.5639, 11.0457),
    term(1249.0, 2.6280, 95.9792),
    term(922.0, 1.961, 227.526),
    term(706.0, 4.417, 529.691),
    term(650.0, 6.174, 202.253),
    term(628.0, 6.111, 309.278),
    term(487.0, 6.040, 853.196),
    term(479.0, 4.988, 522.577),
    term(468.0, 1.284, 234.640),
    term(417.0, 2.117, 323.505),
    term(408.0, 1.299, 209.367),
];

const L2: &[PeriodicTerm] = &[
    term(116441.0, 1.179879, 7.113547),
    term(91921.0, 0.07425, 213.29910),
    term(90592.0, 0.0, 0.0),
    term(15277.0, 4.06492, 206.18555),
    term(10631.0, 0.25778, 220.41264),
    term(10605.0, 5.40964, 426.59819),
    term(4265.0, 1.0460, 14.2271),
    term(1216.0, 2.9186, 103.0928),
    term(1165.0, 4.6094, 639.8973),
    term(1082.0, 5.6913, 433.7117),
    term(1045.0, 4.0421, 199.0720),
    term(1020.0, 0.6337, 3.1814),
    term(634.0, 4.388, 419.485),
    term(549.0, 5.573, 3.932),
    term(457.0, 1.268, 110.206),
    term(425.0, 0.209, 227.526),
    term(274.0, 4.288, 95.979),
    term(162.0, 1.381, 11.046),
    term(129.0, 1.566, 309.278),
    term(117.0, 3.881, 853.196),
    term(105.0, 4.900, 647.011),
];

const L3: &[PeriodicTerm] = &[
    term(16039.0, 5.73945, 7.11355),
    term(4250.0, 4.5854, 213.2991),
    term(1907.0, 4.7608, 220.4126),
    term(1466.0, 5.9133, 206.1855),
    term(1162.0, 5.6197, 14.2271),
    term(1067.0, 3.6082, 426.5982),
    term(239.0, 3.861, 433.712),
    term(237.0, 5.768, 199.072),
    term(166.0, 5.116, 3.181),
    term(151.0, 2.736, 639.897),
    term(131.0, 4.743, 227.526),
    term(63.0, 0.23, 419.48),
    term(62.0, 4.74, 103.09),
    term(40.0, 5.47, 21.34),
    term(40.0, 5.96, 95.98),
];

const L4: &[PeriodicTerm] = &[
    term(1662.0, 3.9983, 7.1135),
    term(257.0, 2.984, 220.413),
    term(236.0, 3.902, 14.227),
    term(149.0, 2.741, 213.299),
    term(114.0, 3.142, 0.0),
    term(110.0, 1.515, 206.186),
    term(68.0, 1.72, 426.60),
    term(40.0, 2.05, 433.71),
    term(38.0, 4.50, 199.07),
    term(31.0, 4.77, 227.53),
];

const L5: &[PeriodicTerm] = &[
    term(124.0, 2.259, 7.114),
    term(34.0, 2.16, 14.23),
    term(28.0, 1.20, 220.41),
    term(6.0, 1.22, 227.53),
    term(5.0, 0.24, 433.71),
    term(4.0, 6.23, 426.60),
    term(3.0, 2.97, 199.07),
];

const B0: &[PeriodicTerm] = &[
    term(4330678.0, 3.6028443, 213.2990954),
    term(240348.0, 2.852385, 426.598191),
    term(84746.0, 0.0, 0.0),
    term(34116.0, 0.57297, 206.18555),
    term(30863.0, 3.48442, 220.41264),
    term(14734.0, 2.11847, 639.89729),
    term(9917.0, 5.7900, 419.4846),
    term(6994.0, 4.7360, 7.1135),
    term(4808.0, 5.4331, 316.3919),
    term(4788.0, 4.9651, 110.2063),
    term(3432.0, 2.7326, 433.7117),
    term(1506.0, 6.0130, 103.0928),
    term(1060.0, 5.6310, 529.6910),
    term(969.0, 5.204, 632.784),
    term(942.0, 1.396, 853.196),
    term(708.0, 3.803, 323.505),
    term(552.0, 5.131, 202.253),
    term(400.0, 3.359, 227.526),
    term(319.0, 3.626, 209.367),
    term(316.0, 1.997, 647.011),
];

const B1: &[PeriodicTerm] = &[
    term(397555.0, 5.332900, 213.299095),
    term(49479.0, 3.14159, 0.0),
    term(18572.0, 6.09919, 426.59819),
    term(14801.0, 2.30586, 206.18555),
    term(9644.0, 1.6967, 220.4126),
    term(3757.0, 1.2543, 419.4846),
    term(2717.0, 5.9117, 639.8973),
    term(1455.0, 0.8516, 433.7117),
    term(1291.0, 2.9177, 7.1135),
    term(853.0, 0.436, 316.392),
    term(298.0, 0.919, 632.784),
    term(292.0, 5.316, 853.196),
    term(284.0, 1.619, 227.526),
    term(275.0, 3.889, 103.093),
    term(172.0, 0.052, 647.011),
    term(166.0, 2.444, 199.072),
    term(158.0, 5.209, 110.206),
    term(128.0, 1.207, 529.691),
];

const B2: &[PeriodicTerm] = &[
    term(20630.0, 0.50482, 213.29910),
    term(3720.0, 3.9983, 206.1855),
    term(1627.0, 6.1819, 220.4126),
    term(1346.0, 0.0, 0.0),
    term(706.0, 3.039, 419.485),
    term(365.0, 5.099, 426.598),
    term(330.0, 5.279, 433.712),
    term(219.0, 3.828, 639.897),
    term(139.0, 1.043, 7.114),
    term(104.0, 6.157, 227.526),
    term(93.0, 1.98, 316.39),
    term(71.0, 4.15, 199.07),
    term(52.0, 2.88, 632.78),
    term(49.0, 4.43, 647.01),
    term(41.0, 3.16, 853.20),
    term(29.0, 4.53, 210.12),
];

const B3: &[PeriodicTerm] = &[
    term(666.0, 1.990, 213.299),
    term(632.0, 5.698, 206.186),
    term(398.0, 0.0, 0.0),
    term(188.0, 4.338, 220.413),
    term(92.0, 4.84, 419.48),
    term(52.0, 3.42, 433.71),
    term(42.0, 2.38, 426.60),
    term(26.0, 4.40, 227.53),
    term(21.0, 5.85, 199.07),
    term(18.0, 1.99, 639.90),
    term(11.0, 5.37, 7.11),
];

const B4: &[PeriodicTerm] = &[
    term(80.0, 1.12, 206.19),
    term(32.0, 3.12, 213.30),
    term(17.0, 2.48, 220.41),
    term(12.0, 3.14, 0.0),
    term(9.0, 0.38, 419.48),
    term(6.0, 1.56, 433.71),
    term(5.0, 2.63, 227.53),
    term(5.0, 1.28, 199.07),
];

const B5: &[PeriodicTerm] = &[term(8.0, 2.82, 206.19), term(1.0, 0.51, 220.41)];

const R0: &[PeriodicTerm] = &[
    term(955758136.0, 0.0, 0.0),
    term(52921382.0, 2.39226220, 213.29909544),
    term(1873680.0, 5.2354961, 206.1855484),
    term(1464664.0, 1.6476305, 426.5981909),
    term(821891.0, 5.935200, 316.391870),
    term(547507.0, 5.015326, 103.092774),
    term(371684.0, 2.271148, 220.412642),
    term(361778.0, 3.139043, 7.113547),
    term(140618.0, 5.704067, 632.783739),
    term(108975.0, 3.293136, 110.206321),
    term(69007.0, 5.94100, 419.48464),
    term(61053.0, 0.94038, 639.89729),
    term(48913.0, 1.55733, 202.25340),
    term(34144.0, 0.19519, 277.03499),
    term(32402.0, 5.47085, 949.17561),
    term(20937.0, 0.46349, 735.87651),
    term(20839.0, 1.52103, 433.71174),
    term(20747.0, 5.33256, 199.07200),
    term(15298.0, 3.05944, 529.69097),
    term(14296.0, 2.60434, 323.50542),
    term(12884.0, 1.64892, 138.51750),
    term(11993.0, 5.98051, 846.08283),
    term(11380.0, 1.73106, 522.57742),
    term(9796.0, 5.2048, 1265.5675),
    term(7753.0, 5.6310, 95.9792),
    term(6771.0, 3.0004, 14.2271),
    term(6466.0, 0.1773, 1052.2684),
    term(5850.0, 1.4552, 415.5525),
    term(5307.0, 0.5974, 63.7359),
    term(4696.0, 2.1492, 227.5262),
    term(4044.0, 1.6401, 209.3669),
    term(3688.0, 0.7802, 412.3711),
    term(3461.0, 1.8509, 175.1661),
    term(3420.0, 4.9462, 1581.9593),
    term(3401.0, 0.5539, 350.3321),
    term(3376.0, 3.6953, 224.3448),
    term(2976.0, 5.6847, 210.1177),
    term(2885.0, 1.3876, 838.9693),
    term(2881.0, 0.1796, 853.1964),
    term(2508.0, 3.5385, 742.9901),
    term(2448.0, 6.1841, 1368.6603),
    term(2406.0, 2.9656, 117.3199),
    term(2174.0, 0.0151, 340.7709),
    term(2024.0, 5.0541, 11.0457),
];

const R1: &[PeriodicTerm] = &[
    term(6182981.0, 0.2584352, 213.2990954),
    term(506578.0, 0.711147, 206.185548),
    term(341394.0, 5.796358, 426.598191),
    term(188491.0, 0.472157, 220.412642),
    term(186262.0, 3.141593, 0.0),
    term(143891.0, 1.407449, 7.113547),
    term(49621.0, 6.01744, 103.09277),
    term(20928.0, 5.09246, 639.89729),
    term(19953.0, 1.17560, 419.48464),
    term(18840.0, 1.60820, 110.20632),
    term(13877.0, 0.75886, 199.07200),
    term(12893.0, 5.94330, 433.71174),
    term(5397.0, 1.2885, 14.2271),
    term(4869.0, 0.8679, 323.5054),
    term(4247.0, 0.3930, 227.5262),
    term(3252.0, 1.2585, 95.9792),
    term(3081.0, 3.4366, 522.5774),
    term(2909.0, 4.6068, 202.2534),
    term(2856.0, 2.1673, 735.8765),
    term(1988.0, 2.4505, 412.3711),
    term(1941.0, 6.0239, 209.3669),
    term(1581.0, 1.2919, 210.1177),
    term(1340.0, 4.3080, 853.1964),
    term(1316.0, 1.2530, 117.3199),
    term(1203.0, 1.8665, 316.3919),
    term(1091.0, 0.0753, 216.4805),
    term(966.0, 0.480, 632.784),
    term(954.0, 5.152, 647.011),
];

const R2: &[PeriodicTerm] = &[
    term(436902.0, 4.786717, 213.299095),
    term(71923.0, 2.50070, 206.18555),
    term(49767.0, 4.97168, 220.41264),
    term(43221.0, 3.86940, 426.59819),
    term(29646.0, 5.96310, 7.11355),
    term(4721.0, 2.4753, 199.0720),
    term(4142.0, 4.1067, 433.7117),
    term(3789.0, 3.0977, 639.8973),
    term(2964.0, 1.3721, 103.0928),
    term(2556.0, 2.8507, 419.4846),
    term(2327.0, 0.0, 0.0),
    term(2208.0, 6.2759, 110.2063),
    term(2188.0, 5.8555, 14.2271),
    term(1957.0, 4.9245, 227.5262),
    term(924.0, 5.464, 323.505),
    term(706.0, 2.971, 95.979),
    term(546.0, 4.129, 412.371),
    term(431.0, 5.178, 522.577),
    term(405.0, 4.173, 209.367),
    term(391.0, 4.481, 216.480),
    term(374.0, 5.834, 117.320),
    term(361.0, 3.277, 647.011),
    term(356.0, 3.192, 210.118),
    term(326.0, 2.269, 853.196),
];

const R3: &[PeriodicTerm] = &[
    term(20315.0, 3.02187, 213.29910),
    term(8924.0, 3.1914, 220.4126),
    term(6909.0, 4.3517, 206.1855),
    term(4087.0, 4.2241, 7.1135),
    term(3879.0, 2.0106, 426.5982),
    term(1071.0, 4.2036, 199.0720),
    term(907.0, 2.283, 433.712),
    term(606.0, 3.175, 227.526),
    term(597.0, 4.135, 14.227),
    term(483.0, 1.173, 639.897),
    term(393.0, 0.0, 0.0),
    term(229.0, 4.698, 419.485),
    term(188.0, 4.590, 110.206),
    term(150.0, 3.202, 103.093),
    term(121.0, 3.768, 323.505),
    term(102.0, 4.710, 95.979),
    term(101.0, 5.819, 412.371),
    term(93.0, 1.44, 647.01),
    term(84.0, 2.63, 216.48),
];

const R4: &[PeriodicTerm] = &[
    term(1202.0, 1.4150, 220.4126),
    term(708.0, 1.162, 213.299),
    term(516.0, 6.240, 206.186),
    term(427.0, 2.469, 7.114),
    term(268.0, 5.813, 426.598),
    term(170.0, 5.954, 199.072),
    term(150.0, 0.480, 433.712),
    term(145.0, 1.442, 227.526),
    term(121.0, 2.405, 14.227),
    term(47.0, 5.57, 639.90),
    term(19.0, 5.86, 647.01),
    term(17.0, 0.53, 440.83),
    term(16.0, 2.90, 110.21),
    term(15.0, 0.30, 419.48),
    term(14.0, 1.30, 412.37),
    term(13.0, 2.09, 323.51),
    term(11.0, 0.22, 95.98),
    term(11.0, 2.46, 117.32),
];

const R5: &[PeriodicTerm] = &[
    term(129.0, 5.913, 220.413),
    term(32.0, 0.69, 7.11),
    term(27.0, 5.91, 227.53),
    term(20.0, 4.95, 433.71),
    term(20.0, 0.67, 14.23),
    term(14.0, 2.67, 206.19),
    term(14.0, 1.46, 199.07),
    term(13.0, 4.59, 426.60),
    term(7.0, 4.63, 213.30),
];
