//! Truncated VSOP87D series for Jupiter.

use crate::series::{term, PeriodicTerm, PlanetTables};

pub(crate) static TABLES: PlanetTables = PlanetTables {
    longitude: &[L0, L1, L2, L3, L4, L5],
    latitude: &[B0, B1, B2, B3, B4],
    radius: &[R0, R1, R2, R3, R4, R5],
};

const L0: &[PeriodicTerm] = &[
    term(59954691.0, 0.0, 0.0),
    term(9695899.0, 5.0619179, 529.6909651),
    term(573610.0, 1.4440623, 7.1135470),
    term(306389.0, 5.4173473, 1059.3819302),
    term(97178.0, 4.1426530, 632.7837393),
    term(72903.0, 3.6404258, 522.5774181),
    term(64264.0, 3.4114542, 103.0927742),
    term(39806.0, 2.2937668, 419.4846439),
    term(38858.0, 1.2723206, 316.3918697),
    term(27965.0, 1.7845459, 536.8045121),
    term(13590.0, 5.7748104, 1589.0728950),
    term(8769.0, 3.6300, 949.1756),
    term(8246.0, 3.5822, 206.1855),
    term(7610.0, 5.0339, 735.8765),
    term(6778.0, 3.9848, 1052.2684),
    term(6466.0, 0.3063, 988.5326),
    term(6263.0, 0.0250, 213.2991),
    term(6114.0, 4.5132, 1162.4747),
    term(4897.0, 1.3211, 625.6702),
];

const L1: &[PeriodicTerm] = &[
    term(52993480757.0, 0.0, 0.0),
    term(489741.0, 4.220667, 529.690965),
    term(228919.0, 6.026475, 7.113547),
    term(27655.0, 4.57266, 1059.38193),
    term(20721.0, 5.45939, 522.57742),
    term(12106.0, 0.16986, 536.80451),
    term(6068.0, 4.4242, 103.0928),
    term(5434.0, 3.9848, 419.4846),
    term(4238.0, 5.8901, 14.2271),
    term(2212.0, 5.2677, 206.1855),
    term(1746.0, 4.9267, 1589.0729),
    term(1296.0, 5.5513, 3.1814),
    term(1173.0, 5.8565, 1052.2684),
    term(1163.0, 0.5145, 3.9322),
    term(1099.0, 5.3070, 515.4639),
    term(1007.0, 0.4648, 735.8765),
    term(1004.0, 3.1504, 426.5982),
    term(848.0, 5.758, 110.206),
    term(827.0, 4.803, 213.299),
    term(816.0, 0.586, 1066.495),
];

const L2: &[PeriodicTerm] = &[
    term(47234.0, 4.32148, 7.11355),
    term(38966.0, 0.0, 0.0),
    term(30629.0, 2.93021, 529.69097),
    term(3189.0, 1.0550, 522.5774),
    term(2729.0, 4.8455, 536.8045),
    term(2723.0, 3.4141, 1059.3819),
    term(1721.0, 4.1873, 14.2271),
    term(383.0, 5.768, 419.485),
    term(378.0, 0.760, 515.464),
    term(367.0, 6.055, 103.093),
    term(337.0, 3.786, 3.932),
    term(308.0, 0.694, 206.186),
    term(218.0, 3.814, 1589.073),
    term(199.0, 5.340, 1066.495),
    term(197.0, 2.484, 3.181),
    term(156.0, 1.406, 1052.268),
    term(146.0, 3.814, 639.897),
    term(142.0, 1.634, 426.598),
    term(130.0, 5.837, 412.371),
    term(117.0, 1.414, 625.670),
];

const L3: &[PeriodicTerm] = &[
    term(6502.0, 2.5986, 7.1135),
    term(1357.0, 1.3464, 529.6910),
    term(471.0, 2.475, 14.227),
    term(417.0, 3.245, 536.805),
    term(353.0, 2.974, 522.577),
    term(155.0, 2.076, 1059.382),
    term(87.0, 2.51, 515.46),
    term(44.0, 0.0, 0.0),
    term(34.0, 3.83, 1066.50),
    term(28.0, 2.45, 206.19),
];

const L4: &[PeriodicTerm] = &[
    term(669.0, 0.853, 7.114),
    term(114.0, 3.142, 0.0),
    term(100.0, 0.743, 14.227),
    term(50.0, 1.65, 536.80),
    term(44.0, 5.82, 529.69),
    term(32.0, 4.86, 522.58),
];

const L5: &[PeriodicTerm] = &[
    term(50.0, 5.26, 7.11),
    term(16.0, 5.25, 14.23),
    term(4.0, 0.01, 536.80),
];

const B0: &[PeriodicTerm] = &[
    term(2268616.0, 3.5585261, 529.6909651),
    term(110090.0, 0.0, 0.0),
    term(109972.0, 3.908093, 1059.381930),
    term(8101.0, 3.6051, 522.5774),
    term(6438.0, 0.3063, 968.1370),
    term(6044.0, 4.2588, 1589.0729),
    term(1107.0, 2.9853, 1162.4747),
    term(944.0, 1.675, 426.598),
    term(942.0, 2.936, 1052.268),
    term(894.0, 1.754, 7.114),
    term(836.0, 5.179, 103.093),
    term(767.0, 2.155, 632.784),
    term(684.0, 3.678, 213.299),
    term(629.0, 0.643, 1066.495),
    term(559.0, 0.014, 846.083),
    term(532.0, 2.703, 110.206),
    term(464.0, 1.173, 949.176),
    term(431.0, 2.608, 419.485),
    term(351.0, 4.611, 2118.764),
];

const B1: &[PeriodicTerm] = &[
    term(177352.0, 5.701665, 529.690965),
    term(3230.0, 5.7794, 1059.3819),
    term(3081.0, 5.4746, 522.5774),
    term(2212.0, 4.7348, 536.8045),
    term(1694.0, 3.1416, 0.0),
    term(346.0, 4.746, 1052.268),
    term(234.0, 5.189, 1066.495),
    term(196.0, 6.186, 7.114),
    term(150.0, 3.927, 1589.073),
    term(114.0, 3.439, 632.784),
    term(97.0, 2.91, 949.18),
    term(82.0, 5.08, 1162.47),
    term(77.0, 2.51, 103.09),
    term(77.0, 0.61, 419.48),
    term(74.0, 5.50, 515.46),
    term(61.0, 5.45, 213.30),
    term(50.0, 3.95, 735.88),
    term(46.0, 0.54, 110.21),
    term(45.0, 1.90, 846.08),
    term(37.0, 4.70, 543.92),
    term(36.0, 6.11, 316.39),
    term(32.0, 4.92, 1581.96),
];

const B2: &[PeriodicTerm] = &[
    term(8094.0, 1.4632, 529.6910),
    term(813.0, 3.1416, 0.0),
    term(742.0, 0.957, 522.577),
    term(399.0, 2.899, 536.805),
    term(342.0, 1.447, 1059.382),
    term(74.0, 0.41, 1052.27),
    term(46.0, 3.48, 1066.50),
    term(30.0, 1.93, 1589.07),
    term(29.0, 0.99, 515.46),
    term(23.0, 4.27, 7.11),
    term(14.0, 2.92, 543.92),
    term(12.0, 5.22, 632.78),
    term(11.0, 4.88, 949.18),
    term(6.0, 6.21, 1045.15),
];

const B3: &[PeriodicTerm] = &[
    term(252.0, 3.381, 529.691),
    term(122.0, 2.733, 522.577),
    term(49.0, 1.04, 536.80),
    term(11.0, 2.31, 1052.27),
    term(8.0, 2.77, 515.46),
    term(7.0, 4.25, 1059.38),
    term(6.0, 1.78, 1066.50),
    term(4.0, 1.13, 543.92),
    term(3.0, 3.14, 0.0),
];

const B4: &[PeriodicTerm] = &[
    term(15.0, 3.36, 529.69),
    term(5.0, 4.32, 522.58),
    term(4.0, 2.18, 536.80),
];

const R0: &[PeriodicTerm] = &[
    term(520887429.0, 0.0, 0.0),
    term(25209327.0, 3.49108640, 529.69096509),
    term(610600.0, 3.841154, 1059.381930),
    term(282029.0, 2.574199, 632.783739),
    term(187647.0, 2.075904, 522.577418),
    term(86793.0, 0.71001, 419.48464),
    term(72063.0, 0.21466, 536.80451),
    term(65517.0, 5.97996, 316.39187),
    term(30135.0, 2.16132, 949.17561),
    term(29135.0, 1.67759, 103.09277),
    term(23947.0, 0.27458, 7.11355),
    term(23453.0, 3.54023, 735.87651),
    term(22284.0, 4.19363, 1589.07290),
    term(13033.0, 2.96043, 1162.47470),
    term(12749.0, 2.71550, 1052.26838),
    term(9703.0, 1.9067, 206.1855),
    term(9161.0, 4.4135, 213.2991),
    term(7895.0, 2.4791, 426.5982),
    term(7058.0, 2.1818, 1265.5675),
    term(6138.0, 6.2642, 846.0828),
    term(5477.0, 5.6573, 639.8973),
    term(4170.0, 2.0161, 515.4639),
    term(4137.0, 2.7222, 625.6702),
    term(3503.0, 0.5653, 1066.4955),
    term(2617.0, 2.0099, 1581.9593),
    term(2500.0, 4.5518, 838.9693),
    term(2128.0, 6.1275, 742.9901),
    term(1912.0, 0.8562, 412.3711),
];

const R1: &[PeriodicTerm] = &[
    term(1271802.0, 2.6493751, 529.6909651),
    term(61662.0, 3.00076, 1059.38193),
    term(53444.0, 3.89718, 522.57742),
    term(41390.0, 0.0, 0.0),
    term(31185.0, 4.88277, 536.80451),
    term(11847.0, 2.41330, 419.48464),
    term(9166.0, 4.7598, 7.1135),
    term(3404.0, 3.3469, 1589.0729),
    term(3203.0, 5.2108, 735.8765),
    term(3176.0, 2.7930, 103.0928),
    term(2806.0, 3.7422, 515.4639),
    term(2677.0, 4.3305, 1052.2684),
    term(2600.0, 3.6344, 206.1855),
    term(2412.0, 1.4695, 426.5982),
    term(2101.0, 3.9276, 639.8973),
    term(1646.0, 5.3095, 1066.4955),
    term(1641.0, 4.4163, 625.6702),
];

const R2: &[PeriodicTerm] = &[
    term(79645.0, 1.35866, 529.69097),
    term(8252.0, 5.7777, 522.5774),
    term(7030.0, 3.2748, 536.8045),
    term(5314.0, 1.8384, 1059.3819),
    term(1861.0, 2.9768, 7.1135),
    term(964.0, 5.480, 515.464),
    term(836.0, 4.199, 419.485),
    term(498.0, 3.142, 0.0),
    term(427.0, 2.228, 639.897),
    term(406.0, 3.783, 1066.495),
    term(377.0, 2.242, 1589.073),
    term(363.0, 5.368, 206.186),
    term(342.0, 6.099, 1052.268),
    term(339.0, 6.127, 625.670),
    term(333.0, 0.003, 426.598),
];

const R3: &[PeriodicTerm] = &[
    term(3519.0, 6.0580, 529.6910),
    term(1073.0, 1.6732, 536.8045),
    term(916.0, 1.413, 522.577),
    term(342.0, 0.523, 1059.382),
    term(255.0, 1.196, 7.114),
    term(222.0, 0.952, 515.464),
    term(90.0, 3.14, 0.0),
    term(69.0, 2.27, 1066.50),
    term(58.0, 1.41, 543.92),
    term(58.0, 0.53, 639.90),
];

const R4: &[PeriodicTerm] = &[
    term(129.0, 0.084, 536.805),
    term(113.0, 4.249, 529.691),
    term(83.0, 3.30, 522.58),
    term(38.0, 2.73, 515.46),
    term(27.0, 5.69, 7.11),
    term(18.0, 5.40, 1059.38),
    term(13.0, 6.02, 543.92),
];

const R5: &[PeriodicTerm] = &[
    term(11.0, 4.75, 536.80),
    term(4.0, 5.92, 522.58),
    term(2.0, 5.57, 515.46),
];
