//!                         Ratio-2 (halving) scales                         !//
//!
//! Copyright 2025 HaמuL
//! Description: Single-octave scale factors for N -> N/2 and N/2 -> N
//!
//! for i in range(N // 2):
//!    print(math.cos(i / (2 * N) * math.pi), end=", ")        # HALVE_N_(N/2)
//!    print(1.0 / math.cos(i / (2 * N) * math.pi), end=", ")  # DOUBLE_(N/2)_N

pub(super) static HALVE_2_1: [f64; 1] = [
    1.0,
];

pub(super) static HALVE_4_2: [f64; 2] = [
    1.0, 0.9238795325112867,
];

pub(super) static HALVE_8_4: [f64; 4] = [
    1.0, 0.9807852804032304, 0.9238795325112867,
    0.8314696123025452,
];

pub(super) static HALVE_16_8: [f64; 8] = [
    1.0, 0.9951847266721969, 0.9807852804032304,
    0.9569403357322088, 0.9238795325112867, 0.881921264348355,
    0.8314696123025452, 0.773010453362737,
];

pub(super) static HALVE_32_16: [f64; 16] = [
    1.0, 0.9987954562051724, 0.9951847266721969,
    0.989176509964781, 0.9807852804032304, 0.970031253194544,
    0.9569403357322088, 0.9415440651830208, 0.9238795325112867,
    0.9039892931234433, 0.881921264348355, 0.8577286100002721,
    0.8314696123025452, 0.8032075314806449, 0.773010453362737,
    0.7409511253549591,
];

pub(super) static HALVE_64_32: [f64; 32] = [
    1.0, 0.9996988186962042, 0.9987954562051724,
    0.9972904566786902, 0.9951847266721969, 0.99247953459871,
    0.989176509964781, 0.9852776423889412, 0.9807852804032304,
    0.9757021300385286, 0.970031253194544, 0.9637760657954398,
    0.9569403357322088, 0.9495281805930367, 0.9415440651830208,
    0.932992798834739, 0.9238795325112867, 0.9142097557035307,
    0.9039892931234433, 0.8932243011955153, 0.881921264348355,
    0.8700869911087115, 0.8577286100002721, 0.8448535652497071,
    0.8314696123025452, 0.8175848131515837, 0.8032075314806449,
    0.7883464276266063, 0.773010453362737, 0.7572088465064846,
    0.7409511253549591, 0.724247082951467,
];

pub(super) static HALVE_128_64: [f64; 64] = [
    1.0, 0.9999247018391445, 0.9996988186962042,
    0.9993223845883495, 0.9987954562051724, 0.9981181129001492,
    0.9972904566786902, 0.996312612182778, 0.9951847266721969,
    0.9939069700023561, 0.99247953459871, 0.99090263542778,
    0.989176509964781, 0.9873014181578584, 0.9852776423889412,
    0.9831054874312163, 0.9807852804032304, 0.9783173707196277,
    0.9757021300385286, 0.9729399522055602, 0.970031253194544,
    0.9669764710448521, 0.9637760657954398, 0.9604305194155658,
    0.9569403357322088, 0.9533060403541939, 0.9495281805930367,
    0.9456073253805213, 0.9415440651830208, 0.937339011912575,
    0.932992798834739, 0.9285060804732156, 0.9238795325112867,
    0.9191138516900578, 0.9142097557035307, 0.9091679830905224,
    0.9039892931234433, 0.8986744656939538, 0.8932243011955153,
    0.8876396204028539, 0.881921264348355, 0.8760700941954066,
    0.8700869911087115, 0.8639728561215868, 0.8577286100002721,
    0.8513551931052652, 0.8448535652497071, 0.8382247055548381,
    0.8314696123025452, 0.8245893027850253, 0.8175848131515837,
    0.8104571982525948, 0.8032075314806449, 0.7958369046088836,
    0.7883464276266063, 0.7807372285720945, 0.773010453362737,
    0.765167265622459, 0.7572088465064846, 0.7491363945234594,
    0.7409511253549591, 0.7326542716724128, 0.724247082951467,
    0.7157308252838186,
];

pub(super) static HALVE_256_128: [f64; 128] = [
    1.0, 0.9999811752826011, 0.9999247018391445,
    0.9998305817958234, 0.9996988186962042, 0.9995294175010931,
    0.9993223845883495, 0.9990777277526454, 0.9987954562051724,
    0.9984755805732948, 0.9981181129001492, 0.9977230666441916,
    0.9972904566786902, 0.9968202992911657, 0.996312612182778,
    0.9957674144676598, 0.9951847266721969, 0.9945645707342554,
    0.9939069700023561, 0.9932119492347945, 0.99247953459871,
    0.9917097536690995, 0.99090263542778, 0.9900582102622971,
    0.989176509964781, 0.9882575677307495, 0.9873014181578584,
    0.9863080972445987, 0.9852776423889412, 0.984210092386929,
    0.9831054874312163, 0.9819638691095552, 0.9807852804032304,
    0.9795697656854405, 0.9783173707196277, 0.9770281426577544,
    0.9757021300385286, 0.9743393827855759, 0.9729399522055602,
    0.9715038909862518, 0.970031253194544, 0.9685220942744174,
    0.9669764710448521, 0.9653944416976894, 0.9637760657954398,
    0.9621214042690416, 0.9604305194155658, 0.9587034748958716,
    0.9569403357322088, 0.9551411683057708, 0.9533060403541939,
    0.9514350209690083, 0.9495281805930367, 0.9475855910177411,
    0.9456073253805213, 0.9435934581619604, 0.9415440651830208,
    0.9394592236021899, 0.937339011912575, 0.9351835099389476,
    0.932992798834739, 0.9307669610789837, 0.9285060804732156,
    0.9262102421383114, 0.9238795325112867, 0.921514039342042,
    0.9191138516900578, 0.9166790599210427, 0.9142097557035307,
    0.9117060320054299, 0.9091679830905224, 0.9065957045149153,
    0.9039892931234433, 0.901348847046022, 0.8986744656939538,
    0.8959662497561852, 0.8932243011955153, 0.8904487232447579,
    0.8876396204028539, 0.8847970984309378, 0.881921264348355,
    0.8790122264286335, 0.8760700941954066, 0.8730949784182901,
    0.8700869911087115, 0.8670462455156926, 0.8639728561215868,
    0.8608669386377673, 0.8577286100002721, 0.8545579883654005,
    0.8513551931052652, 0.8481203448032972, 0.8448535652497071,
    0.8415549774368984, 0.8382247055548381, 0.83486287498638,
    0.8314696123025452, 0.8280450452577558, 0.8245893027850253,
    0.8211025149911046, 0.8175848131515837, 0.8140363297059484,
    0.8104571982525948, 0.8068475535437993, 0.8032075314806449,
    0.799537269107905, 0.7958369046088836, 0.7921065773002124,
    0.7883464276266063, 0.7845565971555752, 0.7807372285720945,
    0.7768884656732324, 0.773010453362737, 0.7691033376455797,
    0.765167265622459, 0.7612023854842618, 0.7572088465064846,
    0.7531867990436125, 0.7491363945234594, 0.7450577854414661,
    0.7409511253549591, 0.7368165688773699, 0.7326542716724128,
    0.7284643904482252, 0.724247082951467, 0.7200025079613817,
    0.7157308252838186, 0.7114321957452164,
];

pub(super) static DOUBLE_1_2: [f64; 1] = [
    1.0,
];

pub(super) static DOUBLE_2_4: [f64; 2] = [
    1.0, 1.082392200292394,
];

pub(super) static DOUBLE_4_8: [f64; 4] = [
    1.0, 1.0195911582083184, 1.082392200292394,
    1.2026897738700906,
];

pub(super) static DOUBLE_8_16: [f64; 8] = [
    1.0, 1.0048385723763114, 1.0195911582083184,
    1.0449972298793777, 1.082392200292394, 1.1338880696327154,
    1.2026897738700906, 1.2936435667199802,
];

pub(super) static DOUBLE_16_32: [f64; 16] = [
    1.0, 1.0012059964703925, 1.0048385723763114,
    1.0109419197950873, 1.0195911582083184, 1.030894619845249,
    1.0449972298793777, 1.0620851821795683, 1.082392200292394,
    1.106207792068889, 1.1338880696327154, 1.1658699364122678,
    1.2026897738700906, 1.2450082460713296, 1.2936435667199802,
    1.3496166829100114,
];

pub(super) static DOUBLE_32_64: [f64; 32] = [
    1.0, 1.000301272041302, 1.0012059964703925,
    1.0027169048928168, 1.0048385723763114, 1.0075774513620885,
    1.0109419197950873, 1.0149423441451106, 1.0195911582083184,
    1.0249029588164493, 1.030894619845249, 1.0375854262106656,
    1.0449972298793777, 1.05315463030854, 1.0620851821795683,
    1.071819633815984, 1.082392200292394, 1.0938408759710176,
    1.106207792068889, 1.1195396258941603, 1.1338880696327154,
    1.14931036806532, 1.1658699364122678, 1.183637071714833,
    1.2026897738700906, 1.2231146957650199, 1.2450082460713296,
    1.2684778733768063, 1.2936435667199802, 1.3206396156274123,
    1.3496166829100114, 1.3807442564004246,
];

pub(super) static DOUBLE_64_128: [f64; 64] = [
    1.0, 1.0000753038310954, 1.000301272041302,
    1.0006780748856432, 1.0012059964703925, 1.0018854352761746,
    1.0027169048928168, 1.0037010349684758, 1.0048385723763114,
    1.0061303826027395, 1.0075774513620885, 1.0091808864432907,
    1.0109419197950873, 1.0128619098571083, 1.0149423441451106,
    1.0171848420996286, 1.0195911582083184, 1.0221631854133624,
    1.0249029588164493, 1.0278126596950792, 1.030894619845249,
    1.0341513262669824, 1.0375854262106656, 1.0411997326037834,
    1.0449972298793777, 1.048981080229448, 1.05315463030854,
    1.0575214184149753, 1.0620851821795683, 1.0668498667942665,
    1.071819633815984, 1.076998870583968, 1.082392200292394,
    1.0880044927635566, 1.0938408759710176, 1.099906748366472,
    1.106207792068889, 1.1127499869797712, 1.1195396258941603,
    1.1265833306834045, 1.1338880696327154, 1.1414611760242908,
    1.14931036806532, 1.1574437702696416, 1.1658699364122678,
    1.1745978741875787, 1.183637071714833, 1.1929975260489125,
    1.2026897738700906, 1.212724924544292, 1.2231146957650199,
    1.2338714520101413, 1.2450082460713296, 1.2565388639415422,
    1.2684778733768063, 1.2808406764833278, 1.2936435667199802,
    1.3069037907502565, 1.3206396156274123, 1.3348704018526827,
    1.3496166829100114, 1.364900251952839, 1.3807442564004246,
    1.3971733012944583,
];

pub(super) static DOUBLE_128_256: [f64; 128] = [
    1.0, 1.0000188250717756, 1.0000753038310954,
    1.000169446911568, 1.000301272041302, 1.0004708040510537,
    1.0006780748856432, 1.000923123618649, 1.0012059964703925,
    1.0015267468292313, 1.0018854352761746, 1.0022821296128461,
    1.0027169048928168, 1.0031898434563336, 1.0037010349684758,
    1.004250576460772, 1.0048385723763114, 1.0054651346183907,
    1.0061303826027395, 1.0068344433133685, 1.0075774513620885,
    1.0083595490517547, 1.0091808864432907, 1.0100416214265513,
    1.0109419197950873, 1.0118819553248792, 1.0128619098571083,
    1.0138819733850424, 1.0149423441451106, 1.0160432287122527,
    1.0171848420996286, 1.018367407862776, 1.0195911582083184,
    1.0208563341073147, 1.0221631854133624, 1.023511970985561,
    1.0249029588164493, 1.0263364261650412, 1.0278126596950792,
    1.0293319556186435, 1.030894619845249, 1.032500968136576,
    1.0341513262669824, 1.0358460301899555, 1.0375854262106656,
    1.0393698711647894, 1.0411997326037834, 1.0430753889867916,
    1.0449972298793777, 1.0469656561592877, 1.048981080229448,
    1.05104392623842, 1.05315463030854, 1.0553136407719792,
    1.0575214184149753, 1.0597784367304905, 1.0620851821795683,
    1.064442154461667, 1.0668498667942665, 1.0693088462020506,
    1.071819633815984, 1.074382785182618, 1.076998870583968,
    1.0796684753683274, 1.082392200292394, 1.0851706618750994,
    1.0880044927635566, 1.09089434211155, 1.0938408759710176,
    1.0968447776969894, 1.099906748366472, 1.103027507211786,
    1.106207792068889, 1.109448359841238, 1.1127499869797712,
    1.116113469979617, 1.1195396258941603, 1.1230292928671308,
    1.1265833306834045, 1.1302026213392407, 1.1338880696327154,
    1.1376406037751392, 1.1414611760242908, 1.1453507633403328,
    1.14931036806532, 1.1533410186272481, 1.1574437702696416,
    1.161619705807725, 1.1658699364122678, 1.1701956024222546,
    1.1745978741875787, 1.17907795294302, 1.183637071714833,
    1.1882764962613297, 1.1929975260489125, 1.1978014952650926,
    1.2026897738700906, 1.2076637686887164, 1.212724924544292,
    1.2178747254364863, 1.2231146957650199, 1.228446401601298,
    1.2338714520101413, 1.239391500423897, 1.2450082460713296,
    1.2507234354638204, 1.2565388639415422, 1.2624563772824158,
    1.2684778733768063, 1.2746053039710823, 1.2808406764833278,
    1.287186055894683, 1.2936435667199802, 1.3002153950615447,
    1.3069037907502565, 1.313711069578191, 1.3206396156274123,
    1.3276918836997513, 1.3348704018526827, 1.3421777740467125,
    1.3496166829100114, 1.357189892626359, 1.364900251952839,
    1.3727506973741002, 1.3807442564004246, 1.3888840510172729,
    1.3971733012944583, 1.4056153291636069,
];
