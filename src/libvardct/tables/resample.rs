//!                          Ratio-8 resample scales                         !//
//!
//! Copyright 2025 HaמuL
//! Description: Scale factors relating the low-frequency coefficients of an
//!              N-point DCT to those of an N/8-point DCT

// Averaging pixels k and k+1 of the n-th basis function of an N-point DCT
// gives cos(n/(2N) pi) times the n-th basis function of an N/2-point DCT,
// evaluated in pixel k/2. A ratio-8 factor is three such halvings:
//
// for i in range(N // 8):
//    v = math.cos(i / (2 * N) * math.pi)
//    v *= math.cos(i / (N) * math.pi)
//    v *= math.cos(i / (N / 2) * math.pi)
//    print(v, end=", ")
//
// The upsampling tables are the reciprocals.

pub(super) static DOWN_8_1: [f64; 1] = [
    1.0,
];

pub(super) static DOWN_16_2: [f64; 2] = [
    1.0, 0.9017641950288744,
];

pub(super) static DOWN_32_4: [f64; 4] = [
    1.0, 0.9748868211368795, 0.9017641950288744,
    0.7870549181591013,
];

pub(super) static DOWN_64_8: [f64; 8] = [
    1.0, 0.9936866130906366, 0.9748868211368796,
    0.9440180941651672, 0.9017641950288744, 0.8490574973847023,
    0.7870549181591013, 0.7171081282466044,
];

pub(super) static DOWN_128_16: [f64; 16] = [
    1.0, 0.9984194528776054, 0.9936866130906366,
    0.9858278282666936, 0.9748868211368796, 0.9609244059440204,
    0.9440180941651672, 0.9242615922757944, 0.9017641950288744,
    0.8766500784429904, 0.8490574973847023, 0.8191378932865928,
    0.7870549181591013, 0.7529833816270532, 0.7171081282466044,
    0.6796228528314651,
];

pub(super) static DOWN_256_32: [f64; 32] = [
    1.0, 0.9996047255830407, 0.9984194528776054,
    0.9964458326264695, 0.9936866130906366, 0.9901456355893141,
    0.9858278282666936, 0.9807391980963174, 0.9748868211368796,
    0.9682788310563117, 0.9609244059440204, 0.9528337534340876,
    0.9440180941651672, 0.9344896436056892, 0.9242615922757944,
    0.913348084400198, 0.9017641950288744, 0.8895259056651056,
    0.8766500784429904, 0.8631544288990163, 0.8490574973847023,
    0.8343786191696513, 0.8191378932865928, 0.8033561501721485,
    0.7870549181591013, 0.7702563888779096, 0.7529833816270532,
    0.7352593067735488, 0.7171081282466044, 0.6985543251889097,
    0.6796228528314651, 0.6603391026591464,
];

pub(super) static UP_1_8: [f64; 1] = [
    1.0,
];

pub(super) static UP_2_16: [f64; 2] = [
    1.0, 1.1089373535927318,
];

pub(super) static UP_4_32: [f64; 4] = [
    1.0, 1.025760096781116, 1.1089373535927318,
    1.2705593687654873,
];

pub(super) static UP_8_64: [f64; 8] = [
    1.0, 1.0063534990068217, 1.0257600967811158,
    1.0593017296817173, 1.1089373535927318, 1.1777765381970435,
    1.2705593687654873, 1.3944898413647777,
];

pub(super) static UP_16_128: [f64; 16] = [
    1.0, 1.0015830492062623, 1.0063534990068217,
    1.0143759095928793, 1.0257600967811158, 1.0406645869480142,
    1.0593017296817173, 1.0819447744633812, 1.1089373535927318,
    1.1407059950032632, 1.1777765381970435, 1.2207956782315876,
    1.2705593687654873, 1.3280505578213306, 1.3944898413647777,
    1.4714043176061107,
];

pub(super) static UP_32_256: [f64; 32] = [
    1.0, 1.0003954307206069, 1.0015830492062623,
    1.0035668445360069, 1.0063534990068217, 1.009952439375063,
    1.0143759095928793, 1.0196390660647288, 1.0257600967811158,
    1.0327603660498115, 1.0406645869480142, 1.049501024072585,
    1.0593017296817173, 1.0701028169146336, 1.0819447744633812,
    1.0948728278734026, 1.1089373535927318, 1.124194353004584,
    1.1407059950032632, 1.158541237256391, 1.1777765381970435,
    1.1984966740820495, 1.2207956782315876, 1.244777922949508,
    1.2705593687654873, 1.2982690107339132, 1.3280505578213306,
    1.3600643892400104, 1.3944898413647777, 1.4315278911623237,
    1.4714043176061107, 1.5143734423314616,
];
