//!                          Constant table provider                         !//
//!
//! Copyright 2025 HaמuL
//! Description: Validated access to the resample and butterfly constants

mod butterfly;
mod halving;
mod resample;

use crate::{error::{Result, TransformError}, sizes::TransformSize};
use butterfly::*;
use halving::*;
use resample::*;

// Table-of-tables, indexed by log2 of a size
// Ratio-8 tables: DOWN by log2(to), UP by log2(from)
static RATIO8_DOWN: [&[f64]; 6] = [&DOWN_8_1, &DOWN_16_2, &DOWN_32_4, &DOWN_64_8, &DOWN_128_16, &DOWN_256_32];
static RATIO8_UP: [&[f64]; 6] = [&UP_1_8, &UP_2_16, &UP_4_32, &UP_8_64, &UP_16_128, &UP_32_256];

// Ratio-2 tables: HALVE by log2(to), DOUBLE by log2(from)
static RATIO2_DOWN: [&[f64]; 8] = [
    &HALVE_2_1, &HALVE_4_2, &HALVE_8_4, &HALVE_16_8,
    &HALVE_32_16, &HALVE_64_32, &HALVE_128_64, &HALVE_256_128,
];
static RATIO2_UP: [&[f64]; 8] = [
    &DOUBLE_1_2, &DOUBLE_2_4, &DOUBLE_4_8, &DOUBLE_8_16,
    &DOUBLE_16_32, &DOUBLE_32_64, &DOUBLE_64_128, &DOUBLE_128_256,
];

// Butterfly tables by log2(n) - 2
static MULTIPLIERS: [&[f64]; 7] = [&WC_4, &WC_8, &WC_16, &WC_32, &WC_64, &WC_128, &WC_256];

fn ratio_table(from: TransformSize, to: TransformSize, ratio_log2: u32, down: &'static [&'static [f64]], up: &'static [&'static [f64]]) -> Option<&'static [f64]> {
    if from.ratio_log2(to) != ratio_log2 { return None; }
    let small = from.min(to).log2() as usize;
    return Some(if from > to { down[small] } else { up[small] });
}

/// resample_scales
/// Ratio-8 table for a size pair
/// Parameters: Source size, Destination size
/// Returns: min(from, to) scale factors, None unless the sizes differ by exactly 8x
pub fn resample_scales(from: TransformSize, to: TransformSize) -> Option<&'static [f64]> {
    return ratio_table(from, to, 3, &RATIO8_DOWN, &RATIO8_UP);
}

/// halving_scales
/// Ratio-2 table for a size pair, None unless the sizes differ by exactly 2x
pub fn halving_scales(from: TransformSize, to: TransformSize) -> Option<&'static [f64]> {
    return ratio_table(from, to, 1, &RATIO2_DOWN, &RATIO2_UP);
}

/// stage_scales
/// Any tabulated table for a size pair, ratio 8 or ratio 2
pub fn stage_scales(from: TransformSize, to: TransformSize) -> Option<&'static [f64]> {
    return resample_scales(from, to).or_else(|| halving_scales(from, to));
}

/// butterfly_multipliers
/// Odd-half multipliers of an n-point transform, None for n < 4
pub fn butterfly_multipliers(n: TransformSize) -> Option<&'static [f64]> {
    return (n.log2() as usize).checked_sub(2).map(|i| MULTIPLIERS[i]);
}

fn lookup(table: &[f64], index: usize) -> Result<f64> {
    return table.get(index).copied().ok_or(TransformError::IndexOutOfRange { index, len: table.len() });
}

/// resample_scale
/// Correction for coefficient i when moving between sizes 8x apart
/// Parameters: Source size, Destination size, Coefficient index
/// Returns: Tabulated constant
pub fn resample_scale(from: usize, to: usize, i: usize) -> Result<f64> {
    let (from_size, to_size) = (TransformSize::new(from)?, TransformSize::new(to)?);
    let table = resample_scales(from_size, to_size).ok_or(TransformError::UnsupportedRatio { from, to })?;
    return lookup(table, i);
}

/// halving_scale
/// Correction for coefficient i when moving between sizes 2x apart
/// Parameters: Source size, Destination size, Coefficient index
/// Returns: Tabulated constant
pub fn halving_scale(from: usize, to: usize, i: usize) -> Result<f64> {
    let (from_size, to_size) = (TransformSize::new(from)?, TransformSize::new(to)?);
    let table = halving_scales(from_size, to_size).ok_or(TransformError::UnsupportedRatio { from, to })?;
    return lookup(table, i);
}

/// butterfly_multiplier
/// Parameters: Transform size (4 to 256), Stage index below n/2
/// Returns: 1 / (2 cos((stage + 0.5) pi / n)), as tabulated
pub fn butterfly_multiplier(n: usize, stage: usize) -> Result<f64> {
    let table = butterfly_multipliers(TransformSize::new(n)?).ok_or(TransformError::IndexOutOfRange { index: stage, len: 0 })?;
    return lookup(table, stage);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn pairs(ratio_log2: u32) -> impl Iterator<Item = (TransformSize, TransformSize)> {
        TransformSize::ALL.into_iter().filter_map(move |to| {
            TransformSize::ALL.get((to.log2() + ratio_log2) as usize).map(|&from| (from, to))
        })
    }

    #[test]
    fn literal_spot_checks() {
        assert_eq!(resample_scale(64, 8, 3), Ok(0.9440180941651672));
        assert_eq!(butterfly_multiplier(4, 0), Ok(0.541196100146197));
        assert_eq!(butterfly_multiplier(4, 1), Ok(1.3065629648763764));
        assert_eq!(butterfly_multiplier(128, 63), Ok(40.744688103351834));
        assert_eq!(butterfly_multiplier(256, 127), Ok(81.48784219222516));
    }

    #[test]
    fn table_lengths_follow_the_smaller_size() {
        for (from, to) in pairs(3) {
            assert_eq!(resample_scales(from, to).unwrap().len(), to.len());
            assert_eq!(resample_scales(to, from).unwrap().len(), to.len());
        }
        for (from, to) in pairs(1) {
            assert_eq!(halving_scales(from, to).unwrap().len(), to.len());
            assert_eq!(halving_scales(to, from).unwrap().len(), to.len());
        }
        for n in TransformSize::ALL {
            assert_eq!(butterfly_multipliers(n).map(<[f64]>::len), if n.len() >= 4 { Some(n.len() / 2) } else { None });
        }
    }

    #[test]
    fn down_and_up_tables_are_reciprocal() {
        for (from, to) in pairs(3).chain(pairs(1)) {
            let (down, up) = (stage_scales(from, to).unwrap(), stage_scales(to, from).unwrap());
            for (d, u) in down.iter().zip(up) {
                assert_abs_diff_eq!(d * u, 1.0, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn ratio8_tables_are_three_halvings() {
        for (from, to) in pairs(3) {
            let (mid1, mid2) = (from.half().unwrap(), from.half().unwrap().half().unwrap());
            let chain = [halving_scales(from, mid1), halving_scales(mid1, mid2), halving_scales(mid2, to)];
            for (i, &scale) in resample_scales(from, to).unwrap().iter().enumerate() {
                let product: f64 = chain.iter().map(|t| t.unwrap()[i]).product();
                assert_abs_diff_eq!(product, scale, epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn multipliers_match_their_generator() {
        for n in TransformSize::ALL.into_iter().filter(|n| n.len() >= 4) {
            for (i, &w) in butterfly_multipliers(n).unwrap().iter().enumerate() {
                let expected = 1.0 / (2.0 * ((i as f64 + 0.5) * std::f64::consts::PI / n.len() as f64).cos());
                assert_abs_diff_eq!(w, expected, epsilon = 1e-12 * expected);
            }
        }
    }

    #[test]
    fn rejects_bad_lookups() {
        assert_eq!(resample_scale(64, 8, 8), Err(TransformError::IndexOutOfRange { index: 8, len: 8 }));
        assert_eq!(resample_scale(8, 64, 8), Err(TransformError::IndexOutOfRange { index: 8, len: 8 }));
        assert_eq!(resample_scale(64, 16, 0), Err(TransformError::UnsupportedRatio { from: 64, to: 16 }));
        assert_eq!(resample_scale(64, 64, 0), Err(TransformError::UnsupportedRatio { from: 64, to: 64 }));
        assert_eq!(resample_scale(48, 6, 0), Err(TransformError::UnsupportedSize(48)));
        assert_eq!(halving_scale(32, 16, 16), Err(TransformError::IndexOutOfRange { index: 16, len: 16 }));
        assert_eq!(halving_scale(32, 8, 0), Err(TransformError::UnsupportedRatio { from: 32, to: 8 }));
        assert_eq!(butterfly_multiplier(4, 2), Err(TransformError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(butterfly_multiplier(2, 0), Err(TransformError::IndexOutOfRange { index: 0, len: 0 }));
        assert_eq!(butterfly_multiplier(12, 0), Err(TransformError::UnsupportedSize(12)));
    }
}
