//!                          Frequency-domain resampler                      !//
//!
//! Copyright 2025 HaמuL
//! Description: Reinterprets DCT coefficients at another block length
//! Dependencies: tracing

use crate::{
    error::{Result, TransformError},
    sizes::TransformSize,
    tables::stage_scales,
};
use tracing::{debug, trace};

/// Stage
/// One tabulated size change, 8x or 2x
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    from: TransformSize,
    to: TransformSize,
    scales: &'static [f64],
}

impl Stage {
    fn new(from: TransformSize, to: TransformSize) -> Option<Self> {
        return stage_scales(from, to).map(|scales| Self { from, to, scales });
    }

    pub fn from(&self) -> TransformSize { self.from }
    pub fn to(&self) -> TransformSize { self.to }
    pub fn ratio(&self) -> usize { 1 << self.from.ratio_log2(self.to) }
    pub fn scales(&self) -> &'static [f64] { self.scales }
}

/// plan
/// Fewest tabulated stages between two distinct sizes
/// 8x stages come first from the large end; upsampling mirrors the downsampling plan
fn plan(from: TransformSize, to: TransformSize) -> Option<Vec<Stage>> {
    let (large, small) = (from.max(to), from.min(to));
    let mut down = Vec::new();
    let mut cur = large;
    while cur > small {
        let step = if cur.ratio_log2(small) >= 3 { 3 } else { 1 };
        let next = TransformSize::ALL[(cur.log2() - step) as usize];
        down.push((cur, next));
        cur = next;
    }

    return if from > to {
        down.into_iter().map(|(a, b)| Stage::new(a, b)).collect()
    } else {
        down.into_iter().rev().map(|(a, b)| Stage::new(b, a)).collect()
    };
}

/// Resampler
/// Validated plan for moving coefficients from one block length to another
#[derive(Debug, Clone, PartialEq)]
pub struct Resampler {
    from: TransformSize,
    to: TransformSize,
    stages: Vec<Stage>,
}

impl Resampler {
    /// new
    /// Builds the stage plan once
    /// Parameters: Source length, Destination length
    /// Returns: Resampler, UnsupportedSize for a bad source,
    ///          UnsupportedResampleRatio if the destination is not the source scaled by a power of two
    pub fn new(from: usize, to: usize) -> Result<Self> {
        let from_size = TransformSize::new(from)?;
        let unsupported = TransformError::UnsupportedResampleRatio { from, to };

        let to_size = match TransformSize::new(to) {
            Ok(size) if size != from_size => size,
            _ => { debug!(from, to, "rejected resample request"); return Err(unsupported); }
        };
        let stages = plan(from_size, to_size).ok_or(unsupported)?;
        trace!(from, to, stages = ?stages.iter().map(Stage::ratio).collect::<Vec<_>>(), "resample plan");

        return Ok(Self { from: from_size, to: to_size, stages });
    }

    pub fn from(&self) -> TransformSize { self.from }
    pub fn to(&self) -> TransformSize { self.to }
    pub fn stages(&self) -> &[Stage] { &self.stages }
    pub fn is_downsample(&self) -> bool { self.from > self.to }

    /// Number of coefficients carried across; the rest are dropped or zero-filled
    pub fn kept(&self) -> usize { self.from.min(self.to).len() }

    /// total_scale
    /// Combined correction for coefficient i across every stage
    pub fn total_scale(&self, i: usize) -> Result<f64> {
        if i >= self.kept() { return Err(TransformError::IndexOutOfRange { index: i, len: self.kept() }); }
        return Ok(self.stages.iter().map(|stage| stage.scales[i]).product());
    }

    /// apply_into
    /// Parameters: Source coefficients (from().len()), Destination buffer (to().len())
    /// Nothing is written unless both lengths match
    pub fn apply_into(&self, coeffs: &[f64], out: &mut [f64]) -> Result<()> {
        if coeffs.len() != self.from.len() {
            return Err(TransformError::LengthMismatch { expected: self.from.len(), actual: coeffs.len() });
        }
        if out.len() != self.to.len() {
            return Err(TransformError::LengthMismatch { expected: self.to.len(), actual: out.len() });
        }

        let (kept, rest) = out.split_at_mut(self.kept());
        kept.copy_from_slice(&coeffs[..self.kept()]);
        for stage in &self.stages {
            kept.iter_mut().zip(stage.scales).for_each(|(c, s)| *c *= s);
        }
        rest.fill(0.0);
        return Ok(());
    }

    pub fn apply(&self, coeffs: &[f64]) -> Result<Vec<f64>> {
        let mut out = vec![0.0; self.to.len()];
        self.apply_into(coeffs, &mut out)?;
        return Ok(out);
    }
}

/// downsample
/// Low-frequency coefficients of a larger block, rescaled for a smaller one
/// Parameters: Source length, Source coefficients, Destination length (smaller)
/// Returns: to_size coefficients
pub fn downsample(from_size: usize, coeffs: &[f64], to_size: usize) -> Result<Vec<f64>> {
    if to_size >= from_size { return Err(TransformError::UnsupportedResampleRatio { from: from_size, to: to_size }); }
    return Resampler::new(from_size, to_size)?.apply(coeffs);
}

/// upsample
/// Coefficients of a smaller block rescaled for a larger one, high frequencies zero
/// Parameters: Source length, Source coefficients, Destination length (larger)
/// Returns: to_size coefficients
pub fn upsample(from_size: usize, coeffs: &[f64], to_size: usize) -> Result<Vec<f64>> {
    if to_size <= from_size { return Err(TransformError::UnsupportedResampleRatio { from: from_size, to: to_size }); }
    return Resampler::new(from_size, to_size)?.apply(coeffs);
}
