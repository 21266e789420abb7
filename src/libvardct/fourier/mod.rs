//!                                  Fourier                                 !//
//!
//! Copyright 2025 HaמuL
//! Description: Fast DCT-II and inverse for power-of-two blocks
//!
//! Convention: the DC coefficient is the sample mean and AC coefficient k is
//! sqrt2/N * sum x_n cos((2n+1) k pi / 2N). The synthesis basis then has the
//! same amplitude at every block length, which is what the resample tables
//! assume.

mod butterfly;
#[cfg(test)]
pub(crate) mod reference;

use crate::{error::{Result, TransformError}, sizes::TransformSize};
use butterfly::SCRATCH_LEN;

/// Dct
/// Transform handle for one validated block length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dct {
    size: TransformSize,
}

impl Dct {
    pub fn new(len: usize) -> Result<Self> {
        return Ok(Self::with_size(TransformSize::new(len)?));
    }

    pub const fn with_size(size: TransformSize) -> Self { Self { size } }

    pub fn size(&self) -> TransformSize { self.size }
    pub fn len(&self) -> usize { self.size.len() }

    fn check(&self, actual: usize) -> Result<()> {
        if actual != self.len() { return Err(TransformError::LengthMismatch { expected: self.len(), actual }); }
        return Ok(());
    }

    /// forward_in_place
    /// Replaces samples with their DCT-II coefficients
    /// Parameters: Sample buffer of exactly len() values
    pub fn forward_in_place(&self, buf: &mut [f64]) -> Result<()> {
        self.check(buf.len())?;
        let mut scratch = [0.0; SCRATCH_LEN];
        butterfly::forward(self.size, buf, &mut scratch);

        let scale = 1.0 / self.len() as f64;
        buf.iter_mut().for_each(|c| *c *= scale);
        return Ok(());
    }

    /// inverse_in_place
    /// Replaces coefficients with the samples they describe
    /// Parameters: Coefficient buffer of exactly len() values
    pub fn inverse_in_place(&self, buf: &mut [f64]) -> Result<()> {
        self.check(buf.len())?;
        let mut scratch = [0.0; SCRATCH_LEN];
        butterfly::inverse(self.size, buf, &mut scratch);
        return Ok(());
    }

    pub fn forward(&self, samples: &[f64]) -> Result<Vec<f64>> {
        let mut buf = samples.to_vec();
        self.forward_in_place(&mut buf)?;
        return Ok(buf);
    }

    pub fn inverse(&self, coeffs: &[f64]) -> Result<Vec<f64>> {
        let mut buf = coeffs.to_vec();
        self.inverse_in_place(&mut buf)?;
        return Ok(buf);
    }
}

/// forward
/// DCT-II of a block
/// Parameters: Block length, Samples
/// Returns: Coefficients, lowest frequency first
pub fn forward(size: usize, samples: &[f64]) -> Result<Vec<f64>> {
    return Dct::new(size)?.forward(samples);
}

/// inverse
/// Inverse DCT-II of a block
/// Parameters: Block length, Coefficients
/// Returns: Samples
pub fn inverse(size: usize, coeffs: &[f64]) -> Result<Vec<f64>> {
    return Dct::new(size)?.inverse(coeffs);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // xorshift64, deterministic samples in [-256, 256)
    fn samples(n: usize, mut seed: u64) -> Vec<f64> {
        return (0..n).map(|_| {
            seed ^= seed << 13; seed ^= seed >> 7; seed ^= seed << 17;
            (seed >> 11) as f64 / (1u64 << 53) as f64 * 512.0 - 256.0
        }).collect();
    }

    #[test]
    fn matches_direct_definition() {
        for size in TransformSize::ALL {
            let x = samples(size.len(), 0x9e3779b97f4a7c15 ^ size.len() as u64);
            let fast = forward(size.len(), &x).unwrap();
            for (f, r) in fast.iter().zip(reference::dct(&x)) {
                assert_abs_diff_eq!(*f, r, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn matches_fft_definition() {
        for size in TransformSize::ALL {
            let x = samples(size.len(), 42 + size.len() as u64);
            let fast = forward(size.len(), &x).unwrap();
            for (f, r) in fast.iter().zip(reference::fft_dct(&x)) {
                assert_abs_diff_eq!(*f, r, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn inverse_matches_direct_definition() {
        for size in TransformSize::ALL {
            let c = samples(size.len(), 7 * size.len() as u64 + 1);
            let fast = inverse(size.len(), &c).unwrap();
            for (f, r) in fast.iter().zip(reference::idct(&c)) {
                assert_abs_diff_eq!(*f, r, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn round_trip_every_size() {
        for size in TransformSize::ALL {
            let dct = Dct::with_size(size);
            let x = samples(size.len(), 1234567 + size.len() as u64);
            let y = dct.inverse(&dct.forward(&x).unwrap()).unwrap();
            for (a, b) in x.iter().zip(&y) {
                assert_abs_diff_eq!(*a, *b, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn dc_is_the_mean() {
        let coeffs = forward(8, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).unwrap();
        assert_abs_diff_eq!(coeffs[0], 4.5, epsilon = 1e-12);

        let flat = inverse(8, &[2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        assert!(flat.iter().all(|&v| (v - 2.0).abs() < 1e-12));
    }

    #[test]
    fn zeros_stay_zero() {
        for size in TransformSize::ALL {
            let out = forward(size.len(), &vec![0.0; size.len()]).unwrap();
            assert!(out.iter().all(|&c| c == 0.0));
        }
    }

    #[test]
    fn rejects_bad_sizes_and_lengths() {
        assert_eq!(forward(12, &[0.0; 12]), Err(TransformError::UnsupportedSize(12)));
        assert_eq!(forward(512, &[0.0; 512]), Err(TransformError::UnsupportedSize(512)));
        assert_eq!(inverse(8, &[0.0; 4]), Err(TransformError::LengthMismatch { expected: 8, actual: 4 }));

        let mut buf = [1.0, 2.0, 3.0];
        assert!(Dct::new(4).unwrap().forward_in_place(&mut buf).is_err());
        assert_eq!(buf, [1.0, 2.0, 3.0]);
    }
}
