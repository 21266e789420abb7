//!                      Reference Discrete Cosine Transform                 !//
//!
//! Copyright 2025 HaמuL
//! Description: Slow DCT-II definitions for cross-checking the butterflies
//! Dependencies: rustfft

use std::f64::consts::{PI, SQRT_2};
use rustfft::{FftPlanner, num_complex::Complex};

fn ac_weight(k: usize) -> f64 { if k == 0 { 1.0 } else { SQRT_2 } }

/// dct
/// Direct O(N^2) DCT-II, DC as mean, AC scaled by sqrt2 / N
pub fn dct(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    return (0..n).map(|k| {
        let sum = x.iter().enumerate().map(|(j, &v)| {
            v * ((PI / n as f64) * (j as f64 + 0.5) * k as f64).cos()
        }).sum::<f64>();
        sum * ac_weight(k) / n as f64
    }).collect();
}

/// idct
/// Direct inverse of dct
pub fn idct(y: &[f64]) -> Vec<f64> {
    let n = y.len();
    return (0..n).map(|i| {
        y.iter().enumerate().map(|(k, &c)| {
            c * ac_weight(k) * ((PI / n as f64) * (i as f64 + 0.5) * k as f64).cos()
        }).sum::<f64>()
    }).collect();
}

/// fft_dct
/// DCT-II through a 2N-point FFT of the mirrored sequence
pub fn fft_dct(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut beta = vec![Complex::new(0.0, 0.0); 2 * n];

    for i in 0..n {
        beta[i] = Complex::new(x[i], 0.0);
        beta[2 * n - 1 - i] = Complex::new(x[i], 0.0);
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(2 * n);
    fft.process(&mut beta);

    return (0..n).map(|k| {
        let angle = -PI * k as f64 / (2.0 * n as f64);
        let re = beta[k].re * angle.cos() - beta[k].im * angle.sin();
        re * ac_weight(k) / (2.0 * n as f64)
    }).collect();
}
