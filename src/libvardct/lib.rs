//!                         Variable-size DCT Library                        !//
//!
//! Copyright 2025 HaמuL
//! Description: 1-D DCT-II for power-of-two blocks from 1 to 256, and
//!              frequency-domain resampling between block sizes

mod backend;

pub mod error;
pub mod fourier;
pub mod resample;
pub mod sizes;
pub mod tables;

pub use error::{Result, TransformError};
pub use fourier::{forward, inverse, Dct};
pub use resample::{downsample, upsample, Resampler, Stage};
pub use sizes::{supported_sizes, TransformSize};
