//!                               Error types                                !//
//!
//! Copyright 2025 HaמuL
//! Description: Errors for transform and resample requests
//! Dependencies: thiserror

use thiserror::Error;

/// Result type for every fallible operation in this crate
pub type Result<T> = std::result::Result<T, TransformError>;

/// TransformError
/// Precondition violations; none of these are transient
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    /// Block length outside the supported power-of-two set
    #[error("unsupported transform size: {0}")]
    UnsupportedSize(usize),

    /// Coefficient or stage index past the end of its table
    #[error("index {index} out of range for table of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Table lookup for a size pair that has no tabulated stage
    #[error("no scale table for {from} -> {to}")]
    UnsupportedRatio { from: usize, to: usize },

    /// Resample request that cannot be built from tabulated stages
    #[error("cannot resample {from} -> {to}")]
    UnsupportedResampleRatio { from: usize, to: usize },

    /// Buffer length differs from the declared transform size
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
