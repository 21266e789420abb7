//!                             Transform sizes                              !//
//!
//! Copyright 2025 HaמuL
//! Description: Supported block lengths and their validation

use crate::error::{Result, TransformError};

/// TransformSize
/// One of the supported power-of-two block lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransformSize {
    N1, N2, N4, N8, N16, N32, N64, N128, N256,
}

use TransformSize::*;

impl TransformSize {
    /// Every supported size, smallest first
    pub const ALL: [TransformSize; 9] = [N1, N2, N4, N8, N16, N32, N64, N128, N256];

    /// Largest supported block length
    pub const MAX_LEN: usize = 256;

    /// new
    /// Validates a block length
    /// Parameters: Block length
    /// Returns: TransformSize, or UnsupportedSize for anything outside 1..=256 or not a power of two
    pub fn new(len: usize) -> Result<Self> {
        if !len.is_power_of_two() || len > Self::MAX_LEN { return Err(TransformError::UnsupportedSize(len)); }
        return Ok(Self::ALL[len.trailing_zeros() as usize]);
    }

    pub const fn len(self) -> usize { 1 << self.log2() }

    pub const fn log2(self) -> u32 {
        return match self {
            N1 => 0, N2 => 1, N4 => 2, N8 => 3, N16 => 4,
            N32 => 5, N64 => 6, N128 => 7, N256 => 8,
        };
    }

    /// half
    /// Returns: The next smaller size, None for N1
    pub fn half(self) -> Option<Self> {
        return match self.log2() {
            0 => None,
            l => Some(Self::ALL[l as usize - 1]),
        };
    }

    /// double
    /// Returns: The next larger size, None for N256
    pub fn double(self) -> Option<Self> {
        return Self::ALL.get(self.log2() as usize + 1).copied();
    }

    /// ratio
    /// log2 of the length ratio between two sizes, larger over smaller
    pub fn ratio_log2(self, other: Self) -> u32 {
        return self.log2().abs_diff(other.log2());
    }
}

impl TryFrom<usize> for TransformSize {
    type Error = TransformError;
    fn try_from(len: usize) -> Result<Self> { Self::new(len) }
}

impl From<TransformSize> for usize {
    fn from(size: TransformSize) -> usize { size.len() }
}

/// supported_sizes
/// Returns: All supported transform sizes, smallest first
pub fn supported_sizes() -> &'static [TransformSize] {
    return &TransformSize::ALL;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exactly_the_powers_of_two_up_to_256() {
        let accepted: Vec<usize> = (0..=1024).filter(|&n| TransformSize::new(n).is_ok()).collect();
        assert_eq!(accepted, vec![1, 2, 4, 8, 16, 32, 64, 128, 256]);
        assert_eq!(TransformSize::new(0), Err(TransformError::UnsupportedSize(0)));
        assert_eq!(TransformSize::new(512), Err(TransformError::UnsupportedSize(512)));
        assert_eq!(TransformSize::new(24), Err(TransformError::UnsupportedSize(24)));
    }

    #[test]
    fn len_and_log2_agree() {
        for (i, size) in supported_sizes().iter().enumerate() {
            assert_eq!(size.log2() as usize, i);
            assert_eq!(size.len(), 1 << i);
            assert_eq!(TransformSize::new(size.len()), Ok(*size));
        }
    }

    #[test]
    fn half_and_double_walk_the_ladder() {
        assert_eq!(N1.half(), None);
        assert_eq!(N256.double(), None);
        assert_eq!(N64.half(), Some(N32));
        assert_eq!(N64.double(), Some(N128));
        assert_eq!(N8.ratio_log2(N64), 3);
        assert_eq!(N64.ratio_log2(N8), 3);
    }
}
