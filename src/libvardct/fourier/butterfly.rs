//!                      Recursive DCT-II butterflies                        !//
//!
//! Copyright 2025 HaמuL
//! Description: Unscaled even/odd recursion of the DCT-II and its transpose

use crate::{
    backend::{Interleave, Mirror},
    sizes::TransformSize,
    tables::butterfly_multipliers,
};
use std::f64::consts::SQRT_2;

/// Scratch length that covers every recursion level of a 256-point transform
pub const SCRATCH_LEN: usize = 2 * TransformSize::MAX_LEN;

/// forward
/// Unscaled DCT-II; the caller multiplies by 1/N afterwards
/// Parameters: Size, Buffer of size.len() values (in-place), Scratch of at least 2 * size.len()
pub fn forward(size: TransformSize, mem: &mut [f64], scratch: &mut [f64]) {
    let (half, weights) = match (size.half(), butterfly_multipliers(size)) {
        (Some(half), Some(weights)) => (half, weights),
        (Some(_), None) => {
            let (a, b) = (mem[0], mem[1]);
            mem[0] = a + b; mem[1] = a - b;
            return;
        }
        (None, _) => return,
    };
    let n = size.len();
    let (tmp, rest) = scratch.split_at_mut(n);
    let (even, odd) = tmp.split_at_mut(n / 2);

    // 1. Mirrored sums give the even coefficients
    mem.mirror_sum(even);
    forward(half, even, rest);

    // 2. Weighted mirrored differences give the odd coefficients, after folding
    mem.mirror_diff(odd, weights);
    forward(half, odd, rest);
    odd[0] = odd[0] * SQRT_2 + odd[1];
    for i in 1..odd.len() - 1 { odd[i] += odd[i + 1]; }

    // 3. Even coefficients at 2i, odd at 2i + 1
    mem.interleave(even, odd);
}

/// inverse
/// Transposed recursion of forward; exact inverse of the 1/N-scaled forward
/// Parameters: Size, Buffer of size.len() values (in-place), Scratch of at least 2 * size.len()
pub fn inverse(size: TransformSize, mem: &mut [f64], scratch: &mut [f64]) {
    let (half, weights) = match (size.half(), butterfly_multipliers(size)) {
        (Some(half), Some(weights)) => (half, weights),
        (Some(_), None) => {
            let (a, b) = (mem[0], mem[1]);
            mem[0] = a + b; mem[1] = a - b;
            return;
        }
        (None, _) => return,
    };
    let n = size.len();
    let (tmp, rest) = scratch.split_at_mut(n);
    let (even, odd) = tmp.split_at_mut(n / 2);
    mem.deinterleave(even, odd);

    inverse(half, even, rest);

    // Unfold, then undo the odd half
    for i in (1..odd.len()).rev() { odd[i] += odd[i - 1]; }
    odd[0] *= SQRT_2;
    inverse(half, odd, rest);

    for (i, (&e, (&o, &w))) in even.iter().zip(odd.iter().zip(weights)).enumerate() {
        mem[i] = e + o * w;
        mem[n - 1 - i] = e - o * w;
    }
}
