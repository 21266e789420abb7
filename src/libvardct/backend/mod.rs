//!                              Library Backend                             !//
//!
//! Copyright 2025 HaמuL
//! Description: Slice helpers for the butterfly recursion

pub trait Interleave<T> {
    fn interleave(&mut self, even: &[T], odd: &[T]) where T: Copy;
    fn deinterleave(&self, even: &mut [T], odd: &mut [T]) where T: Copy;
}

impl<T: Copy> Interleave<T> for [T] {
    /// interleave
    /// Writes even[i] to self[2i] and odd[i] to self[2i + 1]
    fn interleave(&mut self, even: &[T], odd: &[T]) {
        for (pair, (&e, &o)) in self.chunks_exact_mut(2).zip(even.iter().zip(odd)) {
            pair[0] = e; pair[1] = o;
        }
    }

    /// deinterleave
    /// Inverse of interleave
    fn deinterleave(&self, even: &mut [T], odd: &mut [T]) {
        for (pair, (e, o)) in self.chunks_exact(2).zip(even.iter_mut().zip(odd.iter_mut())) {
            *e = pair[0]; *o = pair[1];
        }
    }
}

pub trait Mirror {
    fn mirror_sum(&self, out: &mut [f64]);
    fn mirror_diff(&self, out: &mut [f64], weights: &[f64]);
}

impl Mirror for [f64] {
    /// mirror_sum
    /// out[i] = self[i] + self[n-1-i] for the first half
    fn mirror_sum(&self, out: &mut [f64]) {
        let (front, back) = self.split_at(self.len() / 2);
        out.iter_mut().zip(front.iter().zip(back.iter().rev()))
            .for_each(|(o, (&a, &b))| *o = a + b);
    }

    /// mirror_diff
    /// out[i] = (self[i] - self[n-1-i]) * weights[i] for the first half
    fn mirror_diff(&self, out: &mut [f64], weights: &[f64]) {
        let (front, back) = self.split_at(self.len() / 2);
        out.iter_mut().zip(front.iter().zip(back.iter().rev())).zip(weights)
            .for_each(|((o, (&a, &b)), &w)| *o = (a - b) * w);
    }
}
