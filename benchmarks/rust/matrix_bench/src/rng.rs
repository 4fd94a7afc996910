//! Seeded buffer initialization.
//!
//! A single generator is created per process and every buffer draws from it in
//! allocation order. Matrices are filled row by row, column by column, so the
//! cell a given draw lands in is fixed by the seed alone.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::buffer::{Matrix, Vector};
use crate::error::Result;
use crate::{SEED, VALUE_RANGE};

pub struct SeededFill {
    rng: ChaCha8Rng,
    range: f32,
}

impl SeededFill {
    /// Values are drawn uniformly from `[-range, range]`.
    pub fn new(seed: u64, range: f32) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            range: range.abs(),
        }
    }

    #[inline]
    pub fn sample(&mut self) -> f32 {
        self.rng.gen_range(-self.range..=self.range)
    }

    /// Random `n x n` matrix, filled in row-major order.
    pub fn matrix(&mut self, n: usize) -> Result<Matrix> {
        let mut m = Matrix::zeroed(n)?;
        for row in 0..n {
            for col in 0..n {
                let v = self.sample();
                m.set(row, col, v);
            }
        }
        Ok(m)
    }

    pub fn vector(&mut self, len: usize) -> Result<Vector> {
        let mut v = Vector::zeroed(len)?;
        for x in v.as_mut_slice() {
            *x = self.sample();
        }
        Ok(v)
    }
}

impl Default for SeededFill {
    fn default() -> Self {
        Self::new(SEED, VALUE_RANGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_stay_in_range() {
        let mut fill = SeededFill::new(7, 2.5);
        let v = fill.vector(10_000).unwrap();
        assert!(v.as_slice().iter().all(|x| (-2.5..=2.5).contains(x)));
    }

    #[test]
    fn negative_range_is_folded() {
        let v = SeededFill::new(1, -3.0).vector(1_000).unwrap();
        assert!(v.as_slice().iter().all(|x| (-3.0..=3.0).contains(x)));
        assert!(v.as_slice().iter().any(|&x| x > 0.0));
        assert!(v.as_slice().iter().any(|&x| x < 0.0));
    }

    #[test]
    fn matrix_consumes_stream_row_major() {
        let mut a = SeededFill::new(SEED, VALUE_RANGE);
        let mut b = SeededFill::new(SEED, VALUE_RANGE);
        let m = a.matrix(4).unwrap();
        let flat = b.vector(16).unwrap();
        assert_eq!(m.as_slice(), flat.as_slice());
    }

    #[test]
    fn consecutive_buffers_differ() {
        let mut fill = SeededFill::default();
        let a = fill.matrix(3).unwrap();
        let b = fill.matrix(3).unwrap();
        assert_ne!(a, b);
    }
}
