//! Owned row-major buffers.

use rayon::prelude::*;
use rayon::slice::{ChunksExact, ChunksExactMut};

use crate::error::{BenchError, Result};

/// Allocate `elements` zeroed floats, reporting allocation failure instead of aborting.
fn alloc_zeroed(elements: usize) -> Result<Vec<f32>> {
    let mut data = Vec::new();
    data.try_reserve_exact(elements)
        .map_err(|source| BenchError::Allocation { elements, source })?;
    data.resize(elements, 0.0);
    tracing::debug!(elements, bytes = elements * std::mem::size_of::<f32>(), "allocated buffer");
    Ok(data)
}

/// Number of cells in an `n x n` matrix.
pub fn square_len(n: usize) -> Result<usize> {
    n.checked_mul(n).ok_or(BenchError::DimensionOverflow { n })
}

/// Square `n x n` matrix stored as one flat row-major `Vec<f32>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f32>,
}

impl Matrix {
    pub fn zeroed(n: usize) -> Result<Self> {
        let data = alloc_zeroed(square_len(n)?)?;
        Ok(Self { n, data })
    }

    /// Wrap existing row-major data. `data.len()` must be `n * n`.
    pub fn from_vec(n: usize, data: Vec<f32>) -> Result<Self> {
        BenchError::check_len("Matrix::from_vec", square_len(n)?, data.len())?;
        Ok(Self { n, data })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Flat offset of `(row, col)`.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.n && col < self.n,
            "({row}, {col}) out of bounds for {n}x{n} matrix",
            n = self.n
        );
        row * self.n + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        let idx = self.index(row, col);
        self.data[idx] = value;
    }

    pub fn row(&self, row: usize) -> &[f32] {
        let start = row * self.n;
        &self.data[start..start + self.n]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    // `max(1)` keeps the chunk size legal for the empty 0x0 matrix.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f32> {
        self.data.chunks_exact(self.n.max(1))
    }

    pub fn par_rows(&self) -> ChunksExact<'_, f32> {
        self.data.par_chunks_exact(self.n.max(1))
    }

    pub fn par_rows_mut(&mut self) -> ChunksExactMut<'_, f32> {
        self.data.par_chunks_exact_mut(self.n.max(1))
    }
}

/// Dense `f32` vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    pub fn zeroed(len: usize) -> Result<Self> {
        Ok(Self {
            data: alloc_zeroed(len)?,
        })
    }

    pub fn from_vec(data: Vec<f32>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<f32> {
        self.data.get(i).copied()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major() {
        let m = Matrix::zeroed(3).unwrap();
        assert_eq!(m.index(0, 0), 0);
        assert_eq!(m.index(0, 2), 2);
        assert_eq!(m.index(1, 0), 3);
        assert_eq!(m.index(2, 1), 7);
    }

    #[test]
    fn rows_cover_every_cell() {
        let m = Matrix::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let rows: Vec<&[f32]> = m.rows().collect();
        assert_eq!(rows, vec![&[1.0, 2.0][..], &[3.0, 4.0][..]]);
        assert_eq!(m.row(1), &[3.0, 4.0]);
        assert_eq!(m.get(1, 0), 3.0);
    }

    #[test]
    fn empty_matrix_has_no_rows() {
        let m = Matrix::zeroed(0).unwrap();
        assert_eq!(m.rows().count(), 0);
        assert_eq!(m.par_rows().count(), 0);
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = Matrix::from_vec(3, vec![0.0; 8]).unwrap_err();
        assert!(matches!(
            err,
            BenchError::ShapeMismatch {
                expected: 9,
                actual: 8,
                ..
            }
        ));
    }

    #[test]
    fn overflowing_dimension_is_an_error() {
        let err = Matrix::zeroed(usize::MAX).unwrap_err();
        assert!(matches!(err, BenchError::DimensionOverflow { .. }));
    }

    #[test]
    fn huge_allocation_is_reported() {
        // 2^31 x 2^31 floats cannot be reserved on any real machine.
        let n = 1usize << (usize::BITS / 2 - 1);
        match Matrix::zeroed(n) {
            Err(BenchError::Allocation { elements, .. }) => assert_eq!(elements, n * n),
            other => panic!("expected allocation error, got {other:?}"),
        }
    }
}
