use rayon::prelude::*;
use serde::Serialize;

use crate::buffer::Matrix;

/// Two-pass sample statistics of every cell of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Moments {
    /// Sum of all cells.
    pub sum: f32,
    pub mean: f32,
    /// Bessel-corrected sample variance.
    pub variance: f32,
    pub std_dev: f32,
}

/// Mean, sample variance and standard deviation of `a`.
///
/// Both passes reduce one partial sum per row across the worker pool. The
/// divisors are computed in `f32`: a 1x1 matrix yields a NaN variance and an
/// empty one a NaN mean.
pub fn moments(a: &Matrix) -> Moments {
    let count = a.as_slice().len() as f32;

    let sum: f32 = a.par_rows().map(|row| row.iter().sum::<f32>()).sum();
    let mean = sum / count;

    let sum_sq: f32 = a
        .par_rows()
        .map(|row| row.iter().map(|&x| (x - mean) * (x - mean)).sum::<f32>())
        .sum();
    let variance = sum_sq / (count - 1.0);

    Moments {
        sum,
        mean,
        variance,
        std_dev: variance.sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two_closed_form() {
        let a = Matrix::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let m = moments(&a);
        assert_eq!(m.sum, 10.0);
        assert_eq!(m.mean, 2.5);
        assert!((m.variance - 5.0 / 3.0).abs() < 1e-6, "variance {}", m.variance);
        assert!((m.std_dev - (5.0f32 / 3.0).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn constant_matrix_has_zero_variance() {
        let n = 16;
        let a = Matrix::from_vec(n, vec![0.75; n * n]).unwrap();
        let m = moments(&a);
        assert_eq!(m.mean, 0.75);
        assert_eq!(m.variance, 0.0);
        assert_eq!(m.std_dev, 0.0);
    }

    #[test]
    fn every_row_contributes_to_the_sum() {
        let a = Matrix::from_vec(3, vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0]).unwrap();
        assert_eq!(moments(&a).sum, 18.0);
        assert_eq!(moments(&a).mean, 2.0);
    }

    #[test]
    fn single_cell_variance_is_nan() {
        let a = Matrix::from_vec(1, vec![4.0]).unwrap();
        let m = moments(&a);
        assert_eq!(m.mean, 4.0);
        assert!(m.variance.is_nan());
    }

    #[test]
    fn empty_matrix_does_not_panic() {
        let a = Matrix::zeroed(0).unwrap();
        assert!(moments(&a).mean.is_nan());
    }
}
