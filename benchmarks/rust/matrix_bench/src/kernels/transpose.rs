use rayon::prelude::*;

use crate::buffer::Matrix;
use crate::error::{BenchError, Result};

/// Serial transpose: `bt[j][k] = b[k][j]`.
pub fn transpose_into(b: &Matrix, bt: &mut Matrix) -> Result<()> {
    BenchError::check_len("transpose: output", b.as_slice().len(), bt.as_slice().len())?;
    let n = b.n();
    for j in 0..n {
        for k in 0..n {
            bt.set(j, k, b.get(k, j));
        }
    }
    Ok(())
}

/// `c = a x b`, computed by transposing `b` into `bt` first so the inner
/// product reads both operands along rows.
///
/// The transpose runs serially; the product is parallel over rows of `c`.
/// Each cell starts at zero and accumulates over `k` in order.
pub fn multiply_transposed_into(
    a: &Matrix,
    b: &Matrix,
    bt: &mut Matrix,
    c: &mut Matrix,
) -> Result<()> {
    let len = a.as_slice().len();
    BenchError::check_len("multiply_transposed: b", len, b.as_slice().len())?;
    BenchError::check_len("multiply_transposed: c", len, c.as_slice().len())?;
    transpose_into(b, bt)?;

    let bt = &*bt;
    c.par_rows_mut()
        .zip(a.par_rows())
        .for_each(|(c_row, a_row)| {
            for (j, cij) in c_row.iter_mut().enumerate() {
                *cij = 0.0;
                for (aik, btjk) in a_row.iter().zip(bt.row(j)) {
                    *cij += aik * btjk;
                }
            }
        });
    Ok(())
}

pub fn multiply_transposed(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let mut bt = Matrix::zeroed(b.n())?;
    let mut c = Matrix::zeroed(a.n())?;
    multiply_transposed_into(a, b, &mut bt, &mut c)?;
    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transposes() {
        let b = Matrix::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut bt = Matrix::zeroed(2).unwrap();
        transpose_into(&b, &mut bt).unwrap();
        assert_eq!(bt.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn one_by_one() {
        let a = Matrix::from_vec(1, vec![3.0]).unwrap();
        let b = Matrix::from_vec(1, vec![-2.5]).unwrap();
        let c = multiply_transposed(&a, &b).unwrap();
        assert_eq!(c.get(0, 0), 3.0 * -2.5);
    }

    #[test]
    fn matches_textbook_product() {
        // [1 2] [5 6]   [19 22]
        // [3 4] [7 8] = [43 50]
        let a = Matrix::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Matrix::from_vec(2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
        let c = multiply_transposed(&a, &b).unwrap();
        assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn stale_output_is_overwritten() {
        let a = Matrix::from_vec(2, vec![1.0, 0.0, 0.0, 1.0]).unwrap();
        let b = Matrix::from_vec(2, vec![2.0, 3.0, 4.0, 5.0]).unwrap();
        let mut bt = Matrix::zeroed(2).unwrap();
        let mut c = Matrix::from_vec(2, vec![99.0; 4]).unwrap();
        multiply_transposed_into(&a, &b, &mut bt, &mut c).unwrap();
        assert_eq!(c.as_slice(), b.as_slice());
    }

    #[test]
    fn rejects_mismatched_sizes() {
        let a = Matrix::zeroed(3).unwrap();
        let b = Matrix::zeroed(2).unwrap();
        assert!(multiply_transposed(&a, &b).is_err());
    }
}
