use rayon::prelude::*;

use crate::buffer::{Matrix, Vector};
use crate::error::{BenchError, Result};

/// `c[j] = sum_k a[j][k] * b[k]`, one row dot product per output element,
/// parallel over `j`.
pub fn matvec_into(a: &Matrix, b: &Vector, c: &mut Vector) -> Result<()> {
    BenchError::check_len("matvec: b", a.n(), b.len())?;
    BenchError::check_len("matvec: c", a.n(), c.len())?;

    let b = b.as_slice();
    c.as_mut_slice()
        .par_iter_mut()
        .zip(a.par_rows())
        .for_each(|(cj, row)| {
            let mut val = 0.0f32;
            for (ajk, bk) in row.iter().zip(b) {
                val += ajk * bk;
            }
            *cj = val;
        });
    Ok(())
}

pub fn matvec(a: &Matrix, b: &Vector) -> Result<Vector> {
    let mut c = Vector::zeroed(a.n())?;
    matvec_into(a, b, &mut c)?;
    Ok(c)
}
