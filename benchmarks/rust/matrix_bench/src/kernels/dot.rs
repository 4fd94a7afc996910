use rayon::prelude::*;

use crate::buffer::Vector;
use crate::error::{BenchError, Result};

/// Elementwise product `c[i] = a[i] * b[i]`, parallel over `i`.
///
/// Despite the benchmark's name this is not an inner product: the output is a
/// full vector.
pub fn dot_into(a: &Vector, b: &Vector, c: &mut Vector) -> Result<()> {
    BenchError::check_len("dot: b", a.len(), b.len())?;
    BenchError::check_len("dot: c", a.len(), c.len())?;

    c.as_mut_slice()
        .par_iter_mut()
        .zip(a.as_slice().par_iter().zip(b.as_slice().par_iter()))
        .for_each(|(ci, (ai, bi))| *ci = ai * bi);
    Ok(())
}

pub fn dot(a: &Vector, b: &Vector) -> Result<Vector> {
    let mut c = Vector::zeroed(a.len())?;
    dot_into(a, b, &mut c)?;
    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplies_elementwise() {
        let a = Vector::from_vec(vec![1.0, -2.0, 3.5]);
        let b = Vector::from_vec(vec![4.0, 0.5, -2.0]);
        let c = dot(&a, &b).unwrap();
        assert_eq!(c.as_slice(), &[4.0, -1.0, -7.0]);
    }

    #[test]
    fn rejects_mismatched_operands() {
        let a = Vector::from_vec(vec![1.0; 4]);
        let b = Vector::from_vec(vec![1.0; 3]);
        assert!(matches!(
            dot(&a, &b),
            Err(BenchError::ShapeMismatch { expected: 4, actual: 3, .. })
        ));
    }

    #[test]
    fn rejects_short_output() {
        let a = Vector::from_vec(vec![1.0; 4]);
        let mut c = Vector::from_vec(vec![0.0; 2]);
        assert!(dot_into(&a, &a, &mut c).is_err());
    }
}
