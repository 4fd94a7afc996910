//! Parallel kernels under test.
//!
//! Each kernel is one rayon data-parallel loop over `f32` data with `f32`
//! accumulation. Outputs are written to disjoint slices; the only shared
//! accumulators are the variance sums, which rayon reduces per row.

pub mod dot;
pub mod matvec;
pub mod transpose;
pub mod variance;

pub use dot::{dot, dot_into};
pub use matvec::{matvec, matvec_into};
pub use transpose::{multiply_transposed, multiply_transposed_into, transpose_into};
pub use variance::{moments, Moments};
