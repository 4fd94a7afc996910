//! Shared harness for the dense-matrix micro-benchmarks.
//!
//! Every benchmark binary under `benchmarks/rust/` follows the same skeleton:
//! allocate row-major `f32` buffers, fill them from a fixed-seed generator,
//! time one parallel kernel, derive a FLOP/s figure and optionally append a
//! CSV row. This crate holds the pieces they share.

pub mod buffer;
pub mod cli;
pub mod csv_log;
pub mod error;
pub mod kernels;
pub mod logging;
pub mod metrics;
pub mod report;
pub mod rng;

pub use buffer::{Matrix, Vector};
pub use cli::{BenchConfig, Verbosity};
pub use error::{BenchError, Result};
pub use metrics::{Kernel, MetricsRecord};
pub use rng::SeededFill;

/// Dimension used when no size argument is given.
pub const DEFAULT_N: usize = 4096;

/// Random values are drawn from `[-VALUE_RANGE, VALUE_RANGE]`.
pub const VALUE_RANGE: f32 = 100.0;

/// Every run seeds its generator with this constant.
pub const SEED: u64 = 1;
