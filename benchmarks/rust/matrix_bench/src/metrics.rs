//! Timing and throughput metrics.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::kernels::Moments;

/// The benchmarks shipped in this workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kernel {
    Variance,
    Dot,
    TransposeMultiply,
    MatrixVector,
}

impl Kernel {
    pub fn binary_name(self) -> &'static str {
        match self {
            Kernel::Variance => "matrix_variance",
            Kernel::Dot => "matrix_dot",
            Kernel::TransposeMultiply => "matrix_multiply_transpose",
            Kernel::MatrixVector => "matrix_vector_multiply",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Kernel::Variance => "Variance and standard deviation of an N x N f32 matrix",
            Kernel::Dot => "Elementwise product of two f32 vectors of length N",
            Kernel::TransposeMultiply => "N x N f32 matrix multiply via transposed B",
            Kernel::MatrixVector => "N x N f32 matrix times length-N vector",
        }
    }

    /// Whether the worker count is part of this kernel's CSV schema.
    pub fn reports_threads(self) -> bool {
        matches!(self, Kernel::Dot | Kernel::TransposeMultiply)
    }

    pub fn csv_header(self) -> &'static str {
        if self.reports_threads() {
            "N,FLOP,Flops,s,Threads"
        } else {
            "N,FLOP,Flops,s"
        }
    }
}

/// Floating-point operation count credited to one run: `2 * n^3`.
///
/// The same convention is used for every kernel so CSV files stay comparable.
pub fn flop_count(n: usize) -> u64 {
    let n = n as u64;
    n.saturating_mul(n).saturating_mul(n).saturating_mul(2)
}

/// Run `f` and return its result with the wall-clock time it took.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// One benchmark result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRecord {
    pub kernel: Kernel,
    pub n: usize,
    pub flop: u64,
    /// Floating-point operations per second.
    pub flops: f64,
    pub seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
    /// Statistics computed by the variance kernel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moments: Option<Moments>,
}

impl MetricsRecord {
    /// `threads` is only kept for kernels whose schema reports it.
    pub fn new(kernel: Kernel, n: usize, elapsed: Duration, threads: usize) -> Self {
        Self::from_seconds(kernel, n, elapsed.as_secs_f64(), threads)
    }

    pub fn from_seconds(kernel: Kernel, n: usize, seconds: f64, threads: usize) -> Self {
        let flop = flop_count(n);
        Self {
            kernel,
            n,
            flop,
            flops: flop as f64 / seconds,
            seconds,
            threads: kernel.reports_threads().then_some(threads),
            moments: None,
        }
    }

    pub fn with_moments(mut self, moments: Moments) -> Self {
        self.moments = Some(moments);
        self
    }
}
