use std::collections::TryReserveError;
use std::path::PathBuf;

/// Errors surfaced by the benchmark harness.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("matrix dimension {n} overflows the address space ({n} x {n} elements)")]
    DimensionOverflow { n: usize },

    #[error("failed to allocate buffer of {elements} f32 elements: {source}")]
    Allocation {
        elements: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("{op}: expected {expected} elements, got {actual}")]
    ShapeMismatch {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode metrics record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, BenchError>;

impl BenchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BenchError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn check_len(op: &'static str, expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(BenchError::ShapeMismatch {
                op,
                expected,
                actual,
            })
        }
    }
}
