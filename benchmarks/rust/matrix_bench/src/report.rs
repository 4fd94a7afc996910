//! Stdout summary and result sinks.

use crate::buffer::{Matrix, Vector};
use crate::cli::BenchConfig;
use crate::csv_log::{self, format_exp};
use crate::error::Result;
use crate::metrics::{Kernel, MetricsRecord};

/// Output index echoed after a dot run.
pub const DOT_SPOT: usize = 8;

/// Output cell `(row, col)` echoed after a transpose-multiply run.
pub const PRODUCT_SPOT: (usize, usize) = (4, 5);

/// `c[DOT_SPOT]`, when the vector is long enough to have it.
pub fn dot_spot(c: &Vector) -> Option<f32> {
    c.get(DOT_SPOT)
}

/// `c[4][5]`, when the matrix is large enough to have it.
pub fn product_spot(c: &Matrix) -> Option<f32> {
    let (row, col) = PRODUCT_SPOT;
    (c.n() > row.max(col)).then(|| c.get(row, col))
}

pub fn throughput_lines(record: &MetricsRecord) -> [String; 2] {
    [
        format!(
            "Number of floating point operations = 2 * {}^3 = {}",
            record.n, record.flop
        ),
        format!("Flops = {}", format_exp(record.flops)),
    ]
}

/// Human-readable summary of one run. `spot` is an output element to echo as
/// a sanity check; only the dot and transpose-multiply kernels print one.
pub fn summary_lines(record: &MetricsRecord, spot: Option<f32>) -> Vec<String> {
    let n = record.n;
    let secs = record.seconds;
    let mut lines = Vec::new();

    match record.kernel {
        Kernel::Variance => {
            if let Some(m) = &record.moments {
                lines.push(format!("sum1: {:.6}", m.sum));
                lines.push(format!("The Variance is {:.6}", m.variance));
                lines.push(format!("The Standard Deviation is {:.6}", m.std_dev));
            }
            lines.push(format!(
                "Found the variance and Standard Deviation of a {n} x {n} matrix in {secs:.6} seconds"
            ));
        }
        Kernel::Dot => {
            lines.push(format!("Performed a {n} x {n} Dot product in {secs:.6} seconds"));
        }
        Kernel::TransposeMultiply => {
            lines.push(format!(
                "Performed a {n} x {n} matrix multiply transpose in {secs:.6} seconds"
            ));
        }
        Kernel::MatrixVector => {
            lines.push(format!(
                "Performed a {n} x {n} matrix vector multiply in {secs:.6} seconds"
            ));
        }
    }

    lines.extend(throughput_lines(record));

    match (record.kernel, spot) {
        (Kernel::Dot, Some(v)) => lines.push(format!("matC[{DOT_SPOT}] = {v:.6}")),
        (Kernel::TransposeMultiply, Some(v)) => {
            let (row, col) = PRODUCT_SPOT;
            lines.push(format!("Element from Matrix C[{row}][{col}]: {v:.6}"));
        }
        _ => {}
    }
    lines
}

/// Machine-readable line for scripts that scrape benchmark output.
pub fn result_line(record: &MetricsRecord) -> String {
    format!(
        "RESULT:rust_{}:{:.4}",
        record.kernel.binary_name(),
        record.seconds
    )
}

/// Emit the record to every sink the run asked for: the summary and
/// `RESULT:` line when verbose, JSON when requested, and the CSV file when a
/// path was given.
pub fn finish(config: &BenchConfig, record: &MetricsRecord, spot: Option<f32>) -> Result<()> {
    if config.verbosity.is_verbose() {
        for line in summary_lines(record, spot) {
            println!("{line}");
        }
        println!("{}", result_line(record));
    }
    if config.json {
        println!("{}", serde_json::to_string(record)?);
    }
    if let Some(path) = &config.csv_path {
        csv_log::append_record(path, record)?;
    }
    Ok(())
}
